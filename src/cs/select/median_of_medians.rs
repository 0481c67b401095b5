//! Deterministic worst-case linear selection (median of medians).
//!
//! The range is cut into consecutive groups of `group_size` elements, each
//! group is sorted and its median moved to the front of the range, and the
//! median of those medians is selected recursively to serve as the pivot.
//! With groups of at least five, a constant fraction of the range lies on
//! each side of that pivot, so every level discards a constant fraction of
//! the elements and the total work is O(n).

use std::time::Instant;

use log::{debug, trace};

use crate::cs::error::{Error, Result};
use crate::cs::select::bounds::check_rank;
use crate::cs::select::insertion::group_median;
use crate::cs::select::partition::{partition, partition_equal};
use crate::cs::select::Selection;

/// Group size used when none is configured.
pub const DEFAULT_GROUP_SIZE: usize = 11;

/// Smallest group size for which the linear-time bound holds.
pub const MIN_GROUP_SIZE: usize = 5;

/// Configuration for median-of-medians selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectConfig {
    /// Number of elements per group whose median feeds the pivot choice.
    pub group_size: usize,
}

impl SelectConfig {
    /// Creates a configuration with the given group size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGroupSize`] when `group_size` is below
    /// [`MIN_GROUP_SIZE`].
    pub fn new(group_size: usize) -> Result<Self> {
        if group_size < MIN_GROUP_SIZE {
            return Err(Error::InvalidGroupSize {
                group_size,
                min: MIN_GROUP_SIZE,
            });
        }
        Ok(Self { group_size })
    }
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            group_size: DEFAULT_GROUP_SIZE,
        }
    }
}

/// Returns the element of 1-based rank `rank` in worst-case linear time,
/// using groups of [`DEFAULT_GROUP_SIZE`].
///
/// # Errors
///
/// Returns [`Error::InvalidRank`] when `data` is empty or `rank` is not in
/// `1..=data.len()`.
///
/// # Examples
///
/// ```
/// use ordstat::determined_select;
///
/// let data = [5, 3, 8, 1, 9, 2];
/// let third = determined_select(&data, 3).unwrap();
/// assert_eq!(third.value, 3);
/// ```
pub fn determined_select<T: PartialOrd + Clone>(data: &[T], rank: usize) -> Result<Selection<T>> {
    determined_select_with(data, rank, &SelectConfig::default())
}

/// Same as [`determined_select`] with an explicit configuration.
///
/// # Errors
///
/// Returns [`Error::InvalidRank`] for an out-of-range rank and
/// [`Error::InvalidGroupSize`] for a configuration whose group size was set
/// below [`MIN_GROUP_SIZE`] by hand.
pub fn determined_select_with<T: PartialOrd + Clone>(
    data: &[T],
    rank: usize,
    config: &SelectConfig,
) -> Result<Selection<T>> {
    check_rank(data, rank)?;
    let config = SelectConfig::new(config.group_size)?;
    let mut arr = data.to_vec();
    debug!(
        "deterministic select: rank {} of {} elements, group size {}",
        rank,
        arr.len(),
        config.group_size
    );

    let start = Instant::now();
    let index = select_index(&mut arr, rank - 1, config.group_size);
    let elapsed = start.elapsed();

    debug!("deterministic select finished in {:?}", elapsed);
    Ok(Selection::new(arr.swap_remove(index), elapsed))
}

/// Rearranges `arr` and returns the index holding its element of 0-based
/// rank `rank`.
///
/// # Panics
///
/// Panics if `rank >= arr.len()` or `group_size < 2`.
pub fn select_index<T: PartialOrd + Clone>(arr: &mut [T], rank: usize, group_size: usize) -> usize {
    assert!(rank < arr.len(), "rank is out of bounds");
    assert!(group_size >= 2, "group size must be at least 2");
    if arr.len() == 1 {
        return 0;
    }

    let pivot_index = median_of_medians(arr, group_size);
    let pivot = arr[pivot_index].clone();
    let boundary = partition(arr, pivot_index);
    trace!(
        "deterministic select: {} elements, boundary {}, rank {}",
        arr.len(),
        boundary,
        rank
    );

    if rank < boundary {
        return select_index(&mut arr[..boundary], rank, group_size);
    }
    let equal = partition_equal(&mut arr[boundary..], &pivot);
    let skipped = boundary + equal;
    if rank < skipped {
        return boundary;
    }
    skipped + select_index(&mut arr[skipped..], rank - skipped, group_size)
}

/// Gathers the group medians at the front of `arr` and returns the index
/// of their median.
///
/// Group `g` covers `arr[g * group_size..]` and its median is swapped into
/// position `g`, which always lies in an already processed group.
fn median_of_medians<T: PartialOrd + Clone>(arr: &mut [T], group_size: usize) -> usize {
    let groups = arr.len().div_ceil(group_size);
    for g in 0..groups {
        let start = g * group_size;
        let end = (start + group_size).min(arr.len());
        let mid = group_median(&mut arr[start..end]);
        arr.swap(g, start + mid);
    }
    select_index(&mut arr[..groups], (groups - 1) / 2, group_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_determined_select_small() {
        let data = [5, 3, 8, 1, 9, 2];
        assert_eq!(determined_select(&data, 1).unwrap().value, 1);
        assert_eq!(determined_select(&data, 3).unwrap().value, 3);
        assert_eq!(determined_select(&data, 6).unwrap().value, 9);
    }

    #[test]
    fn test_determined_select_matches_sort() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let data: Vec<i64> = (0..2_000).map(|_| rng.gen_range(-1_000..1_000)).collect();
        let mut sorted = data.clone();
        sorted.sort();
        for rank in [1, 2, 11, 12, 121, 1_000, 1_999, 2_000] {
            assert_eq!(determined_select(&data, rank).unwrap().value, sorted[rank - 1]);
        }
    }

    #[test]
    fn test_determined_select_sorted_and_reversed() {
        let ascending: Vec<u32> = (0..1_000).collect();
        let descending: Vec<u32> = (0..1_000).rev().collect();
        for rank in [1, 333, 500, 1_000] {
            assert_eq!(determined_select(&ascending, rank).unwrap().value, rank as u32 - 1);
            assert_eq!(determined_select(&descending, rank).unwrap().value, rank as u32 - 1);
        }
    }

    #[test]
    fn test_determined_select_all_equal() {
        let data = vec![4; 50_000];
        assert_eq!(determined_select(&data, 25_000).unwrap().value, 4);
    }

    #[test]
    fn test_determined_select_group_sizes() {
        let mut rng = ChaCha8Rng::seed_from_u64(23);
        let data: Vec<i32> = (0..777).map(|_| rng.gen_range(0..100)).collect();
        let mut sorted = data.clone();
        sorted.sort();
        for group_size in [5, 7, 11, 31] {
            let config = SelectConfig::new(group_size).unwrap();
            for rank in [1, 389, 777] {
                let kth = determined_select_with(&data, rank, &config).unwrap();
                assert_eq!(kth.value, sorted[rank - 1]);
            }
        }
    }

    #[test]
    fn test_select_config_rejects_small_groups() {
        assert_eq!(
            SelectConfig::new(4),
            Err(Error::InvalidGroupSize {
                group_size: 4,
                min: MIN_GROUP_SIZE
            })
        );
        assert_eq!(SelectConfig::default().group_size, 11);
    }

    #[test]
    fn test_determined_select_with_hand_built_config() {
        let config = SelectConfig { group_size: 1 };
        assert!(matches!(
            determined_select_with(&[3, 1, 2], 1, &config),
            Err(Error::InvalidGroupSize { group_size: 1, .. })
        ));
    }

    #[test]
    fn test_select_index_points_at_rank() {
        let mut arr: Vec<i32> = (0..50).rev().collect();
        let index = select_index(&mut arr, 10, DEFAULT_GROUP_SIZE);
        assert_eq!(arr[index], 10);
    }

    #[test]
    fn test_determined_select_invalid_rank() {
        let empty: [u8; 0] = [];
        assert_eq!(
            determined_select(&empty, 1),
            Err(Error::InvalidRank { rank: 1, len: 0 })
        );
        assert!(determined_select(&[1], 0).is_err());
        assert!(determined_select(&[1], 2).is_err());
    }
}
