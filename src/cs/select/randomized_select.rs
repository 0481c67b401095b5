use std::time::Instant;

use log::{debug, trace};

use crate::cs::error::Result;
use crate::cs::select::bounds::check_rank;
use crate::cs::select::partition::{partition, partition_equal};
use crate::cs::select::random_source::RandomSource;
use crate::cs::select::Selection;

/// Returns the element of 1-based rank `rank` using quickselect with
/// uniformly random pivots drawn from `rng`.
///
/// Runs in expected O(n) time. The pivots only affect running time: the
/// returned value is always the true order statistic.
///
/// # Errors
///
/// Returns [`Error::InvalidRank`](crate::Error::InvalidRank) when `data` is
/// empty or `rank` is not in `1..=data.len()`.
///
/// # Examples
///
/// ```
/// use ordstat::randomized_select;
///
/// let data = [5, 3, 8, 1, 9, 2];
/// let mut rng = rand::thread_rng();
/// assert_eq!(randomized_select(&data, 6, &mut rng).unwrap().value, 9);
/// ```
pub fn randomized_select<T, R>(data: &[T], rank: usize, rng: &mut R) -> Result<Selection<T>>
where
    T: PartialOrd + Clone,
    R: RandomSource + ?Sized,
{
    check_rank(data, rank)?;
    let mut arr = data.to_vec();
    debug!("randomized select: rank {} of {} elements", rank, arr.len());

    let start = Instant::now();
    let index = randomized_select_index(&mut arr, rank - 1, rng);
    let elapsed = start.elapsed();

    debug!("randomized select finished in {:?}", elapsed);
    Ok(Selection::new(arr.swap_remove(index), elapsed))
}

/// Rearranges `arr` and returns the index holding its element of 0-based
/// rank `rank`.
///
/// Iterative: the window `[first, last)` shrinks on every pass until it
/// holds one element or the rank lands on a copy of the pivot.
///
/// # Panics
///
/// Panics if `rank >= arr.len()`.
pub fn randomized_select_index<T, R>(arr: &mut [T], mut rank: usize, rng: &mut R) -> usize
where
    T: PartialOrd + Clone,
    R: RandomSource + ?Sized,
{
    assert!(rank < arr.len(), "rank is out of bounds");
    let mut first = 0;
    let mut last = arr.len();

    while last - first > 1 {
        let window = &mut arr[first..last];
        let pivot_index = rng.random(0, window.len() - 1);
        let pivot = window[pivot_index].clone();
        let boundary = partition(window, pivot_index);

        if rank < boundary {
            last = first + boundary;
        } else {
            let equal = partition_equal(&mut window[boundary..], &pivot);
            if rank < boundary + equal {
                return first + boundary;
            }
            first += boundary + equal;
            rank -= boundary + equal;
        }
        trace!("randomized select: window [{}, {}), rank {}", first, last, rank);
    }
    first
}
