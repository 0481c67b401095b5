use std::cmp::Ordering;
use std::time::Instant;

use log::debug;

use crate::cs::error::Result;
use crate::cs::select::bounds::check_rank;
use crate::cs::select::Selection;

/// Returns the element of 1-based rank `rank` by sorting a copy of `data`.
///
/// This is the O(n log n) baseline the other strategies are checked against.
/// Incomparable pairs (such as NaN) are treated as equal by the sort.
///
/// # Errors
///
/// Returns [`Error::InvalidRank`](crate::Error::InvalidRank) when `data` is
/// empty or `rank` is not in `1..=data.len()`.
///
/// # Examples
///
/// ```
/// use ordstat::naive_select;
///
/// let data = [5, 3, 8, 1, 9, 2];
/// assert_eq!(naive_select(&data, 3).unwrap().value, 3);
/// ```
pub fn naive_select<T: PartialOrd + Clone>(data: &[T], rank: usize) -> Result<Selection<T>> {
    check_rank(data, rank)?;
    let mut arr = data.to_vec();
    debug!("naive select: rank {} of {} elements", rank, arr.len());

    let start = Instant::now();
    arr.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let elapsed = start.elapsed();

    debug!("naive select finished in {:?}", elapsed);
    Ok(Selection::new(arr.swap_remove(rank - 1), elapsed))
}
