use crate::cs::error::{Error, Result};

/// Checks that `rank` names an order statistic of `data`.
///
/// Ranks are 1-based: the smallest element has rank 1 and the largest has
/// rank `data.len()`. Empty input is rejected whatever the rank.
pub fn check_rank<T>(data: &[T], rank: usize) -> Result<()> {
    if data.is_empty() || rank < 1 || rank > data.len() {
        return Err(Error::InvalidRank {
            rank,
            len: data.len(),
        });
    }
    Ok(())
}
