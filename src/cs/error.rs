//! Error types for order statistic selection.

use thiserror::Error;

/// Errors raised by the selection routines.
///
/// Every variant is detected before the working copy is touched, so a
/// failed call never leaves partial work behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested 1-based rank is outside `1..=len`, or the input is empty.
    #[error("Ordinal statistic {rank} not in 1..{len}")]
    InvalidRank { rank: usize, len: usize },

    /// Median-of-medians group size too small to guarantee linear time.
    #[error("Group size {group_size} is below the minimum of {min}")]
    InvalidGroupSize { group_size: usize, min: usize },

    /// Strategy name that does not match any known selection strategy.
    #[error("Unknown selection strategy: {0}")]
    UnknownStrategy(String),
}

/// Result type for selection operations
pub type Result<T> = std::result::Result<T, Error>;
