//! Order statistic selection.
//!
//! This module finds the element of a given 1-based rank in an unordered
//! slice without fully sorting it:
//! - Naive select (sort a copy, index it)
//! - Randomized select (quickselect with uniformly random pivots)
//! - Deterministic select (median of medians, worst-case linear)
//!
//! Every strategy works on a private copy, so the caller's slice is never
//! reordered, and reports the time spent in the algorithm itself.
//!
//! # Examples
//!
//! ```rust
//! use ordstat::{determined_select, naive_select, randomized_select};
//!
//! let data = [5, 3, 8, 1, 9, 2];
//! let mut rng = rand::thread_rng();
//!
//! assert_eq!(naive_select(&data, 3).unwrap().value, 3);
//! assert_eq!(randomized_select(&data, 3, &mut rng).unwrap().value, 3);
//! assert_eq!(determined_select(&data, 3).unwrap().value, 3);
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::cs::error::{Error, Result};

pub mod bounds;
pub mod insertion;
pub mod median_of_medians;
pub mod naive_select;
pub mod partition;
pub mod random_source;
pub mod randomized_select;

pub use bounds::check_rank;
pub use insertion::{group_median, insertion_sort};
pub use median_of_medians::{
    determined_select, determined_select_with, SelectConfig, DEFAULT_GROUP_SIZE, MIN_GROUP_SIZE,
};
pub use naive_select::naive_select;
pub use partition::{partition, partition_equal};
pub use random_source::RandomSource;
pub use randomized_select::randomized_select;

/// The selected element together with the time the algorithm took.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<T> {
    /// Element that occupies the requested rank in sorted order.
    pub value: T,
    /// Time spent in the selection itself, excluding validation and copying.
    pub elapsed: Duration,
}

impl<T> Selection<T> {
    pub fn new(value: T, elapsed: Duration) -> Self {
        Self { value, elapsed }
    }

    /// Discards the timing and returns the selected element.
    pub fn into_value(self) -> T {
        self.value
    }
}

/// Common interface of the selection strategies.
pub trait Selector<T> {
    /// Returns the element of 1-based rank `rank` in `data`.
    fn select(&mut self, data: &[T], rank: usize) -> Result<Selection<T>>;
}

/// Sort-based baseline.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveSelector;

impl<T: PartialOrd + Clone> Selector<T> for NaiveSelector {
    fn select(&mut self, data: &[T], rank: usize) -> Result<Selection<T>> {
        naive_select(data, rank)
    }
}

/// Quickselect drawing pivots from an owned random source.
#[derive(Debug, Clone)]
pub struct RandomizedSelector<R> {
    rng: R,
}

impl<R: RandomSource> RandomizedSelector<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<T: PartialOrd + Clone, R: RandomSource> Selector<T> for RandomizedSelector<R> {
    fn select(&mut self, data: &[T], rank: usize) -> Result<Selection<T>> {
        randomized_select(data, rank, &mut self.rng)
    }
}

/// Median-of-medians selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeterministicSelector {
    pub config: SelectConfig,
}

impl DeterministicSelector {
    pub fn new(config: SelectConfig) -> Self {
        Self { config }
    }
}

impl<T: PartialOrd + Clone> Selector<T> for DeterministicSelector {
    fn select(&mut self, data: &[T], rank: usize) -> Result<Selection<T>> {
        determined_select_with(data, rank, &self.config)
    }
}

/// Names the available selection strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Naive,
    Randomized,
    Deterministic,
}

impl Strategy {
    /// All strategies, in the order they are usually reported.
    pub const ALL: [Strategy; 3] = [Strategy::Naive, Strategy::Randomized, Strategy::Deterministic];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Naive => "naive",
            Strategy::Randomized => "randomized",
            Strategy::Deterministic => "deterministic",
        }
    }

    /// Runs this strategy. `rng` is only consulted by [`Strategy::Randomized`]
    /// and `config` only by [`Strategy::Deterministic`].
    pub fn select<T, R>(
        self,
        data: &[T],
        rank: usize,
        rng: &mut R,
        config: &SelectConfig,
    ) -> Result<Selection<T>>
    where
        T: PartialOrd + Clone,
        R: RandomSource + ?Sized,
    {
        match self {
            Strategy::Naive => naive_select(data, rank),
            Strategy::Randomized => randomized_select(data, rank, rng),
            Strategy::Deterministic => determined_select_with(data, rank, config),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "naive" => Ok(Strategy::Naive),
            "randomized" | "random" => Ok(Strategy::Randomized),
            "deterministic" | "determined" => Ok(Strategy::Deterministic),
            _ => Err(Error::UnknownStrategy(s.to_string())),
        }
    }
}
