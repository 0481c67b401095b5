pub mod cs;

pub use cs::error::{Error, Result};
pub use cs::select;
pub use cs::select::{
    determined_select, determined_select_with, naive_select, randomized_select, DeterministicSelector,
    NaiveSelector, RandomSource, RandomizedSelector, SelectConfig, Selection, Selector, Strategy,
    DEFAULT_GROUP_SIZE, MIN_GROUP_SIZE,
};
