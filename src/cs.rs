pub mod error;
pub mod select;

pub use select::*;
