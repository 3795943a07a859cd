//! Shared value types.

pub mod sorting;

pub use sorting::{SortDirection, SortField};
