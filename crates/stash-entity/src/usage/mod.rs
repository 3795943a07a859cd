//! Storage usage value objects.

pub mod category;
pub mod report;

pub use category::Category;
pub use report::{CategoryBytes, UsageReport};
