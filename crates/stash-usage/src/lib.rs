//! # stash-usage
//!
//! Storage usage aggregation and the dashboard load flow. The aggregation,
//! percentage, and formatting functions are pure; [`DashboardService`]
//! drives a [`StorageBackend`] and folds the outcome into a
//! [`DashboardState`].

pub mod aggregator;
pub mod backend;
pub mod format;
pub mod percentage;
pub mod service;
pub mod state;

pub use aggregator::compute_usage_report;
pub use backend::StorageBackend;
pub use format::format_byte_size;
pub use percentage::usage_percentage;
pub use service::DashboardService;
pub use state::{DashboardState, QuotaSummary};
