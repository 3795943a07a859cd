//! Dashboard view state.

use serde::Serialize;

use stash_entity::file::FileRecord;
use stash_entity::usage::UsageReport;
use stash_entity::user::User;

use crate::format::format_byte_size;
use crate::percentage::{remaining_bytes, usage_percentage, usage_percentage_exact};

/// Usage measured against the configured capacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuotaSummary {
    /// Bytes in use.
    pub used_bytes: u64,
    /// Configured capacity in bytes.
    pub capacity_bytes: u64,
    /// Bytes left before the quota.
    pub remaining_bytes: u64,
    /// Rounded percentage, `0..=100`.
    pub percent: u8,
    /// Unrounded percentage, for gauge fill.
    pub percent_exact: f64,
}

impl QuotaSummary {
    /// Measure `report` against `capacity_bytes`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity_bytes` is zero.
    pub fn new(report: &UsageReport, capacity_bytes: u64) -> Self {
        let used_bytes = report.total_bytes;
        Self {
            used_bytes,
            capacity_bytes,
            remaining_bytes: remaining_bytes(used_bytes, capacity_bytes),
            percent: usage_percentage(used_bytes, capacity_bytes),
            percent_exact: usage_percentage_exact(used_bytes, capacity_bytes),
        }
    }

    /// `"<used> / <capacity>"`, e.g. `"82.0 GB / 128.0 GB"`.
    pub fn used_of_capacity(&self) -> String {
        format!(
            "{} / {}",
            format_byte_size(self.used_bytes),
            format_byte_size(self.capacity_bytes)
        )
    }
}

/// Everything a renderer needs for one dashboard load.
///
/// Each load produces a fresh value; renderers match on it exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DashboardState {
    /// A load is in progress.
    Loading,
    /// There is no valid session; the user must sign in.
    Unauthenticated,
    /// The backend could not be reached or returned an error.
    Error {
        /// Human-readable failure description.
        message: String,
    },
    /// Data loaded.
    Ready {
        /// The signed-in user.
        user: User,
        /// Usage totals over every listed file.
        report: UsageReport,
        /// Usage measured against the quota.
        quota: QuotaSummary,
        /// Most recently created files, newest first.
        recent: Vec<FileRecord>,
    },
}

impl DashboardState {
    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Unauthenticated => "unauthenticated",
            Self::Error { .. } => "error",
            Self::Ready { .. } => "ready",
        }
    }
}
