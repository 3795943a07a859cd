//! Storage quota and dashboard display settings.

use serde::{Deserialize, Serialize};

/// 128 GiB, the allowance shown on the dashboard gauge.
pub const DEFAULT_CAPACITY_BYTES: u64 = 128 * 1024 * 1024 * 1024;

/// Storage allowance against which usage percentage is computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotaConfig {
    /// Total capacity in bytes. Must be strictly positive.
    #[serde(default = "default_capacity")]
    pub capacity_bytes: u64,
}

impl Default for QuotaConfig {
    fn default() -> Self {
        Self {
            capacity_bytes: default_capacity(),
        }
    }
}

/// Dashboard display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Number of files shown in the "recent files" list.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            recent_limit: default_recent_limit(),
        }
    }
}

fn default_capacity() -> u64 {
    DEFAULT_CAPACITY_BYTES
}

fn default_recent_limit() -> usize {
    6
}
