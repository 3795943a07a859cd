//! Dashboard load and logout flow.

use std::sync::Arc;

use stash_core::config::quota::{DashboardConfig, QuotaConfig};
use stash_core::error::AppError;
use stash_entity::file::{FileQuery, FileRecord};
use stash_entity::user::User;

use crate::aggregator::compute_usage_report;
use crate::backend::StorageBackend;
use crate::state::{DashboardState, QuotaSummary};

/// Loads the dashboard from a [`StorageBackend`].
#[derive(Debug, Clone)]
pub struct DashboardService<B: StorageBackend> {
    /// Backend for sessions and file metadata.
    backend: Arc<B>,
    /// Storage allowance in bytes, always non-zero.
    capacity_bytes: u64,
    /// Length of the recent-files list, always non-zero.
    recent_limit: usize,
}

impl<B: StorageBackend> DashboardService<B> {
    /// Creates a new dashboard service.
    pub fn new(
        backend: Arc<B>,
        quota: &QuotaConfig,
        dashboard: &DashboardConfig,
    ) -> Result<Self, AppError> {
        if quota.capacity_bytes == 0 {
            return Err(AppError::configuration(
                "Storage capacity must be greater than zero",
            ));
        }
        if dashboard.recent_limit == 0 {
            return Err(AppError::configuration(
                "Recent file limit must be greater than zero",
            ));
        }

        Ok(Self {
            backend,
            capacity_bytes: quota.capacity_bytes,
            recent_limit: dashboard.recent_limit,
        })
    }

    /// Fetch the session and file list, then aggregate.
    ///
    /// Backend failures are folded into [`DashboardState::Error`]; a missing
    /// or rejected session yields [`DashboardState::Unauthenticated`].
    pub async fn load(&self) -> DashboardState {
        let user = match self.backend.current_user().await {
            Ok(Some(user)) => user,
            Ok(None) => {
                tracing::info!("No active session");
                return DashboardState::Unauthenticated;
            }
            Err(e) if e.is_authentication() => {
                tracing::info!("Session rejected: {e}");
                return DashboardState::Unauthenticated;
            }
            Err(e) => {
                tracing::error!("Failed to load current user: {e}");
                return DashboardState::Error {
                    message: e.message,
                };
            }
        };

        let files = match self
            .backend
            .list_files(&FileQuery::all_newest_first())
            .await
        {
            Ok(files) => files,
            Err(e) if e.is_authentication() => {
                tracing::info!(user_id = %user.id, "Session rejected while listing files: {e}");
                return DashboardState::Unauthenticated;
            }
            Err(e) => {
                tracing::error!(user_id = %user.id, "Failed to list files: {e}");
                return DashboardState::Error {
                    message: e.message,
                };
            }
        };

        self.build_ready(user, files)
    }

    /// List files with a caller-supplied filter.
    pub async fn recent_files(&self, query: &FileQuery) -> Result<Vec<FileRecord>, AppError> {
        tracing::debug!(
            types = ?query.types,
            search = %query.search_text,
            sort = %query.sort,
            "Listing files"
        );
        self.backend.list_files(query).await
    }

    /// Delete the current session.
    pub async fn logout(&self) -> Result<(), AppError> {
        self.backend.delete_current_session().await.map_err(|e| {
            tracing::error!("Logout failed: {e}");
            e
        })?;
        tracing::info!("Session deleted");
        Ok(())
    }

    fn build_ready(&self, user: User, mut files: Vec<FileRecord>) -> DashboardState {
        let report = compute_usage_report(&files);
        let quota = QuotaSummary::new(&report, self.capacity_bytes);

        // Newest first; records without a timestamp sort last.
        files.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        files.truncate(self.recent_limit);

        tracing::debug!(
            user_id = %user.id,
            total_bytes = report.total_bytes,
            percent = quota.percent,
            "Dashboard loaded"
        );

        DashboardState::Ready {
            user,
            report,
            quota,
            recent: files,
        }
    }
}
