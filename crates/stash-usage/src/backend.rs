//! Storage backend trait for the external auth and file-metadata service.

use async_trait::async_trait;

use stash_core::result::AppResult;
use stash_entity::file::{FileQuery, FileRecord};
use stash_entity::user::User;

/// The managed service that owns sessions and file metadata.
///
/// The Appwrite implementation lives in `stash-client`.
#[async_trait]
pub trait StorageBackend: Send + Sync + std::fmt::Debug + 'static {
    /// Look up the signed-in user. `Ok(None)` means there is no valid session.
    async fn current_user(&self) -> AppResult<Option<User>>;

    /// List the current user's file records matching `query`.
    async fn list_files(&self, query: &FileQuery) -> AppResult<Vec<FileRecord>>;

    /// Terminate the current session.
    async fn delete_current_session(&self) -> AppResult<()>;
}
