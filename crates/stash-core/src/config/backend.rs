//! Appwrite backend connection settings.

use serde::{Deserialize, Serialize};

/// Connection settings for the Appwrite project that owns the files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// API endpoint including the version prefix, e.g. `https://cloud.appwrite.io/v1`.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Appwrite project ID.
    #[serde(default)]
    pub project_id: String,
    /// Database holding the user and file collections.
    #[serde(default)]
    pub database_id: String,
    /// Collection of user profile documents.
    #[serde(default)]
    pub users_collection_id: String,
    /// Collection of file metadata documents.
    #[serde(default)]
    pub files_collection_id: String,
    /// Session secret used to act as the signed-in user.
    #[serde(default)]
    pub session_secret: Option<String>,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            project_id: String::new(),
            database_id: String::new(),
            users_collection_id: String::new(),
            files_collection_id: String::new(),
            session_secret: None,
            timeout_seconds: default_timeout(),
        }
    }
}

impl BackendConfig {
    /// Return the session secret with everything but the last four characters masked.
    pub fn masked_session_secret(&self) -> String {
        match &self.session_secret {
            None => "(none)".to_string(),
            Some(secret) => {
                let len = secret.chars().count();
                if len <= 4 {
                    "****".to_string()
                } else {
                    let tail: String = secret.chars().skip(len - 4).collect();
                    format!("****{tail}")
                }
            }
        }
    }
}

fn default_endpoint() -> String {
    "https://cloud.appwrite.io/v1".to_string()
}

fn default_timeout() -> u64 {
    30
}
