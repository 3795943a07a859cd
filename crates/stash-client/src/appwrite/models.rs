//! Appwrite response payloads.

use serde::Deserialize;

/// A page of documents from a collection listing.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentList<T> {
    /// Total matching documents on the server.
    #[serde(default)]
    pub total: u64,
    /// Documents in this page.
    #[serde(default = "Vec::new")]
    pub documents: Vec<T>,
}

/// The auth account behind a session.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    /// Account ID.
    #[serde(rename = "$id")]
    pub id: String,
}

/// Error body returned with non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message.
    #[serde(default)]
    pub message: String,
    /// Machine-readable error type, e.g. `user_unauthorized`.
    #[serde(rename = "type", default)]
    pub error_type: String,
}
