//! User profile model.

use serde::{Deserialize, Serialize};

/// The signed-in user's profile document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Profile document ID, referenced by file `owner` fields.
    #[serde(rename = "$id")]
    pub id: String,
    /// Auth account ID the profile belongs to.
    #[serde(default)]
    pub account_id: String,
    /// Display name.
    #[serde(default)]
    pub full_name: String,
    /// Email address, also used for shared-file lookups.
    #[serde(default)]
    pub email: String,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar: Option<String>,
}

impl User {
    /// Name to greet the user with, falling back to the email address.
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.email
        } else {
            &self.full_name
        }
    }
}
