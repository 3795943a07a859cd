//! File listing filter.

use serde::{Deserialize, Serialize};
use stash_core::types::SortField;

use super::kind::FileType;

/// Filter passed to the backend when listing the user's files.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FileQuery {
    /// Restrict to these type tags. Empty means all types.
    #[serde(default)]
    pub types: Vec<FileType>,
    /// Substring the file name must contain. Empty means no search.
    #[serde(default)]
    pub search_text: String,
    /// Sort order.
    #[serde(default)]
    pub sort: SortField,
    /// Maximum number of documents to return.
    #[serde(default)]
    pub limit: Option<u32>,
}

impl FileQuery {
    /// Every file the user can see, newest first.
    pub fn all_newest_first() -> Self {
        Self::default()
    }

    /// Restrict to the given type tags.
    pub fn with_types(mut self, types: impl IntoIterator<Item = FileType>) -> Self {
        self.types = types.into_iter().collect();
        self
    }

    /// Set the name search string.
    pub fn with_search(mut self, search_text: impl Into<String>) -> Self {
        self.search_text = search_text.into();
        self
    }

    /// Set the sort order.
    pub fn with_sort(mut self, sort: SortField) -> Self {
        self.sort = sort;
        self
    }

    /// Set the document limit.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}
