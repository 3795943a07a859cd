//! Storage usage categories.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// One of the four fixed buckets that usage is grouped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Office documents and PDFs.
    Documents,
    /// Images.
    Images,
    /// Video and audio.
    Media,
    /// Everything else, including files without an extension.
    Others,
}

/// Extension to category table. Extensions are unique across categories.
const EXTENSION_TABLE: &[(&str, Category)] = &[
    ("pdf", Category::Documents),
    ("doc", Category::Documents),
    ("docx", Category::Documents),
    ("xls", Category::Documents),
    ("xlsx", Category::Documents),
    ("ppt", Category::Documents),
    ("jpg", Category::Images),
    ("jpeg", Category::Images),
    ("png", Category::Images),
    ("gif", Category::Images),
    ("svg", Category::Images),
    ("webp", Category::Images),
    ("mp4", Category::Media),
    ("avi", Category::Media),
    ("mkv", Category::Media),
    ("mp3", Category::Media),
    ("wav", Category::Media),
];

static EXTENSION_MAP: LazyLock<HashMap<&'static str, Category>> =
    LazyLock::new(|| EXTENSION_TABLE.iter().copied().collect());

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Documents,
        Category::Images,
        Category::Media,
        Category::Others,
    ];

    /// Classify a file extension, ignoring case. The extension is otherwise
    /// matched as stored, so `.pdf` or ` pdf` count as others.
    pub fn from_extension(extension: &str) -> Self {
        let lower = extension.to_lowercase();
        EXTENSION_MAP
            .get(lower.as_str())
            .copied()
            .unwrap_or(Self::Others)
    }

    /// Return the category as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Documents => "documents",
            Self::Images => "images",
            Self::Media => "media",
            Self::Others => "others",
        }
    }

    /// Capitalized label for tables.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Documents => "Documents",
            Self::Images => "Images",
            Self::Media => "Video, Audio",
            Self::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
