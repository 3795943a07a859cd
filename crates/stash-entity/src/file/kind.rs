//! Server-side file type tag.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The `type` attribute stored on each file document at upload time.
///
/// Used only to filter listings. Dashboard usage categories are derived
/// from the extension instead, see [`crate::usage::Category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// Office documents and PDFs.
    Document,
    /// Raster and vector images.
    Image,
    /// Video files.
    Video,
    /// Audio files.
    Audio,
    /// Anything else.
    Other,
}

impl FileType {
    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FileType {
    type Err = stash_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "document" | "documents" => Ok(Self::Document),
            "image" | "images" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            "audio" => Ok(Self::Audio),
            "other" | "others" => Ok(Self::Other),
            _ => Err(stash_core::AppError::validation(format!(
                "Invalid file type: '{s}'"
            ))),
        }
    }
}
