//! File metadata record as listed by the storage backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::kind::FileType;
use crate::usage::Category;

/// A file metadata document.
///
/// Decoding is lenient: a missing or malformed `size` becomes `0`, a missing
/// or non-string `name` or `extension` becomes the empty string, and an
/// unparseable `$createdAt` or `type` becomes `None`. Only a missing `$id`
/// fails the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Document identifier.
    #[serde(rename = "$id")]
    pub id: String,
    /// Display name, including extension.
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    /// File extension as stored at upload time.
    #[serde(default, deserialize_with = "lenient_string")]
    pub extension: String,
    /// Size in bytes.
    #[serde(default, deserialize_with = "lenient_size")]
    pub size: u64,
    /// When the document was created.
    #[serde(rename = "$createdAt", default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    /// Download or preview URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Server-side type tag.
    #[serde(rename = "type", default, deserialize_with = "lenient_file_type")]
    pub file_type: Option<FileType>,
    /// Owner user document ID.
    #[serde(default, deserialize_with = "lenient_owner")]
    pub owner: Option<String>,
}

impl FileRecord {
    /// Create a record with only the fields the usage report reads.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        extension: impl Into<String>,
        size: u64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            extension: extension.into(),
            size,
            created_at: None,
            url: None,
            file_type: None,
            owner: None,
        }
    }

    /// The storage category this file counts toward.
    pub fn category(&self) -> Category {
        Category::from_extension(&self.extension)
    }

    /// One-letter badge for list views: the first extension character
    /// uppercased, or `F` when there is no extension.
    pub fn badge_letter(&self) -> char {
        self.extension
            .trim()
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('F')
    }
}

fn lenient_size<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_u64().unwrap_or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f as u64)
                .unwrap_or(0)
        }),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        _ => String::new(),
    })
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => DateTime::parse_from_rfc3339(s.trim())
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        _ => None,
    })
}

fn lenient_file_type<'de, D>(deserializer: D) -> Result<Option<FileType>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s.parse().ok(),
        _ => None,
    })
}

/// Accepts either a plain ID or an expanded relationship document.
fn lenient_owner<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Object(map)) => map
            .get("$id")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_appwrite_document() {
        let doc = json!({
            "$id": "665f1c",
            "$createdAt": "2024-06-04T10:15:30.000+00:00",
            "name": "report.pdf",
            "extension": "pdf",
            "size": 1048576,
            "type": "document",
            "url": "https://cloud.example/v1/storage/buckets/b/files/f/view",
            "owner": { "$id": "user-1", "fullName": "Ana" }
        });

        let file: FileRecord = serde_json::from_value(doc).expect("decode");
        assert_eq!(file.id, "665f1c");
        assert_eq!(file.size, 1_048_576);
        assert_eq!(file.file_type, Some(FileType::Document));
        assert_eq!(file.owner.as_deref(), Some("user-1"));
        assert!(file.created_at.is_some());
        assert_eq!(file.category(), Category::Documents);
    }

    #[test]
    fn test_malformed_size_is_zero() {
        for size in [json!(null), json!(-12), json!(-0.5), json!("lots"), json!({"v": 1})] {
            let file: FileRecord =
                serde_json::from_value(json!({ "$id": "a", "size": size })).expect("decode");
            assert_eq!(file.size, 0);
        }

        let file: FileRecord =
            serde_json::from_value(json!({ "$id": "a", "size": "2048" })).expect("decode");
        assert_eq!(file.size, 2048);

        let file: FileRecord = serde_json::from_value(json!({ "$id": "a" })).expect("decode");
        assert_eq!(file.size, 0);
    }

    #[test]
    fn test_missing_extension_is_empty() {
        let file: FileRecord =
            serde_json::from_value(json!({ "$id": "a", "extension": null, "size": 5 }))
                .expect("decode");
        assert_eq!(file.extension, "");
        assert_eq!(file.category(), Category::Others);
        assert_eq!(file.badge_letter(), 'F');
    }

    #[test]
    fn test_malformed_name_and_timestamp() {
        for (name, created_at) in [
            (json!(null), json!("garbage")),
            (json!(42), json!(null)),
            (json!(["a"]), json!(1717488930)),
        ] {
            let file: FileRecord = serde_json::from_value(json!({
                "$id": "a",
                "name": name,
                "$createdAt": created_at,
                "size": 5
            }))
            .expect("decode");
            assert_eq!(file.name, "");
            assert_eq!(file.created_at, None);
            assert_eq!(file.size, 5);
        }
    }

    #[test]
    fn test_one_bad_document_does_not_fail_the_list() {
        let docs = json!([
            { "$id": "ok", "name": "a.pdf", "extension": "pdf", "size": 7,
              "$createdAt": "2024-06-04T10:15:30.000+00:00" },
            { "$id": "odd", "name": null, "extension": 3, "size": "x",
              "$createdAt": "yesterday", "type": "folder", "owner": 9 }
        ]);
        let files: Vec<FileRecord> = serde_json::from_value(docs).expect("decode");
        assert_eq!(files.len(), 2);
        assert!(files[0].created_at.is_some());
        assert_eq!(files[1].category(), Category::Others);
        assert_eq!(files[1].file_type, None);
        assert_eq!(files[1].owner, None);
    }

    #[test]
    fn test_badge_letter() {
        assert_eq!(FileRecord::new("1", "a.pdf", "pdf", 1).badge_letter(), 'P');
        assert_eq!(FileRecord::new("2", "b.MP4", "MP4", 1).badge_letter(), 'M');
        assert_eq!(FileRecord::new("3", "c", "", 1).badge_letter(), 'F');
    }
}
