//! Sorting types for file listings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// Return the lowercase keyword used in sort strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// A sort specification consisting of a field name and direction.
///
/// The string form is `<field>-<direction>`, e.g. `$createdAt-desc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortField {
    /// Attribute name to sort by.
    pub field: String,
    /// Sort direction.
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortField {
    /// Create a new sort field.
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Create an ascending sort on the given field.
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    /// Create a descending sort on the given field.
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }

    /// Newest documents first.
    pub fn newest_first() -> Self {
        Self::desc("$createdAt")
    }
}

impl Default for SortField {
    fn default() -> Self {
        Self::newest_first()
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.field, self.direction.as_str())
    }
}

impl FromStr for SortField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = s
            .rsplit_once('-')
            .ok_or_else(|| AppError::validation(format!("Invalid sort '{s}': expected <field>-<asc|desc>")))?;

        if field.is_empty() {
            return Err(AppError::validation(format!("Invalid sort '{s}': empty field")));
        }

        let direction = match direction.to_ascii_lowercase().as_str() {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            other => {
                return Err(AppError::validation(format!(
                    "Invalid sort direction '{other}'"
                )));
            }
        };

        Ok(Self::new(field, direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_created_at_desc() {
        let sort: SortField = "$createdAt-desc".parse().expect("should parse");
        assert_eq!(sort, SortField::newest_first());
        assert_eq!(sort.to_string(), "$createdAt-desc");
    }

    #[test]
    fn test_parse_keeps_hyphenated_field() {
        let sort: SortField = "file-size-asc".parse().expect("should parse");
        assert_eq!(sort.field, "file-size");
        assert_eq!(sort.direction, SortDirection::Asc);
    }

    #[test]
    fn test_parse_rejects_unknown_direction() {
        assert!("name-sideways".parse::<SortField>().is_err());
        assert!("name".parse::<SortField>().is_err());
        assert!("-desc".parse::<SortField>().is_err());
    }
}
