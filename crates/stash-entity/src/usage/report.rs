//! Usage report value object.

use serde::{Deserialize, Serialize};

use super::category::Category;

/// Byte totals per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryBytes {
    /// Documents bucket.
    pub documents: u64,
    /// Images bucket.
    pub images: u64,
    /// Video and audio bucket.
    pub media: u64,
    /// Everything else.
    pub others: u64,
}

impl CategoryBytes {
    /// Bytes counted toward the given category.
    pub fn get(&self, category: Category) -> u64 {
        match category {
            Category::Documents => self.documents,
            Category::Images => self.images,
            Category::Media => self.media,
            Category::Others => self.others,
        }
    }

    /// Add bytes to a category, saturating at `u64::MAX`.
    pub fn add(&mut self, category: Category, bytes: u64) {
        let slot = match category {
            Category::Documents => &mut self.documents,
            Category::Images => &mut self.images,
            Category::Media => &mut self.media,
            Category::Others => &mut self.others,
        };
        *slot = slot.saturating_add(bytes);
    }

    /// Sum over all four categories, saturating at `u64::MAX`.
    pub fn sum(&self) -> u64 {
        Category::ALL
            .iter()
            .fold(0u64, |acc, c| acc.saturating_add(self.get(*c)))
    }

    /// `(category, bytes)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u64)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// Point-in-time summary of total and per-category byte usage.
///
/// `total_bytes` always equals the sum of `category_bytes`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UsageReport {
    /// Sum of every file's size.
    pub total_bytes: u64,
    /// Per-category sums.
    pub category_bytes: CategoryBytes,
}

impl UsageReport {
    /// Build a report whose total is derived from the category sums.
    pub fn from_category_bytes(category_bytes: CategoryBytes) -> Self {
        Self {
            total_bytes: category_bytes.sum(),
            category_bytes,
        }
    }

    /// Returns `true` when no bytes are in use.
    pub fn is_empty(&self) -> bool {
        self.total_bytes == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_saturates() {
        let mut bytes = CategoryBytes::default();
        bytes.add(Category::Media, u64::MAX - 1);
        bytes.add(Category::Media, 10);
        assert_eq!(bytes.media, u64::MAX);
        assert_eq!(bytes.sum(), u64::MAX);
    }

    #[test]
    fn test_serializes_four_keys() {
        let report = UsageReport::from_category_bytes(CategoryBytes {
            documents: 1,
            images: 2,
            media: 3,
            others: 4,
        });
        let json = serde_json::to_value(report).expect("serialize");
        assert_eq!(json["total_bytes"], 10);
        let keys: Vec<_> = json["category_bytes"]
            .as_object()
            .expect("object")
            .keys()
            .cloned()
            .collect();
        assert_eq!(keys.len(), 4);
        for key in ["documents", "images", "media", "others"] {
            assert!(keys.iter().any(|k| k == key));
        }
    }
}
