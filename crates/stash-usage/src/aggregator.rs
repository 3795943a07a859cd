//! Usage aggregation over file records.

use stash_entity::file::FileRecord;
use stash_entity::usage::{CategoryBytes, UsageReport};

/// Sum file sizes into the four usage categories.
///
/// Every record is counted in exactly one category, so the report total is
/// the sum of all sizes. Record order does not affect the result.
pub fn compute_usage_report(records: &[FileRecord]) -> UsageReport {
    let mut category_bytes = CategoryBytes::default();
    for record in records {
        category_bytes.add(record.category(), record.size);
    }
    UsageReport::from_category_bytes(category_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stash_entity::usage::Category;

    fn record(ext: &str, size: u64) -> FileRecord {
        FileRecord::new(format!("id-{ext}-{size}"), format!("file.{ext}"), ext, size)
    }

    #[test]
    fn test_mixed_categories() {
        let records = [
            record("pdf", 1000),
            record("jpg", 2000),
            record("mp4", 500),
            record("", 300),
        ];
        let report = compute_usage_report(&records);

        assert_eq!(report.total_bytes, 3800);
        assert_eq!(
            report.category_bytes,
            CategoryBytes {
                documents: 1000,
                images: 2000,
                media: 500,
                others: 300,
            }
        );
    }

    #[test]
    fn test_empty_input() {
        let report = compute_usage_report(&[]);
        assert_eq!(report.total_bytes, 0);
        for category in Category::ALL {
            assert_eq!(report.category_bytes.get(category), 0);
        }
    }

    #[test]
    fn test_conservation_and_order_independence() {
        let mut records: Vec<FileRecord> = ["PDF", "docx", "png", "SVG", "wav", "json", "", "tar.gz"]
            .iter()
            .enumerate()
            .map(|(i, ext)| record(ext, (i as u64 + 1) * 7919))
            .collect();
        let expected: u64 = records.iter().map(|r| r.size).sum();

        let forward = compute_usage_report(&records);
        records.reverse();
        let backward = compute_usage_report(&records);

        assert_eq!(forward.total_bytes, expected);
        assert_eq!(forward.category_bytes.sum(), forward.total_bytes);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_idempotent() {
        let records = [record("gif", 42), record("xls", 8), record("exe", 1)];
        assert_eq!(compute_usage_report(&records), compute_usage_report(&records));
    }

    #[test]
    fn test_case_insensitive_buckets() {
        let report = compute_usage_report(&[record("PDF", 10), record("pdf", 5)]);
        assert_eq!(report.category_bytes.documents, 15);
        assert_eq!(report.category_bytes.others, 0);
    }

    #[test]
    fn test_unknown_extension_is_others() {
        let report = compute_usage_report(&[record("json", 64)]);
        assert_eq!(report.category_bytes.others, 64);
    }

    #[test]
    fn test_large_sizes_do_not_overflow() {
        let big = 1u64 << 53;
        let report = compute_usage_report(&[record("mkv", big), record("mkv", big)]);
        assert_eq!(report.total_bytes, big * 2);
        assert_eq!(report.category_bytes.media, big * 2);
    }
}
