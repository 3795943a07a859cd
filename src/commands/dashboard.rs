//! Dashboard command: usage gauge, category breakdown, and recent files.

use chrono::Local;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use stash_core::config::AppConfig;
use stash_core::error::AppError;
use stash_entity::file::FileRecord;
use stash_entity::usage::UsageReport;
use stash_usage::{DashboardState, QuotaSummary, format_byte_size};

const GAUGE_WIDTH: usize = 40;

/// Category breakdown row
#[derive(Debug, Serialize, Tabled)]
pub struct CategoryRow {
    /// Category label
    category: String,
    /// Bytes used, formatted
    size: String,
    /// Share of total usage
    share: String,
}

/// Recent file row
#[derive(Debug, Serialize, Tabled)]
pub struct RecentRow {
    /// Extension badge
    #[tabled(rename = "")]
    badge: char,
    /// File name
    name: String,
    /// Usage category
    category: String,
    /// Upload time, local
    uploaded: String,
    /// Size, formatted
    size: String,
}

/// Execute the dashboard command
pub async fn execute(config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let service = super::dashboard_service(config)?;
    let state = service.load().await;
    tracing::debug!(state = state.label(), "Rendering dashboard");
    render(&state, format)
}

/// Print a dashboard state; non-ready states become errors so the process exits non-zero
pub fn render(state: &DashboardState, format: OutputFormat) -> Result<(), AppError> {
    if format == OutputFormat::Json {
        output::print_json(state);
    }

    match state {
        DashboardState::Loading => {
            if format == OutputFormat::Table {
                println!("Loading dashboard...");
            }
            Ok(())
        }
        DashboardState::Unauthenticated => {
            if format == OutputFormat::Table {
                output::print_warning("Not signed in");
            }
            Err(AppError::authentication(
                "No active session; set backend.session_secret to a valid session",
            ))
        }
        DashboardState::Error { message } => Err(AppError::external_service(format!(
            "Failed to load dashboard: {message}"
        ))),
        DashboardState::Ready {
            user,
            report,
            quota,
            recent,
        } => {
            if format == OutputFormat::Table {
                println!("Signed in as {}", user.display_name());
                println!();
                print_gauge(quota);
                println!();
                output::print_list(&category_rows(report), format, "");
                println!();
                println!("Recent files uploaded");
                output::print_list(&recent_rows(recent), format, "No files uploaded yet.");
            }
            Ok(())
        }
    }
}

fn print_gauge(quota: &QuotaSummary) {
    println!(
        "Available storage  {}  {}% used",
        output::gauge_bar(quota.percent_exact, GAUGE_WIDTH),
        quota.percent
    );
    output::print_kv("Used", &quota.used_of_capacity());
    output::print_kv("Remaining", &format_byte_size(quota.remaining_bytes));
}

/// One row per category, in display order
pub fn category_rows(report: &UsageReport) -> Vec<CategoryRow> {
    report
        .category_bytes
        .iter()
        .map(|(category, bytes)| CategoryRow {
            category: category.label().to_string(),
            size: format_byte_size(bytes),
            share: if report.total_bytes == 0 {
                "-".to_string()
            } else {
                format!("{:.1}%", bytes as f64 / report.total_bytes as f64 * 100.0)
            },
        })
        .collect()
}

/// One row per file, in the order given
pub fn recent_rows(files: &[FileRecord]) -> Vec<RecentRow> {
    files
        .iter()
        .map(|file| RecentRow {
            badge: file.badge_letter(),
            name: file.name.clone(),
            category: file.category().label().to_string(),
            uploaded: file
                .created_at
                .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string()),
            size: format_byte_size(file.size),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stash_usage::compute_usage_report;

    #[test]
    fn test_category_rows() {
        let files = [
            FileRecord::new("1", "a.pdf", "pdf", 1024),
            FileRecord::new("2", "b.png", "png", 3072),
        ];
        let rows = category_rows(&compute_usage_report(&files));

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].category, "Documents");
        assert_eq!(rows[0].size, "1.0 KB");
        assert_eq!(rows[0].share, "25.0%");
        assert_eq!(rows[1].share, "75.0%");
        assert_eq!(rows[3].size, "0 B");
    }

    #[test]
    fn test_empty_report_has_no_share() {
        let rows = category_rows(&UsageReport::default());
        assert!(rows.iter().all(|r| r.share == "-"));
    }

    #[test]
    fn test_recent_rows() {
        let rows = recent_rows(&[FileRecord::new("1", "song.MP3", "MP3", 500)]);
        assert_eq!(rows[0].badge, 'M');
        assert_eq!(rows[0].category, "Video, Audio");
        assert_eq!(rows[0].uploaded, "-");
        assert_eq!(rows[0].size, "500 B");
    }

    #[test]
    fn test_non_ready_states_are_errors() {
        assert!(render(&DashboardState::Unauthenticated, OutputFormat::Table).is_err());
        let err = render(
            &DashboardState::Error {
                message: "down".to_string(),
            },
            OutputFormat::Table,
        )
        .unwrap_err();
        assert!(err.message.contains("down"));
        assert!(render(&DashboardState::Loading, OutputFormat::Table).is_ok());
    }
}
