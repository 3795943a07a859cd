//! Recent-files listing command.

use clap::Args;

use crate::commands::dashboard::recent_rows;
use crate::output::{self, OutputFormat};
use stash_core::config::AppConfig;
use stash_core::error::AppError;
use stash_core::types::SortField;
use stash_entity::file::{FileQuery, FileType};

/// Arguments for the recent command
#[derive(Debug, Args)]
pub struct RecentArgs {
    /// Only include this file type (repeatable): document, image, video, audio, other
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub types: Vec<FileType>,

    /// Only include files whose name contains this text
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Sort as <field>-<asc|desc>
    #[arg(long, default_value = "$createdAt-desc")]
    pub sort: SortField,

    /// Maximum number of files (defaults to dashboard.recent_limit)
    #[arg(short, long)]
    pub limit: Option<u32>,
}

impl RecentArgs {
    /// Build the listing filter
    pub fn query(&self, default_limit: usize) -> FileQuery {
        let limit = self
            .limit
            .unwrap_or_else(|| u32::try_from(default_limit).unwrap_or(u32::MAX));

        FileQuery::all_newest_first()
            .with_types(self.types.iter().copied())
            .with_search(self.search.clone())
            .with_sort(self.sort.clone())
            .with_limit(limit)
    }
}

/// Execute the recent command
pub async fn execute(
    args: &RecentArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let service = super::dashboard_service(config)?;
    let files = service
        .recent_files(&args.query(config.dashboard.recent_limit))
        .await?;

    match format {
        OutputFormat::Table => output::print_list(&recent_rows(&files), format, "No files found."),
        OutputFormat::Json => output::print_json(&files),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{Cli, Commands};
    use clap::Parser;
    use stash_core::types::SortDirection;

    fn parse(args: &[&str]) -> RecentArgs {
        let cli = Cli::try_parse_from(args.iter().copied()).expect("parse");
        match cli.command {
            Commands::Recent(args) => args,
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_defaults() {
        let query = parse(&["stash-dashboard", "recent"]).query(6);
        assert_eq!(query, FileQuery::all_newest_first().with_limit(6));
    }

    #[test]
    fn test_filters() {
        let args = parse(&[
            "stash-dashboard",
            "recent",
            "--type",
            "image",
            "-t",
            "video",
            "--search",
            "trip",
            "--sort",
            "name-asc",
            "--limit",
            "3",
        ]);
        let query = args.query(6);

        assert_eq!(query.types, [FileType::Image, FileType::Video]);
        assert_eq!(query.search_text, "trip");
        assert_eq!(query.sort.direction, SortDirection::Asc);
        assert_eq!(query.limit, Some(3));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "stash-dashboard",
            "recent",
            "--format",
            "json",
            "-c",
            "local.toml",
        ])
        .expect("parse");
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.config.as_deref(), Some("local.toml"));
        assert!(matches!(cli.command, Commands::Recent(_)));

        let cli = Cli::try_parse_from(["stash-dashboard", "-f", "json", "dashboard"]).expect("parse");
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_rejects_bad_sort() {
        assert!(Cli::try_parse_from(["stash-dashboard", "recent", "--sort", "name"]).is_err());
    }
}
