//! CLI command definitions and dispatch.

pub mod config;
pub mod dashboard;
pub mod logout;
pub mod recent;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use stash_client::AppwriteBackend;
use stash_core::config::AppConfig;
use stash_core::error::AppError;
use stash_usage::DashboardService;

/// Stash: storage usage dashboard
#[derive(Debug, Parser)]
#[command(name = "stash-dashboard", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file, layered over config/default.toml
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show storage usage and recent files
    Dashboard,
    /// List files with filters
    Recent(recent::RecentArgs),
    /// Delete the current session
    Logout,
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, app_config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Dashboard => dashboard::execute(app_config, self.format).await,
            Commands::Recent(args) => recent::execute(args, app_config, self.format).await,
            Commands::Logout => logout::execute(app_config).await,
            Commands::Config(args) => config::execute(args, app_config, self.format),
        }
    }
}

/// Helper: build the dashboard service for the configured Appwrite project
pub fn dashboard_service(
    config: &AppConfig,
) -> Result<DashboardService<AppwriteBackend>, AppError> {
    config.validate()?;
    let backend = Arc::new(AppwriteBackend::new(&config.backend)?);
    DashboardService::new(backend, &config.quota, &config.dashboard)
}
