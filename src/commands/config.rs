//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use stash_core::config::AppConfig;
use stash_core::error::AppError;
use stash_usage::format_byte_size;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration with the session secret masked
    Show,
    /// Validate configuration
    Validate,
}

/// Execute config commands
pub fn execute(args: &ConfigArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let masked = masked(config);
            match format {
                OutputFormat::Table => println!("{:#?}", masked),
                OutputFormat::Json => output::print_json(&masked),
            }
        }
        ConfigCommand::Validate => {
            config.validate()?;
            output::print_success("Configuration is valid");
            output::print_kv("Endpoint", &config.backend.endpoint);
            output::print_kv("Project", &config.backend.project_id);
            output::print_kv("Session", &config.backend.masked_session_secret());
            output::print_kv("Quota", &format_byte_size(config.quota.capacity_bytes));
        }
    }

    Ok(())
}

/// Copy of the configuration safe to print
fn masked(config: &AppConfig) -> AppConfig {
    let mut masked = config.clone();
    if masked.backend.session_secret.is_some() {
        masked.backend.session_secret = Some(config.backend.masked_session_secret());
    }
    masked
}
