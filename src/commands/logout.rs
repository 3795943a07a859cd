//! Logout command.

use crate::output;
use stash_core::config::AppConfig;
use stash_core::error::AppError;

/// Execute the logout command
pub async fn execute(config: &AppConfig) -> Result<(), AppError> {
    let service = super::dashboard_service(config)?;
    service.logout().await?;
    output::print_success("Signed out; the session secret is no longer valid");
    Ok(())
}
