//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! `config/default.toml`, an optional explicit file, and `STASH__*`
//! environment variables, in that order of precedence.

pub mod backend;
pub mod logging;
pub mod quota;

use serde::{Deserialize, Serialize};

use self::backend::BackendConfig;
use self::logging::LoggingConfig;
use self::quota::{DashboardConfig, QuotaConfig};

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Appwrite connection settings.
    #[serde(default)]
    pub backend: BackendConfig,
    /// Storage allowance.
    #[serde(default)]
    pub quota: QuotaConfig,
    /// Dashboard display settings.
    #[serde(default)]
    pub dashboard: DashboardConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files and the environment.
    ///
    /// `config/default.toml` is read when present, then `path` (if given),
    /// then environment variables prefixed with `STASH__`.
    pub fn load(path: Option<&str>) -> Result<Self, AppError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false));

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("STASH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        tracing::debug!(
            endpoint = %config.backend.endpoint,
            project_id = %config.backend.project_id,
            "Configuration loaded"
        );

        Ok(config)
    }

    /// Parse configuration from a TOML string, without touching files or the environment.
    pub fn from_toml_str(toml: &str) -> Result<Self, AppError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map_err(AppError::from)
    }

    /// Check the values a dashboard load depends on.
    pub fn validate(&self) -> Result<(), AppError> {
        let required = [
            ("backend.endpoint", &self.backend.endpoint),
            ("backend.project_id", &self.backend.project_id),
            ("backend.database_id", &self.backend.database_id),
            ("backend.users_collection_id", &self.backend.users_collection_id),
            ("backend.files_collection_id", &self.backend.files_collection_id),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(AppError::configuration(format!("`{key}` must be set")));
            }
        }

        if self.quota.capacity_bytes == 0 {
            return Err(AppError::configuration(
                "`quota.capacity_bytes` must be greater than zero",
            ));
        }

        if self.dashboard.recent_limit == 0 {
            return Err(AppError::configuration(
                "`dashboard.recent_limit` must be greater than zero",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const VALID: &str = r#"
        [backend]
        endpoint = "http://localhost/v1"
        project_id = "proj"
        database_id = "db"
        users_collection_id = "users"
        files_collection_id = "files"
    "#;

    #[test]
    fn test_defaults_applied() {
        let config = AppConfig::from_toml_str(VALID).expect("parse");
        assert_eq!(config.quota.capacity_bytes, quota::DEFAULT_CAPACITY_BYTES);
        assert_eq!(config.dashboard.recent_limit, 6);
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.backend.timeout_seconds, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_project_rejected() {
        let config = AppConfig::default();
        let err = config.validate().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
        assert!(err.message.contains("project_id"));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let toml = format!("{VALID}\n[quota]\ncapacity_bytes = 0\n");
        let config = AppConfig::from_toml_str(&toml).expect("parse");
        let err = config.validate().unwrap_err();
        assert!(err.message.contains("capacity_bytes"));
    }

    #[test]
    fn test_masked_secret() {
        let mut backend = BackendConfig::default();
        assert_eq!(backend.masked_session_secret(), "(none)");
        backend.session_secret = Some("abc".to_string());
        assert_eq!(backend.masked_session_secret(), "****");
        backend.session_secret = Some("secret-1234".to_string());
        assert_eq!(backend.masked_session_secret(), "****1234");
    }
}
