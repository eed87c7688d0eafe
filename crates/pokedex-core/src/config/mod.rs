//! Application configuration schemas.
//!
//! All configuration structs are deserialized from an optional TOML file
//! merged with `POKEDEX__`-prefixed environment variables via the `config`
//! crate. Each sub-module represents a logical configuration section.

pub mod api;
pub mod catalog;
pub mod database;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::api::ApiConfig;
pub use self::catalog::CatalogConfig;
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Remote API settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Local cache database settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Pagination settings.
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// The file is optional; every field falls back to its default. Values
    /// from environment variables such as `POKEDEX__API__BASE_URL` override
    /// the file.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("POKEDEX")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.catalog.page_size == 0 {
            return Err(AppError::configuration(
                "catalog.page_size must be greater than zero",
            ));
        }
        if self.database.max_connections == 0 {
            return Err(AppError::configuration(
                "database.max_connections must be greater than zero",
            ));
        }
        url::Url::parse(&self.api.base_url).map_err(|e| {
            AppError::configuration(format!("api.base_url '{}' is invalid: {e}", self.api.base_url))
        })?;
        Ok(())
    }
}
