//! Application configuration module
//!
//! Configuration is read from environment variables with the `LYRA_MENTOR`
//! prefix; nested values are separated by a double underscore.
//!
//! # Example
//!
//! ```no_run
//! use lyra_mentor::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod analytics;
mod database;
mod error;
mod logging;
mod server;

pub use analytics::AnalyticsConfig;
pub use database::{DatabaseConfig, MigrationMode};
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Listener address, environment, timeouts and CORS
    #[serde(default)]
    pub server: ServerConfig,

    /// Tracing filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// PostgreSQL connection; in-memory stores are used when absent
    #[serde(default)]
    pub database: Option<DatabaseConfig>,

    /// Analytics collector tuning and consent persistence
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// - `LYRA_MENTOR__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `LYRA_MENTOR__DATABASE__URL=...` -> `database.url = ...`
    /// - `LYRA_MENTOR__LOGGING__FORMAT=json`
    /// - `LYRA_MENTOR__ANALYTICS__FLUSH_INTERVAL_SECS=10`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("LYRA_MENTOR")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.logging.validate()?;
        if let Some(database) = &self.database {
            database.validate()?;
        }
        self.analytics.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
