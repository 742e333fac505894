//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid host/port combination: {0}")]
    InvalidAddress(String),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Timeout must be between 1 and 300 seconds")]
    InvalidTimeout,

    #[error("Database URL must be postgres://.../<database>")]
    InvalidDatabaseUrl,

    #[error("Pool needs max_connections >= 1 and min_connections <= max_connections")]
    InvalidPoolSize,

    #[error("Pool size exceeds maximum allowed (100)")]
    PoolSizeTooLarge,

    #[error("Analytics flush interval must be between 1 and 3600 seconds")]
    InvalidFlushInterval,

    #[error("Analytics max_flush_attempts must be at least 1")]
    InvalidFlushAttempts,

    #[error("Log filter is empty")]
    EmptyLogFilter,
}
