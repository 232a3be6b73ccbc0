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
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid socket address '{0}'")]
    InvalidSocketAddr(String),

    #[error("Invalid CORS origin '{0}'")]
    InvalidCorsOrigin(String),

    #[error("Sensitivity thresholds must satisfy 0 < high <= medium")]
    InvalidSensitivityThresholds,
}
