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

    #[error("Sampling temperature must be between 0.0 and 2.0")]
    InvalidTemperature,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Tool round limit must be at least 1")]
    InvalidToolRounds,

    #[error("Output directory must not be empty")]
    InvalidOutputDir,
}
