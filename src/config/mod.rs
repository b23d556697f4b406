//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CLARIFY_` prefix and nested values use underscores as separators. A few
//! well-known variable names (`OPENAI_API_KEY`, `OPENAI_MODEL`,
//! `OPENAI_TEMPERATURE`, `BACKEND_ALLOW_ORIGINS`) are honored as defaults so
//! existing deployments keep working without renaming anything.
//!
//! # Example
//!
//! ```no_run
//! use clarify_scope::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod ai;
mod error;
mod server;
mod storage;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use storage::StorageConfig;

use serde::Deserialize;
use std::env;

/// Root application configuration
///
/// Contains all configuration sections for the ClarifyScope backend.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// AI provider configuration (OpenAI)
    #[serde(default)]
    pub ai: AiConfig,

    /// Artifact storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Seeds defaults from well-known variables (`OPENAI_API_KEY`, ...)
    /// 3. Reads environment variables with `CLARIFY` prefix, which override
    ///    the well-known names
    /// 4. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `CLARIFY__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CLARIFY__AI__MODEL=gpt-4.1-mini` -> `ai.model = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder().add_source(
            config::Environment::default()
                .prefix("CLARIFY")
                .separator("__"),
        );

        // Well-known names lose to prefixed variables because defaults lose
        // to any source.
        if let Ok(key) = env::var("OPENAI_API_KEY") {
            builder = builder.set_default("ai.openai_api_key", key)?;
        }
        if let Ok(model) = env::var("OPENAI_MODEL") {
            builder = builder.set_default("ai.model", model)?;
        }
        if let Ok(temperature) = env::var("OPENAI_TEMPERATURE") {
            builder = builder.set_default("ai.temperature", temperature)?;
        }
        if let Ok(origins) = env::var("BACKEND_ALLOW_ORIGINS") {
            builder = builder.set_default("server.cors_origins", origins)?;
        }

        let config = builder.build()?.try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        self.storage.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
