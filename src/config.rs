//! Configuration management for codeharvest
//!
//! Settings are loaded from environment variables with sensible defaults.
//! The extraction engine itself is pure computation over strings and takes no
//! configuration; these settings drive the CLI surface only.
//!
//! # Environment Variables
//!
//! - `CODEHARVEST_LOG_LEVEL`: Logging level - default: "info"
//! - `CODEHARVEST_LOG_JSON`: JSON log output (true|false) - default: "false"
//! - `CODEHARVEST_FORMAT`: Default output format (json|yaml|human) - default: "human"
//! - `CODEHARVEST_MAX_PREVIEW`: Max artifact-content characters shown in
//!   human output - default: "400"

use std::env;
use thiserror::Error;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_FORMAT: &str = "human";
const DEFAULT_MAX_PREVIEW: usize = 400;

/// Errors that can occur during configuration loading or validation
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid output format '{0}' (expected json, yaml, or human)")]
    InvalidFormat(String),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

/// CLI configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    /// Logging level string (parsed by the logging module)
    pub log_level: String,

    /// Emit JSON logs instead of pretty console output
    pub log_json: bool,

    /// Default output format when no --format flag is given
    pub default_format: String,

    /// Maximum artifact-content characters shown in human-readable output
    pub max_preview_chars: usize,
}

impl HarvestConfig {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        let log_level =
            env::var("CODEHARVEST_LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        let log_json = env::var("CODEHARVEST_LOG_JSON")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        let default_format =
            env::var("CODEHARVEST_FORMAT").unwrap_or_else(|_| DEFAULT_FORMAT.to_string());

        let max_preview_chars = match env::var("CODEHARVEST_MAX_PREVIEW") {
            Ok(v) => v
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidValue("CODEHARVEST_MAX_PREVIEW", v))?,
            Err(_) => DEFAULT_MAX_PREVIEW,
        };

        let config = Self {
            log_level,
            log_json,
            default_format,
            max_preview_chars,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.default_format.as_str() {
            "json" | "yaml" | "human" => Ok(()),
            other => Err(ConfigError::InvalidFormat(other.to_string())),
        }
    }
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_json: false,
            default_format: DEFAULT_FORMAT.to_string(),
            max_preview_chars: DEFAULT_MAX_PREVIEW,
        }
    }
}
