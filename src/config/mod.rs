//! Configuration module for the LogPilot console
//!
//! Provides layered configuration loading from files, environment variables, and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`LOGPILOT_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use logpilot::config::ConsoleConfig;
//!
//! let config = ConsoleConfig::default();
//! assert_eq!(config.api.base_url, "http://localhost:8000");
//!
//! let toml = r#"
//! [api]
//! base_url = "http://pilot.internal:9000"
//! "#;
//! let config: ConsoleConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.api.base_url, "http://pilot.internal:9000");
//! ```

pub mod api;
pub mod error;
pub mod logging;
pub mod polling;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use polling::PollingConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Unified configuration for the console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Backend location and timeouts
    pub api: ApiConfig,
    /// Background loop periods
    pub polling: PollingConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl ConsoleConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supports LOGPILOT_* environment variables for common settings.
    /// Invalid values are silently ignored (defaults are kept).
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("LOGPILOT_API_URL") {
            self.api.base_url = url;
        }

        if let Ok(level) = std::env::var("LOGPILOT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("LOGPILOT_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        if let Ok(secs) = std::env::var("LOGPILOT_HEALTH_INTERVAL") {
            if let Ok(s) = secs.parse() {
                self.polling.health_interval_seconds = s;
            }
        }
        if let Ok(secs) = std::env::var("LOGPILOT_ALERTS_INTERVAL") {
            if let Ok(s) = secs.parse() {
                self.polling.alerts_interval_seconds = s;
            }
        }

        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api.base_url.trim();
        if url.is_empty() {
            return Err(ConfigError::Validation {
                field: "api.base_url".to_string(),
                message: "URL cannot be empty".to_string(),
            });
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Validation {
                field: "api.base_url".to_string(),
                message: "URL must start with http:// or https://".to_string(),
            });
        }

        let non_zero = [
            ("api.timeout_seconds", self.api.timeout_seconds),
            ("api.health_timeout_seconds", self.api.health_timeout_seconds),
            (
                "polling.health_interval_seconds",
                self.polling.health_interval_seconds,
            ),
            (
                "polling.alerts_interval_seconds",
                self.polling.alerts_interval_seconds,
            ),
        ];
        for (field, value) in non_zero {
            if value == 0 {
                return Err(ConfigError::Validation {
                    field: field.to_string(),
                    message: "must be non-zero".to_string(),
                });
            }
        }

        Ok(())
    }
}
