//! Configuration management for compstrength
//!
//! Settings come from environment variables or a TOML file. The registry and
//! ranking table locations are part of the configuration and are handed to
//! the pipeline at construction time.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP settings
    pub fetch: FetchConfig,

    /// Input table locations
    pub sources: SourcesConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP fetch settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Request timeout in seconds
    pub request_timeout_secs: u64,

    /// User agent string
    pub user_agent: String,
}

/// Locations of the collaborator tables
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// Competition registry (TOML)
    pub registry_path: PathBuf,

    /// Pilot ranking table (JSON)
    pub ranking_path: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
            user_agent: format!("compstrength/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            registry_path: PathBuf::from("data/competitions.toml"),
            ranking_path: PathBuf::from("data/ranking.json"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            format: String::from("text"),
        }
    }
}

impl FetchConfig {
    /// Get request timeout as Duration
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let request_timeout_secs = std::env::var("COMPSTRENGTH_REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(defaults.fetch.request_timeout_secs);

        let user_agent =
            std::env::var("COMPSTRENGTH_USER_AGENT").unwrap_or(defaults.fetch.user_agent);

        let registry_path = std::env::var("COMPSTRENGTH_REGISTRY")
            .map(PathBuf::from)
            .unwrap_or(defaults.sources.registry_path);

        let ranking_path = std::env::var("COMPSTRENGTH_RANKING")
            .map(PathBuf::from)
            .unwrap_or(defaults.sources.ranking_path);

        let level = std::env::var("COMPSTRENGTH_LOG_LEVEL").unwrap_or(defaults.logging.level);
        let format = std::env::var("COMPSTRENGTH_LOG_FORMAT").unwrap_or(defaults.logging.format);

        let config = Self {
            fetch: FetchConfig {
                request_timeout_secs,
                user_agent,
            },
            sources: SourcesConfig {
                registry_path,
                ranking_path,
            },
            logging: LoggingConfig { level, format },
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.fetch.request_timeout_secs == 0 {
            return Err(Error::config("request_timeout_secs must be greater than 0"));
        }

        if self.fetch.user_agent.trim().is_empty() {
            return Err(Error::config("user_agent must not be empty"));
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(Error::config(format!(
                "unknown log format '{}', expected text or json",
                self.logging.format
            )));
        }

        Ok(())
    }
}
