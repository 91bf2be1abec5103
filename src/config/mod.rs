//! Demo configuration loaded from a TOML file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::screens::random_items::DEFAULT_ITEM_COUNT;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config validation failed: {message}")]
    Validation { message: String },
}

/// Settings for the demo binary.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Number of generated sample items.
    pub items: usize,
    /// Seed for the item generator; omit for a fresh set per run.
    pub seed: Option<u64>,
    /// UI tick interval in milliseconds.
    pub tick_rate_ms: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            items: DEFAULT_ITEM_COUNT,
            seed: None,
            tick_rate_ms: 250,
        }
    }
}

impl DemoConfig {
    /// Returns the default configuration file path,
    /// `<config dir>/lariat/config.toml`, falling back to the current
    /// directory when no per-user config directory exists.
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("lariat").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `DemoConfig::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.items == 0 {
            return Err(ConfigError::Validation {
                message: "items must be at least 1".to_string(),
            });
        }
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::Validation {
                message: "tick_rate_ms must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
