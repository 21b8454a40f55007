//! Configuration management for cinetui
//!
//! Handles config file loading and API key resolution.
//! Config is stored at ~/.config/cinetui/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::api::omdb::DEFAULT_BASE_URL;
use crate::controller::DEFAULT_MAX_RATING;

/// Environment variable consulted for the OMDb key
pub const API_KEY_ENV: &str = "OMDB_API_KEY";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No OMDb API key configured (pass --api-key, set OMDB_API_KEY, or add api_key to the config file)")]
    MissingApiKey,

    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// OMDb API key
    #[serde(alias = "apiKey")]
    pub api_key: Option<String>,
    /// Override for the OMDb endpoint
    pub base_url: Option<String>,
    /// Highest star offered by the rating widget
    pub max_rating: u8,
    /// Where the TUI writes its log
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            max_rating: DEFAULT_MAX_RATING,
            log_file: None,
        }
    }
}

impl Config {
    /// Get config file path (~/.config/cinetui/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cinetui").join("config.toml"))
    }

    /// Load config from the default path, or return default if absent or broken
    pub fn load() -> Self {
        Self::path()
            .and_then(|p| Self::load_from(&p).ok())
            .unwrap_or_default()
    }

    /// Load config from an explicit path; errors are reported, not swallowed
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get the OMDb API key with fallback chain:
    /// 1. Explicit value (the `--api-key` flag)
    /// 2. Environment variable OMDB_API_KEY
    /// 3. Key from the config file
    pub fn resolve_api_key(&self, explicit: Option<&str>) -> Result<String, ConfigError> {
        self.resolve_api_key_with(explicit, std::env::var(API_KEY_ENV).ok())
    }

    fn resolve_api_key_with(
        &self,
        explicit: Option<&str>,
        env: Option<String>,
    ) -> Result<String, ConfigError> {
        explicit
            .map(str::to_string)
            .into_iter()
            .chain(env)
            .chain(self.api_key.clone())
            .map(|k| k.trim().to_string())
            .find(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Log file for TUI mode (~/.local/share/cinetui/cinetui.log by default)
    pub fn log_file(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            dirs::data_local_dir().map(|p| p.join("cinetui").join("cinetui.log"))
        })
    }
}
