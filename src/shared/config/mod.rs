//! Application configuration module
//!
//! Provides configuration types for the application. Values can come from a
//! TOML file, from the builder, or both; anything left unset falls back to
//! the defaults in the egui `Config` wrapper.
//!
//! ```toml
//! server_url = "http://localhost:8080/api"
//! page_size = 20
//! search_debounce_ms = 500
//! request_timeout_secs = 30
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the REST API, endpoint paths are appended to it
    pub server_url: Option<String>,
    /// Items per catalog page
    pub page_size: Option<u32>,
    /// Idle window before a typed search is sent
    pub search_debounce_ms: Option<u64>,
    /// Per-request timeout
    pub request_timeout_secs: Option<u64>,
    /// Where the session file lives
    pub storage_path: Option<PathBuf>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Parse a TOML document and validate it
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a TOML config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.server_url {
            let url = url.trim();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidUrl(url.to_string()));
            }
        }
        if self.page_size == Some(0) {
            return Err(ConfigError::InvalidValue("page_size must be greater than zero"));
        }
        if self.request_timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue("request_timeout_secs must be greater than zero"));
        }
        Ok(())
    }

    /// Fill unset fields from `other`
    pub fn or(self, other: AppConfig) -> AppConfig {
        AppConfig {
            server_url: self.server_url.or(other.server_url),
            page_size: self.page_size.or(other.page_size),
            search_debounce_ms: self.search_debounce_ms.or(other.search_debounce_ms),
            request_timeout_secs: self.request_timeout_secs.or(other.request_timeout_secs),
            storage_path: self.storage_path.or(other.storage_path),
        }
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the server URL
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.config.server_url = Some(url.into());
        self
    }

    pub fn page_size(mut self, size: u32) -> Self {
        self.config.page_size = Some(size);
        self
    }

    pub fn search_debounce_ms(mut self, millis: u64) -> Self {
        self.config.search_debounce_ms = Some(millis);
        self
    }

    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.config.request_timeout_secs = Some(secs);
        self
    }

    pub fn storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.storage_path = Some(path.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid value: {0}")]
    InvalidValue(&'static str),
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}
