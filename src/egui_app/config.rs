use std::path::PathBuf;
use std::time::Duration;

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://localhost:8080/api";
const DEFAULT_PAGE_SIZE: u32 = 20;
const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 500;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Environment override for the API base URL
pub const API_URL_ENV: &str = "POKEDEX_API_URL";

/// Application configuration wrapper.
#[derive(Debug, Clone, Default)]
pub struct Config {
    app: AppConfig,
}

impl Config {
    /// Defaults, overlaid with the user's config file and then `POKEDEX_API_URL`.
    ///
    /// An unreadable or invalid config file is logged and ignored.
    pub fn new() -> Self {
        let from_file = match Self::config_file_path() {
            Some(path) if path.exists() => match AppConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Ignoring config file {}: {}", path.display(), e);
                    AppConfig::default()
                }
            },
            _ => AppConfig::default(),
        };

        let from_env = match std::env::var(API_URL_ENV) {
            Ok(url) => match AppConfig::builder().server_url(url).build() {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Ignoring {}: {}", API_URL_ENV, e);
                    AppConfig::default()
                }
            },
            Err(_) => AppConfig::default(),
        };

        Self { app: from_env.or(from_file) }
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    /// `<config dir>/pokedex/config.toml`
    pub fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pokedex").join("config.toml"))
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url().trim_end_matches('/'), path)
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    pub fn page_size(&self) -> u32 {
        self.app.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.app.search_debounce_ms.unwrap_or(DEFAULT_SEARCH_DEBOUNCE_MS))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.app.request_timeout_secs.unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS))
    }

    /// Session file location, `<data dir>/pokedex/session.json` unless configured.
    pub fn storage_path(&self) -> PathBuf {
        self.app.storage_path.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("pokedex")
                .join("session.json")
        })
    }
}
