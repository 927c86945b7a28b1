//! Runtime configuration.

use thiserror::Error;

use shopcart_catalog::DEFAULT_CATALOG_URL;
use shopcart_observability::{LogFormat, LogFormatError};

pub const CATALOG_URL_ENV: &str = "SHOPCART_CATALOG_URL";
pub const LOG_FORMAT_ENV: &str = "SHOPCART_LOG_FORMAT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("SHOPCART_CATALOG_URL is set but empty")]
    EmptyCatalogUrl,
    #[error("SHOPCART_LOG_FORMAT: {0}")]
    InvalidLogFormat(#[from] LogFormatError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub catalog_url: String,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(CATALOG_URL_ENV) {
            let url = url.trim();
            if url.is_empty() {
                return Err(ConfigError::EmptyCatalogUrl);
            }
            config.catalog_url = url.to_string();
        }

        if let Some(format) = lookup(LOG_FORMAT_ENV) {
            config.log_format = format.parse()?;
        }

        Ok(config)
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(mut self, catalog_url: Option<String>, log_format: Option<LogFormat>) -> Self {
        if let Some(url) = catalog_url {
            self.catalog_url = url;
        }
        if let Some(format) = log_format {
            self.log_format = format;
        }
        self
    }
}
