//! Client configuration baked in at build time.
//!
//! Values come from environment variables visible to `cargo build`:
//! - `MANTENPRO_API_URL`: REST backend base URL (default `http://localhost:8000`)
//! - `MANTENPRO_LOG_LEVEL`: `error`, `warn`, `info` (default), `debug` or `trace`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
    #[error("invalid API URL (expected http:// or https://): {0}")]
    InvalidApiUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without a trailing slash.
    pub api_url: String,
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_url: DEFAULT_API_URL.to_owned(), log_level: DEFAULT_LOG_LEVEL }
    }
}

impl ClientConfig {
    /// Build config from the variables captured at compile time.
    ///
    /// # Errors
    ///
    /// Returns an error if either captured value fails to parse.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("MANTENPRO_API_URL"), option_env!("MANTENPRO_LOG_LEVEL"))
    }

    /// Build config from optional raw values, applying defaults for `None`
    /// and blank strings.
    ///
    /// # Errors
    ///
    /// Returns an error for an API URL without an http(s) scheme or an
    /// unrecognized log level.
    pub fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Result<Self, ConfigError> {
        let api_url = match api_url.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => parse_api_url(raw)?,
            None => DEFAULT_API_URL.to_owned(),
        };
        let log_level = match log_level.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => log::Level::from_str(raw).map_err(|_| ConfigError::InvalidLogLevel(raw.to_owned()))?,
            None => DEFAULT_LOG_LEVEL,
        };
        Ok(Self { api_url, log_level })
    }

    /// Absolute URL for an API path such as `/users/me`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_url)
    }

    /// Resolve a backend-relative asset URL (e.g. an uploaded logo).
    pub fn asset_url(&self, url: &str) -> String {
        if url.starts_with("http") { url.to_owned() } else { self.endpoint(url) }
    }
}

fn parse_api_url(raw: &str) -> Result<String, ConfigError> {
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ConfigError::InvalidApiUrl(raw.to_owned()));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}
