//! Server configuration parsed from environment variables.

use products::DEFAULT_CATALOG_BASE_URL;

pub const DEFAULT_PORT: u16 = 3000;

/// Errors produced while reading startup configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: '{0}'")]
    InvalidPort(String),

    #[error("invalid CATALOG_BASE_URL '{0}' (expected an http:// or https:// URL)")]
    InvalidBaseUrl(String),

    #[error("invalid {var}: '{value}' (expected true/false)")]
    InvalidFlag { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Catalog origin without a trailing slash.
    pub catalog_base_url: String,
    /// Keep listing responses in memory for the life of the process.
    pub cache_listings: bool,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CATALOG_BASE_URL`: default `https://fakestoreapi.com`
    /// - `CATALOG_CACHE_LISTINGS`: `true` (default) or `false`
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is set to an unparsable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let catalog_base_url = parse_base_url(std::env::var("CATALOG_BASE_URL").ok().as_deref())?;
        let cache_listings = parse_flag("CATALOG_CACHE_LISTINGS", std::env::var("CATALOG_CACHE_LISTINGS").ok().as_deref())?;
        Ok(Self { port, catalog_base_url, cache_listings })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, catalog_base_url: DEFAULT_CATALOG_BASE_URL.to_owned(), cache_listings: true }
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(v) => v
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(v.to_owned())),
    }
}

fn parse_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let url = raw.unwrap_or(DEFAULT_CATALOG_BASE_URL).trim().trim_end_matches('/');
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url.to_owned())
    } else {
        Err(ConfigError::InvalidBaseUrl(url.to_owned()))
    }
}

fn parse_flag(var: &'static str, raw: Option<&str>) -> Result<bool, ConfigError> {
    match raw.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        None | Some("true" | "1") => Ok(true),
        Some("false" | "0") => Ok(false),
        Some(other) => Err(ConfigError::InvalidFlag { var, value: other.to_owned() }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
