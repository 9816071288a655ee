//! Application configuration loading from config.toml
//!
//! Every section and field has a default, so a missing file yields a working local
//! setup. The file location can be overridden with `CONFIG_PATH`.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Public identity of the site
    pub site: SiteConfig,
    /// HTTP listener
    pub server: ServerConfig,
    /// Response cache lifetimes
    pub cache: CacheConfig,
}

/// Public identity of the site, used to build absolute URLs
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SiteConfig {
    /// URL scheme, normally `https`
    pub scheme: String,
    /// Host (and optional port) the site is served from
    pub domain: String,
    /// Site name written into the settings row created at first start
    pub name: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scheme: "https".to_string(),
            domain: "localhost:8000".to_string(),
            name: "Digital Agency".to_string(),
        }
    }
}

impl SiteConfig {
    /// `{scheme}://{domain}` without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.scheme, self.domain.trim_end_matches('/'))
    }
}

/// HTTP listener configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl ServerConfig {
    /// `host:port` for the listener.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// How long rendered crawler documents are reused
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CacheConfig {
    /// Lifetime of a rendered sitemap.xml
    pub sitemap_ttl_secs: u64,
    /// Lifetime of a rendered robots.txt
    pub robots_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            sitemap_ttl_secs: 60 * 60,
            robots_ttl_secs: 60 * 60 * 24,
        }
    }
}

/// Loads application configuration from a TOML file
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML syntax is invalid.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    parse_config(&contents)
}

/// Parses application configuration from TOML text
///
/// # Errors
/// Returns an error if the TOML syntax is invalid or a field has the wrong type.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads configuration from `CONFIG_PATH` (default `./config.toml`).
///
/// A missing file is not an error: the built-in defaults are used instead.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    if !Path::new(&path).exists() {
        info!("No configuration file at {}, using defaults.", path);
        return Ok(AppConfig::default());
    }
    load_config(&path)
}
