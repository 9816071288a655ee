/// Database configuration and connection management
pub mod database;

/// Site, server and cache configuration from config.toml
pub mod site;

pub use site::{AppConfig, CacheConfig, ServerConfig, SiteConfig};
