/// Response body cache for crawler documents
pub mod cache;
/// Handler error mapping
pub mod error;
/// Route handlers
pub mod handlers;
/// Sitemap XML rendering
pub mod xml;

use crate::{
    config::{AppConfig, SiteConfig},
    errors::Result,
};
use axum::{Router, http::Method, routing::get};
use cache::ResponseCache;
use sea_orm::DatabaseConnection;
use std::{sync::Arc, time::Duration};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: Arc<DatabaseConnection>,
    /// Public identity of the site
    pub site: Arc<SiteConfig>,
    /// Rendered sitemap.xml
    pub sitemap_cache: Arc<ResponseCache>,
    /// Rendered robots.txt
    pub robots_cache: Arc<ResponseCache>,
}

impl AppState {
    /// Builds the state from the loaded configuration.
    #[must_use]
    pub fn new(db: DatabaseConnection, config: &AppConfig) -> Self {
        Self {
            db: Arc::new(db),
            site: Arc::new(config.site.clone()),
            sitemap_cache: Arc::new(ResponseCache::new(
                "sitemap",
                Duration::from_secs(config.cache.sitemap_ttl_secs),
            )),
            robots_cache: Arc::new(ResponseCache::new(
                "robots",
                Duration::from_secs(config.cache.robots_ttl_secs),
            )),
        }
    }
}

/// Builds the HTTP router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route("/sitemap.xml", get(handlers::sitemap_xml))
        .route("/robots.txt", get(handlers::robots_txt))
        .route("/api/seo/check/", get(handlers::seo_check))
        .route("/api/seo/meta", get(handlers::page_meta))
        .route("/api/seo/meta/projects/:slug", get(handlers::project_meta))
        .route("/api/seo/meta/blog/:slug", get(handlers::post_meta))
        .route("/api/seo/meta/services/:slug", get(handlers::service_meta))
        .route("/api/seo/breadcrumbs", get(handlers::breadcrumb_trail))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Binds `bind_address` and serves the router until the process stops.
///
/// # Errors
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(state: AppState, bind_address: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    info!("Listening on {}", bind_address);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
