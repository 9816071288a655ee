//! Time-bounded cache for generated response bodies.
//!
//! The sitemap and robots.txt are deterministic for unchanged data, so the HTTP layer
//! keeps the last body for a configured TTL instead of rebuilding it on every request.

use std::future::Future;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, info};

/// A single cached body with its creation time
#[derive(Debug)]
pub struct ResponseCache {
    name: &'static str,
    ttl: Duration,
    slot: RwLock<Option<(Instant, String)>>,
}

impl ResponseCache {
    /// Creates an empty cache. A zero TTL disables caching.
    #[must_use]
    pub fn new(name: &'static str, ttl: Duration) -> Self {
        Self {
            name,
            ttl,
            slot: RwLock::new(None),
        }
    }

    /// Returns the cached body if it is still fresh.
    pub async fn get(&self) -> Option<String> {
        let slot = self.slot.read().await;
        slot.as_ref()
            .filter(|(stored_at, _)| stored_at.elapsed() < self.ttl)
            .map(|(_, body)| body.clone())
    }

    /// Returns the fresh cached body, or builds, stores and returns a new one.
    pub async fn get_or_refresh<F, Fut>(&self, build: F) -> String
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = String>,
    {
        if let Some(body) = self.get().await {
            debug!(cache = self.name, "Serving cached body");
            return body;
        }

        let body = build().await;
        if !self.ttl.is_zero() {
            let mut slot = self.slot.write().await;
            *slot = Some((Instant::now(), body.clone()));
            info!(cache = self.name, bytes = body.len(), "Cache refreshed");
        }
        body
    }

    /// Drops the cached body so the next request rebuilds it.
    pub async fn invalidate(&self) {
        let mut slot = self.slot.write().await;
        *slot = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cache_serves_stored_body_until_invalidated() {
        let cache = ResponseCache::new("test", Duration::from_secs(3600));

        let first = cache.get_or_refresh(|| async { "one".to_string() }).await;
        let second = cache.get_or_refresh(|| async { "two".to_string() }).await;
        assert_eq!(first, "one");
        assert_eq!(second, "one");

        cache.invalidate().await;
        let third = cache.get_or_refresh(|| async { "three".to_string() }).await;
        assert_eq!(third, "three");
    }

    #[tokio::test]
    async fn test_zero_ttl_disables_caching() {
        let cache = ResponseCache::new("test", Duration::ZERO);

        cache.get_or_refresh(|| async { "one".to_string() }).await;
        let second = cache.get_or_refresh(|| async { "two".to_string() }).await;
        assert_eq!(second, "two");
        assert!(cache.get().await.is_none());
    }
}
