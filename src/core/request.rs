//! The slice of an incoming request the SEO operations need.
//!
//! Handlers build a [`RequestContext`] and pass it explicitly to the resolver, the
//! breadcrumb builder and the robots/sitemap builders.

use crate::config::SiteConfig;
use serde::Serialize;

/// Scheme, host and path of the page being rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestContext {
    base_url: String,
    path: String,
}

impl RequestContext {
    /// Builds a context from its parts. An empty path means the site root.
    #[must_use]
    pub fn new(scheme: &str, host: &str, path: &str) -> Self {
        Self {
            base_url: format!("{scheme}://{}", host.trim_end_matches('/')),
            path: if path.is_empty() {
                "/".to_string()
            } else {
                path.to_string()
            },
        }
    }

    /// Builds a context for `path` on the configured site.
    #[must_use]
    pub fn for_site(site: &SiteConfig, path: &str) -> Self {
        Self::new(&site.scheme, &site.domain, path)
    }

    /// `{scheme}://{host}` without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The request path exactly as received.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Absolute URL of the current request, always on this site.
    #[must_use]
    pub fn current_url(&self) -> String {
        if self.path.starts_with('/') {
            format!("{}{}", self.base_url, self.path)
        } else {
            format!("{}/{}", self.base_url, self.path)
        }
    }

    /// Resolves a site-relative path (or media path) against the base URL.
    /// Values that are already absolute URLs are returned unchanged.
    #[must_use]
    pub fn absolute(&self, path_or_url: &str) -> String {
        if path_or_url.starts_with("http://") || path_or_url.starts_with("https://") {
            return path_or_url.to_string();
        }
        if path_or_url.starts_with('/') {
            format!("{}{path_or_url}", self.base_url)
        } else {
            format!("{}/{path_or_url}", self.base_url)
        }
    }
}

/// Whether `value` is an `http(s)://` URL with a non-empty host.
#[must_use]
pub fn is_absolute_url(value: &str) -> bool {
    let Some(rest) = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"))
    else {
        return false;
    };
    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    !host.is_empty() && !value.chars().any(char::is_whitespace)
}
