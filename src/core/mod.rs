/// Breadcrumb trails as JSON-LD
pub mod breadcrumbs;
/// Capability traits implemented by content models
pub mod content;
/// SEO configuration health report
pub mod health;
/// Page-level SEO overrides
pub mod overrides;
/// Page type parsing and path mapping
pub mod page_type;
/// Request context passed to every SEO operation
pub mod request;
/// robots.txt policy
pub mod robots;
/// Metadata resolution
pub mod seo;
/// Global settings lifecycle
pub mod settings;
/// Sitemap entries
pub mod sitemap;

use crate::errors::{Error, FallbackReason};
use tracing::{debug, error, warn};

/// Primary key of the only row in a single-row configuration table.
///
/// A second insert collides on the key, whichever backend holds the table.
pub(crate) const SINGLETON_ID: i32 = 1;

/// Logs a lookup that found no stored configuration.
pub(crate) fn log_absent(source: &'static str) {
    let reason = FallbackReason::ConfigurationAbsent;
    debug!(source, reason = reason.as_str(), "No stored configuration, using fallback");
}

/// Logs a failed lookup that the caller is about to replace with a fallback.
pub(crate) fn log_fallback(source: &'static str, err: &Error) {
    let reason = err.fallback_reason();
    match reason {
        FallbackReason::StoreUnreachable => {
            warn!(source, reason = reason.as_str(), error = %err, "Store unreachable, using fallback");
        }
        FallbackReason::MalformedData => {
            warn!(source, reason = reason.as_str(), error = %err, "Malformed stored data, using fallback");
        }
        FallbackReason::ConfigurationAbsent => log_absent(source),
        FallbackReason::Other => {
            error!(source, reason = reason.as_str(), error = %err, "Unexpected error, using fallback");
        }
    }
}
