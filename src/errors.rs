//! Unified error types for the SEO backend.
//!
//! The public SEO operations (metadata resolution, breadcrumbs, sitemap, robots.txt)
//! never hand these errors to their callers; they classify them with
//! [`Error::fallback_reason`], log them and fall back. Administrative operations
//! (settings, overrides, sitemap entries) return them as-is.

use sea_orm::DbErr;
use thiserror::Error;

/// Every error the crate can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// Application configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// The backing store rejected or failed a query
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    /// Input failed validation before reaching the store
    #[error("Validation error: {message}")]
    Validation {
        /// Which rule was violated
        message: String,
    },

    /// A second row was about to be created for a single-row configuration table
    #[error("Only one {entity} instance is allowed")]
    SingletonExists {
        /// Human-readable name of the configuration type
        entity: &'static str,
    },

    /// A stored field could not be decoded
    #[error("Malformed stored data in {field}: {message}")]
    MalformedData {
        /// Name of the offending column
        field: &'static str,
        /// Decoder message
        message: String,
    },

    /// Rendering a response document failed
    #[error("Render error: {message}")]
    Render {
        /// Writer message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why a lookup fell back to the next precedence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// The row does not exist
    ConfigurationAbsent,
    /// The store could not be queried
    StoreUnreachable,
    /// The row exists but one of its fields could not be decoded
    MalformedData,
    /// Anything else
    Other,
}

impl FallbackReason {
    /// Stable identifier used as a structured log field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ConfigurationAbsent => "configuration_absent",
            Self::StoreUnreachable => "store_unreachable",
            Self::MalformedData => "malformed_data",
            Self::Other => "other",
        }
    }
}

impl Error {
    /// Classifies this error for fallback logging.
    #[must_use]
    pub const fn fallback_reason(&self) -> FallbackReason {
        match self {
            Self::Database(DbErr::Type(_) | DbErr::TryIntoErr { .. } | DbErr::Json(_)) => {
                FallbackReason::MalformedData
            }
            Self::Database(_) | Self::Io(_) => FallbackReason::StoreUnreachable,
            Self::MalformedData { .. } | Self::Json(_) => FallbackReason::MalformedData,
            _ => FallbackReason::Other,
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_reason_classification() {
        let store = Error::Database(DbErr::Custom("connection refused".to_string()));
        assert_eq!(store.fallback_reason(), FallbackReason::StoreUnreachable);

        let malformed = Error::MalformedData {
            field: "schema_data",
            message: "expected value".to_string(),
        };
        assert_eq!(malformed.fallback_reason(), FallbackReason::MalformedData);

        assert_eq!(
            FallbackReason::ConfigurationAbsent.as_str(),
            "configuration_absent"
        );

        let decode = Error::Database(DbErr::Type(
            "unexpected value for SitemapPriority enum: 0.65".to_string(),
        ));
        assert_eq!(decode.fallback_reason(), FallbackReason::MalformedData);

        let singleton = Error::SingletonExists {
            entity: "SEO Settings",
        };
        assert_eq!(singleton.fallback_reason(), FallbackReason::Other);
        assert_eq!(
            singleton.to_string(),
            "Only one SEO Settings instance is allowed"
        );
    }
}
