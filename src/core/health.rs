//! SEO configuration health report.

use crate::{
    entities::{
        ManualSitemapEntry, PageSeoOverride, RobotsConfiguration, manual_sitemap_entry,
        page_seo_override, robots_configuration,
    },
    errors::Result,
};
use sea_orm::{PaginatorTrait, prelude::*};
use serde::Serialize;

/// Overall state of the SEO configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    /// Nothing to report
    Healthy,
    /// At least one issue was found
    IssuesFound,
}

impl HealthStatus {
    /// Identifier used in reports
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::IssuesFound => "issues_found",
        }
    }
}

/// Snapshot of what has been configured
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeoHealthReport {
    /// Overall state
    pub status: HealthStatus,
    /// Whether the global settings row exists
    pub settings_configured: bool,
    /// Active page overrides
    pub active_overrides: u64,
    /// Active manual sitemap entries
    pub active_sitemap_entries: u64,
    /// Whether an active robots configuration exists
    pub robots_configured: bool,
    /// Human-readable problems
    pub issues: Vec<String>,
}

impl SeoHealthReport {
    /// Plain-text summary served by the health endpoint.
    #[must_use]
    pub fn render_plain(&self) -> String {
        format!(
            "SEO Status: {}\nMeta Tags: {}\nSitemap URLs: {}\nIssues: {}",
            self.status.as_str(),
            self.active_overrides,
            self.active_sitemap_entries,
            self.issues.len()
        )
    }
}

/// Counts the configured SEO data and lists what is missing.
///
/// # Errors
/// Returns an error if any of the counting queries fail.
pub async fn check<C>(db: &C) -> Result<SeoHealthReport>
where
    C: ConnectionTrait,
{
    let settings_configured = crate::core::settings::get_global_settings(db)
        .await?
        .is_some();
    let active_overrides = PageSeoOverride::find()
        .filter(page_seo_override::Column::IsActive.eq(true))
        .count(db)
        .await?;
    let active_sitemap_entries = ManualSitemapEntry::find()
        .filter(manual_sitemap_entry::Column::IsActive.eq(true))
        .count(db)
        .await?;
    let robots_configured = RobotsConfiguration::find()
        .filter(robots_configuration::Column::IsActive.eq(true))
        .count(db)
        .await?
        > 0;

    let mut issues = Vec::new();
    if !settings_configured {
        issues.push("SEO settings not configured".to_string());
    }
    if active_overrides == 0 {
        issues.push("No meta tags configured".to_string());
    }
    if active_sitemap_entries == 0 {
        issues.push("No sitemap URLs configured".to_string());
    }

    Ok(SeoHealthReport {
        status: if issues.is_empty() {
            HealthStatus::Healthy
        } else {
            HealthStatus::IssuesFound
        },
        settings_configured,
        active_overrides,
        active_sitemap_entries,
        robots_configured,
        issues,
    })
}
