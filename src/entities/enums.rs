//! String-valued enums shared by several tables.
//!
//! All three are stored as their lowercase/kebab-case identifiers so rows stay readable
//! from an SQL shell and the admin UI.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Page families that can carry a page-level SEO override
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "kebab-case")]
pub enum PageType {
    /// Landing page
    #[sea_orm(string_value = "home")]
    Home,
    /// About page
    #[sea_orm(string_value = "about")]
    About,
    /// Services page
    #[sea_orm(string_value = "services")]
    Services,
    /// Portfolio and project pages
    #[sea_orm(string_value = "portfolio")]
    Portfolio,
    /// Team page
    #[sea_orm(string_value = "team")]
    Team,
    /// Contact page
    #[sea_orm(string_value = "contact")]
    Contact,
    /// Blog index and posts
    #[sea_orm(string_value = "blog")]
    Blog,
    /// Careers and job postings
    #[sea_orm(string_value = "careers")]
    Careers,
    /// Help center
    #[sea_orm(string_value = "help")]
    Help,
    /// Case studies
    #[sea_orm(string_value = "case-studies")]
    CaseStudies,
    /// Privacy policy
    #[sea_orm(string_value = "privacy")]
    Privacy,
    /// Terms and conditions
    #[sea_orm(string_value = "terms")]
    Terms,
}

/// Sitemap priority, from `"1.0"` down to `"0.1"`.
///
/// Variants are declared lowest first so the derived `Ord` matches the numeric order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum SitemapPriority {
    /// 0.1
    #[sea_orm(string_value = "0.1")]
    #[serde(rename = "0.1")]
    Lowest,
    /// 0.2
    #[sea_orm(string_value = "0.2")]
    #[serde(rename = "0.2")]
    Minimal,
    /// 0.3
    #[sea_orm(string_value = "0.3")]
    #[serde(rename = "0.3")]
    VeryLow,
    /// 0.4
    #[sea_orm(string_value = "0.4")]
    #[serde(rename = "0.4")]
    Low,
    /// 0.5
    #[sea_orm(string_value = "0.5")]
    #[serde(rename = "0.5")]
    BelowNormal,
    /// 0.6, the default for manual entries
    #[sea_orm(string_value = "0.6")]
    #[serde(rename = "0.6")]
    Normal,
    /// 0.7
    #[sea_orm(string_value = "0.7")]
    #[serde(rename = "0.7")]
    AboveNormal,
    /// 0.8
    #[sea_orm(string_value = "0.8")]
    #[serde(rename = "0.8")]
    High,
    /// 0.9
    #[sea_orm(string_value = "0.9")]
    #[serde(rename = "0.9")]
    VeryHigh,
    /// 1.0
    #[sea_orm(string_value = "1.0")]
    #[serde(rename = "1.0")]
    Highest,
}

impl SitemapPriority {
    /// The decimal string written into `<priority>`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lowest => "0.1",
            Self::Minimal => "0.2",
            Self::VeryLow => "0.3",
            Self::Low => "0.4",
            Self::BelowNormal => "0.5",
            Self::Normal => "0.6",
            Self::AboveNormal => "0.7",
            Self::High => "0.8",
            Self::VeryHigh => "0.9",
            Self::Highest => "1.0",
        }
    }
}

/// How often a URL is expected to change
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    /// always
    #[sea_orm(string_value = "always")]
    Always,
    /// hourly
    #[sea_orm(string_value = "hourly")]
    Hourly,
    /// daily
    #[sea_orm(string_value = "daily")]
    Daily,
    /// weekly, the default for manual entries
    #[sea_orm(string_value = "weekly")]
    Weekly,
    /// monthly
    #[sea_orm(string_value = "monthly")]
    Monthly,
    /// yearly
    #[sea_orm(string_value = "yearly")]
    Yearly,
    /// never
    #[sea_orm(string_value = "never")]
    Never,
}

impl ChangeFrequency {
    /// The keyword written into `<changefreq>`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}
