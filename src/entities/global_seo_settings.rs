//! Global SEO settings entity - site-wide identity, analytics and feature toggles.
//!
//! The table holds at most one row, always stored under `core::SINGLETON_ID`, so the
//! primary key rejects a second one.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Global SEO settings database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "global_seo_settings")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Site name used in titles (`"{title} | {site_name}"`)
    pub site_name: String,
    /// Optional tagline
    pub site_tagline: Option<String>,
    /// Description used when a page supplies none
    pub default_meta_description: String,

    /// Legal/business name for the organization schema
    pub business_name: String,
    /// Business category, e.g. "Web Development Agency"
    pub business_type: String,
    /// Street address
    pub address: Option<String>,
    /// Customer service phone
    pub phone: Option<String>,
    /// Customer service email
    pub email: Option<String>,
    /// Country for the postal address
    pub country: Option<String>,
    /// Region/state for the postal address
    pub region: Option<String>,
    /// City for the postal address
    pub city: Option<String>,

    /// Facebook profile
    pub facebook_url: Option<String>,
    /// Twitter/X profile
    pub twitter_url: Option<String>,
    /// `LinkedIn` profile
    pub linkedin_url: Option<String>,
    /// Instagram profile
    pub instagram_url: Option<String>,
    /// `YouTube` channel
    pub youtube_url: Option<String>,

    /// GA4 measurement ID
    pub google_analytics_id: Option<String>,
    /// Google Tag Manager container ID
    pub google_tag_manager_id: Option<String>,
    /// Search Console verification token
    pub google_search_console_verification: Option<String>,
    /// Bing Webmaster verification token
    pub bing_webmaster_verification: Option<String>,
    /// Facebook pixel ID
    pub facebook_pixel_id: Option<String>,

    /// Robots directive applied before page overrides
    pub default_robots_directive: String,
    /// Emit breadcrumb structured data
    pub enable_breadcrumbs: bool,
    /// Emit organization structured data
    pub enable_schema_markup: bool,
    /// Emit Open Graph tags
    pub enable_open_graph: bool,
    /// Emit Twitter Card tags
    pub enable_twitter_cards: bool,

    /// Raw HTML appended to `<head>`
    #[sea_orm(column_type = "Text", nullable)]
    pub custom_head_tags: Option<String>,
    /// Raw scripts appended before `</body>`
    #[sea_orm(column_type = "Text", nullable)]
    pub custom_footer_scripts: Option<String>,

    /// When the row was created
    pub created_at: DateTime,
    /// When the row was last modified
    pub updated_at: DateTime,
}

/// Settings have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
