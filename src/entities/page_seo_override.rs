//! Page SEO override entity - per page type title, description, social cards and schema.
//!
//! Every column except `page_type` and `is_active` is optional: a blank column means
//! "inherit from the layer below".

use super::enums::PageType;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Page override database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "page_seo_overrides")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Page family this override applies to; one row per page type
    #[sea_orm(unique)]
    pub page_type: PageType,
    /// Specific URL path, informational only
    pub page_url: Option<String>,

    /// `<title>`
    pub meta_title: Option<String>,
    /// `<meta name="description">`
    pub meta_description: Option<String>,
    /// Comma-separated keywords
    pub meta_keywords: Option<String>,

    /// `og:title`
    pub og_title: Option<String>,
    /// `og:description`
    pub og_description: Option<String>,
    /// Uploaded Open Graph image, as a media path
    pub og_image_path: Option<String>,
    /// External Open Graph image URL
    pub og_image_url: Option<String>,
    /// `og:type`
    pub og_type: Option<String>,

    /// `twitter:card`
    pub twitter_card: Option<String>,
    /// `twitter:title`
    pub twitter_title: Option<String>,
    /// `twitter:description`
    pub twitter_description: Option<String>,
    /// Uploaded Twitter image, as a media path
    pub twitter_image_path: Option<String>,
    /// External Twitter image URL
    pub twitter_image_url: Option<String>,

    /// Canonical URL replacing the synthesized one
    pub canonical_url: Option<String>,
    /// Robots directive, e.g. `"noindex, nofollow"`
    pub robots_directive: Option<String>,
    /// Schema.org type hint, e.g. `"WebPage"`
    pub schema_type: Option<String>,
    /// JSON-LD payload stored as text
    #[sea_orm(column_type = "Text", nullable)]
    pub schema_data: Option<String>,
    /// Primary keyword the page targets
    pub focus_keyword: Option<String>,

    /// Inactive overrides are ignored by the resolver
    pub is_active: bool,
    /// When the row was created
    pub created_at: DateTime,
    /// When the row was last modified
    pub updated_at: DateTime,
}

/// Overrides have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
