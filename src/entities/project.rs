//! Project entity - portfolio items shown on `/projects/{slug}/`.
//!
//! Projects are managed by the CRUD side of the site; this crate only reads them.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Project database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    /// Unique identifier for the project
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display title
    pub title: String,
    /// URL slug
    #[sea_orm(unique)]
    pub slug: String,
    /// Category key (web, mobile, branding, ...)
    pub category: String,
    /// Summary shown on cards and used as the meta description
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Uploaded image as a media path
    pub image_path: Option<String>,
    /// External image URL
    pub image_url: Option<String>,
    /// Only featured projects are listed in the sitemap
    pub is_featured: bool,
    /// When the project was created
    pub created_at: DateTime,
    /// When the project was last modified
    pub updated_at: DateTime,
}

/// Projects have no relationships used by this crate
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
