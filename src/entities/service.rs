//! Service entity - agency service offerings shown on `/services/{slug}/`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Service database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
pub struct Model {
    /// Unique identifier for the service
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name
    pub name: String,
    /// URL slug
    #[sea_orm(unique)]
    pub slug: String,
    /// One-line pitch
    pub short_description: String,
    /// Full description, used as the meta description
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Inactive services are hidden from the site and the sitemap
    pub is_active: bool,
    /// Position in listings, ascending
    pub display_order: i32,
    /// When the service was created
    pub created_at: DateTime,
    /// When the service was last modified
    pub updated_at: DateTime,
}

/// Services have no relationships used by this crate
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
