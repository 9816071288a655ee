//! Robots configuration entity - the literal robots.txt served to crawlers.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Robots configuration database model (single row, keyed by `core::SINGLETON_ID`)
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "robots_configurations")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Served verbatim when the row is active
    #[sea_orm(column_type = "Text")]
    pub content: String,
    /// When false the generated default robots.txt is served instead
    pub is_active: bool,
    /// When the row was created
    pub created_at: DateTime,
    /// When the row was last modified
    pub updated_at: DateTime,
}

/// Robots configuration has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
