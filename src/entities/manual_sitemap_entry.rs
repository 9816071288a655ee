//! Manual sitemap entry entity - statically configured sitemap URLs.
//!
//! `last_modified` is refreshed on every save by [`ActiveModelBehavior::before_save`],
//! so callers never set it themselves.

use super::enums::{ChangeFrequency, SitemapPriority};
use sea_orm::{Set, entity::prelude::*};
use serde::{Deserialize, Serialize};

/// Manual sitemap entry database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "manual_sitemap_entries")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Path relative to the site root, e.g. `/about`
    #[sea_orm(unique)]
    pub url_path: String,
    /// `<priority>`
    pub priority: SitemapPriority,
    /// `<changefreq>`
    pub change_frequency: ChangeFrequency,
    /// Inactive entries are left out of the sitemap
    pub is_active: bool,
    /// Whether the row was generated from content rather than entered by hand
    pub is_auto_generated: bool,
    /// `<lastmod>`, maintained automatically
    pub last_modified: DateTime,
    /// When the row was created
    pub created_at: DateTime,
}

/// Sitemap entries have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = chrono::Utc::now().naive_utc();
        self.last_modified = Set(now);
        if insert && self.created_at.is_not_set() {
            self.created_at = Set(now);
        }
        Ok(self)
    }
}
