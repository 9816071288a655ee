//! Blog post entity - articles shown on `/blog/{slug}/`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Blog post database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "blog_posts")]
pub struct Model {
    /// Unique identifier for the post
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Headline
    pub title: String,
    /// URL slug
    #[sea_orm(unique)]
    pub slug: String,
    /// Short teaser, used as the meta description
    #[sea_orm(column_type = "Text")]
    pub excerpt: String,
    /// Full article body
    #[sea_orm(column_type = "Text")]
    pub content: String,
    /// Uploaded header image as a media path
    pub featured_image_path: Option<String>,
    /// External header image URL
    pub featured_image_url: Option<String>,
    /// Drafts are never listed in the sitemap
    pub is_published: bool,
    /// Featured posts sort first
    pub is_featured: bool,
    /// Publication time, set when the post is first published
    pub published_at: Option<DateTime>,
    /// When the post was created
    pub created_at: DateTime,
    /// When the post was last modified
    pub updated_at: DateTime,
}

/// Blog posts have no relationships used by this crate
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
