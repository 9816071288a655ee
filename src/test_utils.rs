//! Shared test utilities.
//!
//! In-memory database setup plus fixtures for the settings row and the read-only
//! content tables. `sample_*` helpers build unsaved models; `insert_*` helpers store
//! them and return the saved row.

#![allow(clippy::unwrap_used)]

use crate::{
    core::settings::GlobalSettingsDraft,
    entities::{blog_post, project, service},
    errors::Result,
};
use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use tracing_subscriber::EnvFilter;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all database tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Installs a test-writer subscriber so fallback logs show up in failing tests.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Fixed timestamp so fixtures are deterministic.
pub fn fixture_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .and_then(|d| d.and_hms_opt(9, 30, 0))
        .unwrap()
}

/// Settings for a site called "Acme".
///
/// # Defaults
/// * `site_name`: "Acme"
/// * `business_name`: "Acme Ltd"
/// * `default_meta_description`: "Acme builds websites."
/// * all feature toggles enabled
pub fn acme_settings_draft() -> GlobalSettingsDraft {
    GlobalSettingsDraft {
        site_name: "Acme".to_string(),
        business_name: "Acme Ltd".to_string(),
        default_meta_description: "Acme builds websites.".to_string(),
        ..Default::default()
    }
}

fn title_from_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Unsaved project titled after its slug, without an image.
pub fn sample_project(slug: &str, is_featured: bool) -> project::Model {
    project::Model {
        id: 0,
        title: title_from_slug(slug),
        slug: slug.to_string(),
        category: "web".to_string(),
        description: format!("Case study for {}", title_from_slug(slug)),
        image_path: None,
        image_url: None,
        is_featured,
        created_at: fixture_time(),
        updated_at: fixture_time(),
    }
}

/// Unsaved blog post titled after its slug, without a featured image.
pub fn sample_blog_post(slug: &str, is_published: bool) -> blog_post::Model {
    blog_post::Model {
        id: 0,
        title: title_from_slug(slug),
        slug: slug.to_string(),
        excerpt: format!("All about {}", title_from_slug(slug)),
        content: "Body text".to_string(),
        featured_image_path: None,
        featured_image_url: None,
        is_published,
        is_featured: false,
        published_at: is_published.then(fixture_time),
        created_at: fixture_time(),
        updated_at: fixture_time(),
    }
}

/// Unsaved service named after its slug.
pub fn sample_service(slug: &str, is_active: bool) -> service::Model {
    service::Model {
        id: 0,
        name: title_from_slug(slug),
        slug: slug.to_string(),
        short_description: format!("{} in short", title_from_slug(slug)),
        description: format!("We do {}", title_from_slug(slug)),
        is_active,
        display_order: 0,
        created_at: fixture_time(),
        updated_at: fixture_time(),
    }
}

/// Stores a project, ignoring its `id`.
pub async fn insert_project(db: &DatabaseConnection, p: project::Model) -> Result<project::Model> {
    let row = project::ActiveModel {
        title: Set(p.title),
        slug: Set(p.slug),
        category: Set(p.category),
        description: Set(p.description),
        image_path: Set(p.image_path),
        image_url: Set(p.image_url),
        is_featured: Set(p.is_featured),
        created_at: Set(p.created_at),
        updated_at: Set(p.updated_at),
        ..Default::default()
    };
    Ok(row.insert(db).await?)
}

/// Stores a blog post, ignoring its `id`.
pub async fn insert_blog_post(
    db: &DatabaseConnection,
    p: blog_post::Model,
) -> Result<blog_post::Model> {
    let row = blog_post::ActiveModel {
        title: Set(p.title),
        slug: Set(p.slug),
        excerpt: Set(p.excerpt),
        content: Set(p.content),
        featured_image_path: Set(p.featured_image_path),
        featured_image_url: Set(p.featured_image_url),
        is_published: Set(p.is_published),
        is_featured: Set(p.is_featured),
        published_at: Set(p.published_at),
        created_at: Set(p.created_at),
        updated_at: Set(p.updated_at),
        ..Default::default()
    };
    Ok(row.insert(db).await?)
}

/// Stores a service, ignoring its `id`.
pub async fn insert_service(db: &DatabaseConnection, s: service::Model) -> Result<service::Model> {
    let row = service::ActiveModel {
        name: Set(s.name),
        slug: Set(s.slug),
        short_description: Set(s.short_description),
        description: Set(s.description),
        is_active: Set(s.is_active),
        display_order: Set(s.display_order),
        created_at: Set(s.created_at),
        updated_at: Set(s.updated_at),
        ..Default::default()
    };
    Ok(row.insert(db).await?)
}
