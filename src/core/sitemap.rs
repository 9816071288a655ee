//! Sitemap entry collection and manual entry management.
//!
//! [`build`] gathers the manual entries first (highest priority first), then one group
//! per content collection: featured projects, published posts, active services. Each
//! source is queried on its own; a source that fails is logged and skipped so the
//! others still make it into the sitemap. If nothing at all could be gathered the
//! sitemap falls back to the site root alone.

use crate::{
    core::{content::ContentSource, log_fallback, request::RequestContext},
    entities::{
        BlogPost, ChangeFrequency, ManualSitemapEntry, Project, Service, SitemapPriority,
        blog_post, manual_sitemap_entry, project, service,
    },
    errors::{Error, Result},
};
use chrono::NaiveDateTime;
use sea_orm::{ActiveEnum, FromQueryResult, QueryOrder, QuerySelect, Set, prelude::*};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Featured projects listed at most
pub const PROJECT_LIMIT: u64 = 20;
/// Published posts listed at most
pub const POST_LIMIT: u64 = 50;

/// `<image:image>` attached to an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SitemapImage {
    /// Absolute image URL
    pub loc: String,
    /// Caption, the content title
    pub title: Option<String>,
}

/// One `<url>` of the sitemap
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SitemapEntry {
    /// Absolute URL
    pub url: String,
    /// `<lastmod>`; absent only for the root fallback
    pub last_modified: Option<NaiveDateTime>,
    /// `<changefreq>`
    pub change_frequency: ChangeFrequency,
    /// `<priority>`
    pub priority: SitemapPriority,
    /// Representative image
    pub image: Option<SitemapImage>,
}

impl SitemapEntry {
    fn root(request: &RequestContext) -> Self {
        Self {
            url: request.absolute("/"),
            last_modified: None,
            change_frequency: ChangeFrequency::Daily,
            priority: SitemapPriority::Highest,
            image: None,
        }
    }

    fn for_content(
        source: &dyn ContentSource,
        request: &RequestContext,
        path: &str,
        updated_at: NaiveDateTime,
        priority: SitemapPriority,
        change_frequency: ChangeFrequency,
    ) -> Self {
        let image = source
            .as_illustrated()
            .and_then(|i| i.image())
            .map(|image| SitemapImage {
                loc: image.absolute_url(request),
                title: source
                    .as_titled()
                    .and_then(|t| t.title())
                    .map(str::to_string),
            });

        Self {
            url: request.absolute(path),
            last_modified: Some(updated_at),
            change_frequency,
            priority,
            image,
        }
    }
}

/// Builds the full list of sitemap entries for the site at `request`'s base URL.
#[instrument(skip(db, request))]
pub async fn build<C>(db: &C, request: &RequestContext) -> Vec<SitemapEntry>
where
    C: ConnectionTrait,
{
    let mut entries = Vec::new();

    gather(&mut entries, "manual_sitemap_entries", manual_entries(db, request).await);
    gather(&mut entries, "projects", project_entries(db, request).await);
    gather(&mut entries, "blog_posts", post_entries(db, request).await);
    gather(&mut entries, "services", service_entries(db, request).await);

    if entries.is_empty() {
        warn!("Sitemap has no entries, falling back to the site root");
        entries.push(SitemapEntry::root(request));
    }

    debug!(count = entries.len(), "Sitemap entries built");
    entries
}

fn gather(entries: &mut Vec<SitemapEntry>, source: &'static str, batch: Result<Vec<SitemapEntry>>) {
    match batch {
        Ok(batch) => entries.extend(batch),
        Err(e) => log_fallback(source, &e),
    }
}

/// A manual entry with its enum columns left undecoded.
#[derive(Debug, FromQueryResult)]
struct ManualEntryRow {
    url_path: String,
    priority: String,
    change_frequency: String,
    last_modified: NaiveDateTime,
}

/// Decodes a stored enum value, falling back to `default` for this field only.
fn decode_or<E>(field: &'static str, raw: &str, url_path: &str, default: E) -> E
where
    E: ActiveEnum<Value = String>,
{
    E::try_from_value(&raw.to_string()).unwrap_or_else(|e| {
        let err = Error::MalformedData {
            field,
            message: format!("{url_path}: {e}"),
        };
        log_fallback("manual_sitemap_entries", &err);
        default
    })
}

async fn manual_entries<C>(db: &C, request: &RequestContext) -> Result<Vec<SitemapEntry>>
where
    C: ConnectionTrait,
{
    let rows: Vec<ManualEntryRow> = ManualSitemapEntry::find()
        .select_only()
        .column(manual_sitemap_entry::Column::UrlPath)
        .column(manual_sitemap_entry::Column::Priority)
        .column(manual_sitemap_entry::Column::ChangeFrequency)
        .column(manual_sitemap_entry::Column::LastModified)
        .filter(manual_sitemap_entry::Column::IsActive.eq(true))
        .order_by_desc(manual_sitemap_entry::Column::Priority)
        .order_by_asc(manual_sitemap_entry::Column::UrlPath)
        .into_model::<ManualEntryRow>()
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|row| SitemapEntry {
            url: request.absolute(&row.url_path),
            last_modified: Some(row.last_modified),
            priority: decode_or("priority", &row.priority, &row.url_path, SitemapPriority::Normal),
            change_frequency: decode_or(
                "change_frequency",
                &row.change_frequency,
                &row.url_path,
                ChangeFrequency::Weekly,
            ),
            image: None,
        })
        .collect())
}

async fn project_entries<C>(db: &C, request: &RequestContext) -> Result<Vec<SitemapEntry>>
where
    C: ConnectionTrait,
{
    let projects: Vec<project::Model> = Project::find()
        .filter(project::Column::IsFeatured.eq(true))
        .order_by_desc(project::Column::CreatedAt)
        .order_by_desc(project::Column::Id)
        .limit(PROJECT_LIMIT)
        .all(db)
        .await?;

    Ok(projects
        .iter()
        .map(|project| {
            SitemapEntry::for_content(
                project,
                request,
                &format!("/projects/{}/", project.slug),
                project.updated_at,
                SitemapPriority::High,
                ChangeFrequency::Monthly,
            )
        })
        .collect())
}

async fn post_entries<C>(db: &C, request: &RequestContext) -> Result<Vec<SitemapEntry>>
where
    C: ConnectionTrait,
{
    let posts: Vec<blog_post::Model> = BlogPost::find()
        .filter(blog_post::Column::IsPublished.eq(true))
        .order_by_desc(blog_post::Column::IsFeatured)
        .order_by_desc(blog_post::Column::PublishedAt)
        .order_by_desc(blog_post::Column::Id)
        .limit(POST_LIMIT)
        .all(db)
        .await?;

    Ok(posts
        .iter()
        .map(|post| {
            SitemapEntry::for_content(
                post,
                request,
                &format!("/blog/{}/", post.slug),
                post.updated_at,
                SitemapPriority::AboveNormal,
                ChangeFrequency::Weekly,
            )
        })
        .collect())
}

async fn service_entries<C>(db: &C, request: &RequestContext) -> Result<Vec<SitemapEntry>>
where
    C: ConnectionTrait,
{
    let services: Vec<service::Model> = Service::find()
        .filter(service::Column::IsActive.eq(true))
        .order_by_asc(service::Column::DisplayOrder)
        .order_by_asc(service::Column::Name)
        .all(db)
        .await?;

    Ok(services
        .iter()
        .map(|service| {
            SitemapEntry::for_content(
                service,
                request,
                &format!("/services/{}/", service.slug),
                service.updated_at,
                SitemapPriority::High,
                ChangeFrequency::Monthly,
            )
        })
        .collect())
}

/// Lists active manual entries, highest priority first, then by path.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_active_sitemap_entries<C>(db: &C) -> Result<Vec<manual_sitemap_entry::Model>>
where
    C: ConnectionTrait,
{
    // Priorities are stored as "0.1".."1.0", so text order is numeric order.
    ManualSitemapEntry::find()
        .filter(manual_sitemap_entry::Column::IsActive.eq(true))
        .order_by_desc(manual_sitemap_entry::Column::Priority)
        .order_by_asc(manual_sitemap_entry::Column::UrlPath)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Adds a manual entry.
///
/// # Errors
/// Returns an error if:
/// - The path does not start with `/`
/// - An entry with the same path already exists
/// - The database insert fails
#[instrument(skip(db))]
pub async fn create_sitemap_entry(
    db: &DatabaseConnection,
    url_path: &str,
    priority: SitemapPriority,
    change_frequency: ChangeFrequency,
) -> Result<manual_sitemap_entry::Model> {
    let url_path = url_path.trim();
    if !url_path.starts_with('/') {
        return Err(Error::Validation {
            message: format!("Sitemap path '{url_path}' must start with '/'"),
        });
    }

    let existing = ManualSitemapEntry::find()
        .filter(manual_sitemap_entry::Column::UrlPath.eq(url_path))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(Error::Validation {
            message: format!("Sitemap path '{url_path}' already exists"),
        });
    }

    let entry = manual_sitemap_entry::ActiveModel {
        url_path: Set(url_path.to_string()),
        priority: Set(priority),
        change_frequency: Set(change_frequency),
        is_active: Set(true),
        is_auto_generated: Set(false),
        ..Default::default()
    };
    let created = entry.insert(db).await?;

    info!(url_path = %created.url_path, "Created sitemap entry");
    Ok(created)
}

/// Activates or deactivates a manual entry.
///
/// # Errors
/// Returns an error if the entry does not exist or the update fails.
#[instrument(skip(db))]
pub async fn set_sitemap_entry_active(
    db: &DatabaseConnection,
    id: i32,
    is_active: bool,
) -> Result<manual_sitemap_entry::Model> {
    let mut entry: manual_sitemap_entry::ActiveModel = ManualSitemapEntry::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| Error::Validation {
            message: format!("Sitemap entry {id} not found"),
        })?
        .into();

    entry.is_active = Set(is_active);
    entry.update(db).await.map_err(Into::into)
}
