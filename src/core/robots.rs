//! robots.txt resolution and the robots configuration row.

use crate::{
    core::{SINGLETON_ID, log_absent, log_fallback, request::RequestContext},
    entities::{RobotsConfiguration, robots_configuration},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::{info, instrument};

const ROBOTS_ENTITY: &str = "Robots.txt Configuration";

/// Served when the store cannot be read at all.
pub const MINIMAL_ROBOTS: &str =
    "User-agent: *\nDisallow: /admin/\nDisallow: /api/\n\nSitemap: /sitemap.xml\n";

const DISALLOWED: [&str; 4] = ["/admin/", "/api/", "/static/admin/", "/media/private/"];
const ALLOWED: [&str; 6] = ["/", "/services/", "/portfolio/", "/about/", "/contact/", "/blog/"];

/// Returns the robots.txt body for the site.
///
/// The active configuration row is served verbatim. Without one, a default policy for
/// the request's host is generated.
#[instrument(skip(db, request))]
pub async fn resolve<C>(db: &C, request: &RequestContext) -> String
where
    C: ConnectionTrait,
{
    match get_robots_configuration(db).await {
        Ok(Some(config)) if config.is_active => config.content,
        Ok(_) => {
            log_absent("robots_configurations");
            default_robots(request)
        }
        Err(e) => {
            log_fallback("robots_configurations", &e);
            MINIMAL_ROBOTS.to_string()
        }
    }
}

/// The generated policy used until an administrator configures one.
#[must_use]
pub fn default_robots(request: &RequestContext) -> String {
    let mut out = String::from("User-agent: *\n");
    for path in DISALLOWED {
        out.push_str(&format!("Disallow: {path}\n"));
    }
    out.push_str("\n# Allow important pages\n");
    for path in ALLOWED {
        out.push_str(&format!("Allow: {path}\n"));
    }
    out.push_str("\n# Sitemap location\n");
    out.push_str(&format!("Sitemap: {}\n", request.absolute("/sitemap.xml")));
    out.push_str("\n# Crawl-delay for courtesy\nCrawl-delay: 1\n");
    out
}

/// Gets the robots configuration row, active or not.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_robots_configuration<C>(db: &C) -> Result<Option<robots_configuration::Model>>
where
    C: ConnectionTrait,
{
    RobotsConfiguration::find()
        .order_by_asc(robots_configuration::Column::Id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates the robots configuration row.
///
/// # Errors
/// Returns an error if a row already exists (`SingletonExists`), or if the insert fails.
#[instrument(skip(db, content))]
pub async fn create_robots_configuration(
    db: &DatabaseConnection,
    content: String,
    is_active: bool,
) -> Result<robots_configuration::Model> {
    if get_robots_configuration(db).await?.is_some() {
        return Err(Error::SingletonExists {
            entity: ROBOTS_ENTITY,
        });
    }

    let created = insert_robots_row(db, content, is_active).await?;
    info!(is_active, "Created robots configuration");
    Ok(created)
}

async fn insert_robots_row(
    db: &DatabaseConnection,
    content: String,
    is_active: bool,
) -> Result<robots_configuration::Model> {
    let now = chrono::Utc::now().naive_utc();
    let config = robots_configuration::ActiveModel {
        id: Set(SINGLETON_ID),
        content: Set(content),
        is_active: Set(is_active),
        created_at: Set(now),
        updated_at: Set(now),
    };

    match config.insert(db).await {
        Ok(created) => Ok(created),
        Err(e) => match get_robots_configuration(db).await {
            Ok(Some(_)) => Err(Error::SingletonExists {
                entity: ROBOTS_ENTITY,
            }),
            _ => Err(e.into()),
        },
    }
}

/// Replaces the content and active flag of the robots configuration row.
///
/// # Errors
/// Returns an error if no row exists, or if the update fails.
#[instrument(skip(db, content))]
pub async fn update_robots_configuration(
    db: &DatabaseConnection,
    content: String,
    is_active: bool,
) -> Result<robots_configuration::Model> {
    let mut config: robots_configuration::ActiveModel = get_robots_configuration(db)
        .await?
        .ok_or_else(|| Error::Validation {
            message: "No robots configuration has been created yet".to_string(),
        })?
        .into();

    config.content = Set(content);
    config.is_active = Set(is_active);
    config.updated_at = Set(chrono::Utc::now().naive_utc());
    config.update(db).await.map_err(Into::into)
}
