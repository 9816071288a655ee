//! Page-level SEO overrides, one row per page type.

use crate::{
    core::{content::non_blank, request::is_absolute_url},
    entities::{PageSeoOverride, PageType, page_seo_override},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Deserialize;
use tracing::{info, instrument};

/// Editable fields of an override. Blank values mean "inherit".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct PageOverrideDraft {
    pub page_url: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image_path: Option<String>,
    pub og_image_url: Option<String>,
    pub og_type: Option<String>,
    pub twitter_card: Option<String>,
    pub twitter_title: Option<String>,
    pub twitter_description: Option<String>,
    pub twitter_image_path: Option<String>,
    pub twitter_image_url: Option<String>,
    pub canonical_url: Option<String>,
    pub robots_directive: Option<String>,
    pub schema_type: Option<String>,
    pub schema_data: Option<String>,
    pub focus_keyword: Option<String>,
}

impl PageOverrideDraft {
    fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("og_image_url", &self.og_image_url),
            ("twitter_image_url", &self.twitter_image_url),
        ] {
            if let Some(url) = non_blank(value.as_deref())
                .map(str::trim)
                .filter(|url| !is_absolute_url(url))
            {
                return Err(Error::Validation {
                    message: format!("{field} must be an absolute http(s) URL, got '{url}'"),
                });
            }
        }

        if let Some(canonical) = non_blank(self.canonical_url.as_deref())
            .map(str::trim)
            .filter(|url| !url.starts_with('/') && !is_absolute_url(url))
        {
            return Err(Error::Validation {
                message: format!(
                    "canonical_url must be an absolute URL or start with '/', got '{canonical}'"
                ),
            });
        }
        Ok(())
    }

    fn apply(self, model: &mut page_seo_override::ActiveModel) {
        model.page_url = Set(self.page_url);
        model.meta_title = Set(self.meta_title);
        model.meta_description = Set(self.meta_description);
        model.meta_keywords = Set(self.meta_keywords);
        model.og_title = Set(self.og_title);
        model.og_description = Set(self.og_description);
        model.og_image_path = Set(self.og_image_path);
        model.og_image_url = Set(self.og_image_url);
        model.og_type = Set(self.og_type);
        model.twitter_card = Set(self.twitter_card);
        model.twitter_title = Set(self.twitter_title);
        model.twitter_description = Set(self.twitter_description);
        model.twitter_image_path = Set(self.twitter_image_path);
        model.twitter_image_url = Set(self.twitter_image_url);
        model.canonical_url = Set(self.canonical_url);
        model.robots_directive = Set(self.robots_directive);
        model.schema_type = Set(self.schema_type);
        model.schema_data = Set(self.schema_data);
        model.focus_keyword = Set(self.focus_keyword);
    }
}

/// Gets the active override for a page type, if any.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_page_override<C>(
    db: &C,
    page_type: PageType,
) -> Result<Option<page_seo_override::Model>>
where
    C: ConnectionTrait,
{
    PageSeoOverride::find()
        .filter(page_seo_override::Column::PageType.eq(page_type))
        .filter(page_seo_override::Column::IsActive.eq(true))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates the override for a page type.
///
/// # Errors
/// Returns an error if:
/// - An image URL is not an absolute `http(s)` URL
/// - The canonical URL is neither absolute nor rooted at `/`
/// - The page type already has an override (active or not)
/// - The insert fails
#[instrument(skip(db, draft))]
pub async fn create_page_override(
    db: &DatabaseConnection,
    page_type: PageType,
    draft: PageOverrideDraft,
) -> Result<page_seo_override::Model> {
    draft.validate()?;

    let existing = PageSeoOverride::find()
        .filter(page_seo_override::Column::PageType.eq(page_type))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(Error::Validation {
            message: format!("Page type '{}' already has an SEO override", page_type.as_str()),
        });
    }

    let now = chrono::Utc::now().naive_utc();
    let mut page_override = page_seo_override::ActiveModel {
        page_type: Set(page_type),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    draft.apply(&mut page_override);
    let created = page_override.insert(db).await?;

    info!(page_type = page_type.as_str(), "Created page SEO override");
    Ok(created)
}

/// Replaces the editable fields of an override and sets its active flag.
///
/// # Errors
/// Returns an error if a URL field is invalid, the page type has no override, or the
/// update fails.
#[instrument(skip(db, draft))]
pub async fn update_page_override(
    db: &DatabaseConnection,
    page_type: PageType,
    draft: PageOverrideDraft,
    is_active: bool,
) -> Result<page_seo_override::Model> {
    draft.validate()?;

    let mut page_override: page_seo_override::ActiveModel = PageSeoOverride::find()
        .filter(page_seo_override::Column::PageType.eq(page_type))
        .one(db)
        .await?
        .ok_or_else(|| Error::Validation {
            message: format!("Page type '{}' has no SEO override", page_type.as_str()),
        })?
        .into();

    draft.apply(&mut page_override);
    page_override.is_active = Set(is_active);
    page_override.updated_at = Set(chrono::Utc::now().naive_utc());
    page_override.update(db).await.map_err(Into::into)
}

/// Lists active overrides, ordered by page type.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_active_overrides<C>(db: &C) -> Result<Vec<page_seo_override::Model>>
where
    C: ConnectionTrait,
{
    PageSeoOverride::find()
        .filter(page_seo_override::Column::IsActive.eq(true))
        .order_by_asc(page_seo_override::Column::PageType)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_and_get_page_override() -> Result<()> {
        let db = setup_test_db().await?;

        let draft = PageOverrideDraft {
            meta_title: Some("About Acme".to_string()),
            ..Default::default()
        };
        let created = create_page_override(&db, PageType::About, draft).await?;
        assert!(created.is_active);

        let found = get_page_override(&db, PageType::About).await?.unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.meta_title.as_deref(), Some("About Acme"));

        assert!(get_page_override(&db, PageType::Team).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_page_type_is_rejected() -> Result<()> {
        let db = setup_test_db().await?;
        create_page_override(&db, PageType::Blog, PageOverrideDraft::default()).await?;

        let result = create_page_override(&db, PageType::Blog, PageOverrideDraft::default()).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));
        Ok(())
    }

    #[tokio::test]
    async fn test_inactive_override_is_ignored() -> Result<()> {
        let db = setup_test_db().await?;
        create_page_override(&db, PageType::Contact, PageOverrideDraft::default()).await?;
        create_page_override(&db, PageType::Home, PageOverrideDraft::default()).await?;

        let updated = update_page_override(
            &db,
            PageType::Contact,
            PageOverrideDraft {
                meta_title: Some("Talk to us".to_string()),
                ..Default::default()
            },
            false,
        )
        .await?;
        assert!(!updated.is_active);
        assert_eq!(updated.meta_title.as_deref(), Some("Talk to us"));

        assert!(get_page_override(&db, PageType::Contact).await?.is_none());

        let active = list_active_overrides(&db).await?;
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].page_type, PageType::Home);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_override_fails() -> Result<()> {
        let db = setup_test_db().await?;
        let result =
            update_page_override(&db, PageType::Terms, PageOverrideDraft::default(), true).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_urls_are_rejected() -> Result<()> {
        let db = setup_test_db().await?;

        let relative_image = create_page_override(
            &db,
            PageType::About,
            PageOverrideDraft {
                og_image_url: Some("images/og.png".to_string()),
                ..Default::default()
            },
        )
        .await;
        assert!(matches!(relative_image.unwrap_err(), Error::Validation { .. }));

        let relative_canonical = create_page_override(
            &db,
            PageType::About,
            PageOverrideDraft {
                canonical_url: Some("about/".to_string()),
                ..Default::default()
            },
        )
        .await;
        assert!(matches!(relative_canonical.unwrap_err(), Error::Validation { .. }));
        assert!(get_page_override(&db, PageType::About).await?.is_none());

        create_page_override(
            &db,
            PageType::About,
            PageOverrideDraft {
                og_image_url: Some("https://cdn.example/og.png".to_string()),
                canonical_url: Some("/about/".to_string()),
                ..Default::default()
            },
        )
        .await?;
        let bad_update = update_page_override(
            &db,
            PageType::About,
            PageOverrideDraft {
                twitter_image_url: Some("tw.png".to_string()),
                ..Default::default()
            },
            true,
        )
        .await;
        assert!(matches!(bad_update.unwrap_err(), Error::Validation { .. }));
        Ok(())
    }
}
