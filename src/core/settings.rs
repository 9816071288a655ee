//! Global SEO settings lifecycle.
//!
//! The settings table is a single-row configuration object. It is loaded (or created
//! with defaults) once at process start by [`ensure_global_settings`], edited through
//! [`update_global_settings`], and read by the resolver on every resolution.
//! [`create_global_settings`] refuses to create a second row.

use crate::{
    core::SINGLETON_ID,
    entities::{GlobalSeoSettings, global_seo_settings},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Deserialize;
use tracing::{info, instrument};

const SETTINGS_ENTITY: &str = "SEO Settings";

/// Editable fields of the settings row
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct GlobalSettingsDraft {
    pub site_name: String,
    pub site_tagline: Option<String>,
    pub default_meta_description: String,
    pub business_name: String,
    pub business_type: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
    pub facebook_url: Option<String>,
    pub twitter_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub instagram_url: Option<String>,
    pub youtube_url: Option<String>,
    pub google_analytics_id: Option<String>,
    pub google_tag_manager_id: Option<String>,
    pub google_search_console_verification: Option<String>,
    pub bing_webmaster_verification: Option<String>,
    pub facebook_pixel_id: Option<String>,
    pub default_robots_directive: String,
    pub enable_breadcrumbs: bool,
    pub enable_schema_markup: bool,
    pub enable_open_graph: bool,
    pub enable_twitter_cards: bool,
    pub custom_head_tags: Option<String>,
    pub custom_footer_scripts: Option<String>,
}

impl Default for GlobalSettingsDraft {
    fn default() -> Self {
        Self {
            site_name: crate::core::seo::DEFAULT_SITE_NAME.to_string(),
            site_tagline: None,
            default_meta_description: String::new(),
            business_name: crate::core::seo::DEFAULT_SITE_NAME.to_string(),
            business_type: "Web Development Agency".to_string(),
            address: None,
            phone: None,
            email: None,
            country: None,
            region: None,
            city: None,
            facebook_url: None,
            twitter_url: None,
            linkedin_url: None,
            instagram_url: None,
            youtube_url: None,
            google_analytics_id: None,
            google_tag_manager_id: None,
            google_search_console_verification: None,
            bing_webmaster_verification: None,
            facebook_pixel_id: None,
            default_robots_directive: crate::core::seo::DEFAULT_ROBOTS.to_string(),
            enable_breadcrumbs: true,
            enable_schema_markup: true,
            enable_open_graph: true,
            enable_twitter_cards: true,
            custom_head_tags: None,
            custom_footer_scripts: None,
        }
    }
}

impl GlobalSettingsDraft {
    fn validate(&self) -> Result<()> {
        if self.site_name.trim().is_empty() {
            return Err(Error::Validation {
                message: "Site name cannot be empty".to_string(),
            });
        }
        if self.business_name.trim().is_empty() {
            return Err(Error::Validation {
                message: "Business name cannot be empty".to_string(),
            });
        }
        Ok(())
    }

    fn apply(self, model: &mut global_seo_settings::ActiveModel) {
        model.site_name = Set(self.site_name.trim().to_string());
        model.site_tagline = Set(self.site_tagline);
        model.default_meta_description = Set(self.default_meta_description);
        model.business_name = Set(self.business_name.trim().to_string());
        model.business_type = Set(self.business_type);
        model.address = Set(self.address);
        model.phone = Set(self.phone);
        model.email = Set(self.email);
        model.country = Set(self.country);
        model.region = Set(self.region);
        model.city = Set(self.city);
        model.facebook_url = Set(self.facebook_url);
        model.twitter_url = Set(self.twitter_url);
        model.linkedin_url = Set(self.linkedin_url);
        model.instagram_url = Set(self.instagram_url);
        model.youtube_url = Set(self.youtube_url);
        model.google_analytics_id = Set(self.google_analytics_id);
        model.google_tag_manager_id = Set(self.google_tag_manager_id);
        model.google_search_console_verification = Set(self.google_search_console_verification);
        model.bing_webmaster_verification = Set(self.bing_webmaster_verification);
        model.facebook_pixel_id = Set(self.facebook_pixel_id);
        model.default_robots_directive = Set(self.default_robots_directive);
        model.enable_breadcrumbs = Set(self.enable_breadcrumbs);
        model.enable_schema_markup = Set(self.enable_schema_markup);
        model.enable_open_graph = Set(self.enable_open_graph);
        model.enable_twitter_cards = Set(self.enable_twitter_cards);
        model.custom_head_tags = Set(self.custom_head_tags);
        model.custom_footer_scripts = Set(self.custom_footer_scripts);
    }
}

/// Returns the settings row, or `None` when none has been created.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_global_settings<C>(db: &C) -> Result<Option<global_seo_settings::Model>>
where
    C: ConnectionTrait,
{
    GlobalSeoSettings::find()
        .order_by_asc(global_seo_settings::Column::Id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates the settings row.
///
/// # Errors
/// Returns an error if:
/// - A settings row already exists (`SingletonExists`); the existing row is untouched
/// - The site or business name is blank
/// - The database insert fails
#[instrument(skip(db, draft))]
pub async fn create_global_settings(
    db: &DatabaseConnection,
    draft: GlobalSettingsDraft,
) -> Result<global_seo_settings::Model> {
    draft.validate()?;

    if get_global_settings(db).await?.is_some() {
        return Err(Error::SingletonExists {
            entity: SETTINGS_ENTITY,
        });
    }

    let created = insert_settings_row(db, draft).await?;
    info!(site_name = %created.site_name, "Created global SEO settings");
    Ok(created)
}

/// Inserts the row under the fixed singleton key. A concurrent creator that got there
/// first makes the insert fail, which is reported as `SingletonExists`.
async fn insert_settings_row(
    db: &DatabaseConnection,
    draft: GlobalSettingsDraft,
) -> Result<global_seo_settings::Model> {
    let now = chrono::Utc::now().naive_utc();
    let mut settings = global_seo_settings::ActiveModel {
        id: Set(SINGLETON_ID),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    draft.apply(&mut settings);

    match settings.insert(db).await {
        Ok(created) => Ok(created),
        Err(e) => match get_global_settings(db).await {
            Ok(Some(_)) => Err(Error::SingletonExists {
                entity: SETTINGS_ENTITY,
            }),
            _ => Err(e.into()),
        },
    }
}

/// Replaces the editable fields of the existing settings row.
///
/// # Errors
/// Returns an error if no settings row exists, the draft is invalid, or the update fails.
#[instrument(skip(db, draft))]
pub async fn update_global_settings(
    db: &DatabaseConnection,
    draft: GlobalSettingsDraft,
) -> Result<global_seo_settings::Model> {
    draft.validate()?;

    let mut settings: global_seo_settings::ActiveModel = get_global_settings(db)
        .await?
        .ok_or_else(|| Error::Validation {
            message: "No SEO settings have been created yet".to_string(),
        })?
        .into();

    draft.apply(&mut settings);
    settings.updated_at = Set(chrono::Utc::now().naive_utc());
    settings.update(db).await.map_err(Into::into)
}

/// Loads the settings row, creating one with defaults if the table is empty.
///
/// Called once at start-up so the rest of the process can rely on the row existing.
///
/// # Errors
/// Returns an error if the database cannot be queried or written.
#[instrument(skip(db))]
pub async fn ensure_global_settings(
    db: &DatabaseConnection,
    site_name: &str,
) -> Result<global_seo_settings::Model> {
    if let Some(existing) = get_global_settings(db).await? {
        return Ok(existing);
    }

    info!("No global SEO settings found, creating defaults");
    let mut draft = GlobalSettingsDraft::default();
    if !site_name.trim().is_empty() {
        draft.site_name = site_name.to_string();
        draft.business_name = site_name.to_string();
    }
    create_global_settings(db, draft).await
}
