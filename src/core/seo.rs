//! SEO metadata resolution.
//!
//! A [`MetadataRecord`] is assembled in layers, lowest precedence first:
//!
//! 1. hardcoded defaults
//! 2. the global settings row
//! 3. the active override for the page type
//! 4. the content object being rendered, if any
//!
//! Each layer only overwrites the fields it actually supplies. Loading the layers
//! ([`load_sources`]) is kept apart from merging them ([`build_metadata`]) so the merge
//! is a pure function of its inputs.

use crate::{
    core::{
        breadcrumbs::{self, BreadcrumbList},
        content::{ContentSource, ImageRef, non_blank},
        log_absent, log_fallback, overrides, settings,
        request::RequestContext,
    },
    entities::{PageType, global_seo_settings, page_seo_override},
    errors::Error,
};
use sea_orm::ConnectionTrait;
use serde::Serialize;
use serde_json::Value;
use tracing::{instrument, warn};

/// Site name used until settings exist
pub const DEFAULT_SITE_NAME: &str = "Digital Agency";
/// Page title used until an override supplies one
pub const DEFAULT_TITLE: &str = "Digital Agency - Professional Web Development Services";
/// Description used until settings or an override supply one
pub const DEFAULT_DESCRIPTION: &str =
    "Professional digital agency offering web development and digital solutions.";
/// Keywords used until an override supplies them
pub const DEFAULT_KEYWORDS: &str =
    "web development, digital agency, mobile apps, UI/UX design, digital marketing";
/// Robots directive used until settings or an override supply one
pub const DEFAULT_ROBOTS: &str = "index, follow";
/// `og:type` default
pub const DEFAULT_OG_TYPE: &str = "website";
/// `twitter:card` default
pub const DEFAULT_TWITTER_CARD: &str = "summary_large_image";

const DEFAULT_OG_IMAGE_PATH: &str = "/static/images/og-default.jpg";
const DEFAULT_TWITTER_IMAGE_PATH: &str = "/static/images/twitter-default.jpg";
const LOGO_PATH: &str = "/static/images/logo.png";

const META_DESCRIPTION_CHARS: usize = 160;
const SOCIAL_DESCRIPTION_CHARS: usize = 200;

/// Which optional outputs the site wants rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureToggles {
    /// Breadcrumb JSON-LD
    pub breadcrumbs: bool,
    /// Organization JSON-LD
    pub schema_markup: bool,
    /// Open Graph tags
    pub open_graph: bool,
    /// Twitter Card tags
    pub twitter_cards: bool,
}

impl Default for FeatureToggles {
    fn default() -> Self {
        Self {
            breadcrumbs: true,
            schema_markup: true,
            open_graph: true,
            twitter_cards: true,
        }
    }
}

/// Tracking and verification identifiers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct AnalyticsIds {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_analytics_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_tag_manager_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook_pixel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_search_console_verification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bing_webmaster_verification: Option<String>,
}

/// schema.org `ContactPoint`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPoint {
    #[serde(rename = "@type")]
    kind: &'static str,
    /// Phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    /// Always `"customer service"`
    #[serde(rename = "contactType")]
    pub contact_type: &'static str,
    /// Email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// schema.org `PostalAddress`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    kind: &'static str,
    /// Country
    #[serde(rename = "addressCountry", skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Region or state
    #[serde(rename = "addressRegion", skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// City
    #[serde(rename = "addressLocality", skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
}

/// schema.org `Organization` JSON-LD built from the settings row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrganizationSchema {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    /// Business name
    pub name: String,
    /// Site root
    pub url: String,
    /// Absolute logo URL
    pub logo: String,
    /// Site description
    pub description: String,
    /// Customer service contact
    #[serde(rename = "contactPoint")]
    pub contact_point: ContactPoint,
    /// Postal address
    pub address: PostalAddress,
    /// Social profiles; blank ones are left out
    #[serde(rename = "sameAs")]
    pub same_as: Vec<String>,
}

impl OrganizationSchema {
    fn from_settings(settings: &global_seo_settings::Model, request: &RequestContext) -> Self {
        let owned = |value: &Option<String>| non_blank(value.as_deref()).map(str::to_string);

        let same_as = [
            &settings.facebook_url,
            &settings.twitter_url,
            &settings.linkedin_url,
            &settings.instagram_url,
            &settings.youtube_url,
        ]
        .into_iter()
        .filter_map(owned)
        .collect();

        Self {
            context: "https://schema.org",
            kind: "Organization",
            name: settings.business_name.clone(),
            url: request.base_url().to_string(),
            logo: request.absolute(LOGO_PATH),
            description: non_blank(Some(settings.default_meta_description.as_str()))
                .unwrap_or(DEFAULT_DESCRIPTION)
                .to_string(),
            contact_point: ContactPoint {
                kind: "ContactPoint",
                telephone: owned(&settings.phone),
                contact_type: "customer service",
                email: owned(&settings.email),
            },
            address: PostalAddress {
                kind: "PostalAddress",
                country: owned(&settings.country),
                region: owned(&settings.region),
                locality: owned(&settings.city),
            },
            same_as,
        }
    }
}

/// Everything a page needs to render its `<head>` metadata.
///
/// The text and URL fields are always non-empty; the structured-data fields are
/// omitted rather than emitted empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct MetadataRecord {
    pub page_type: PageType,
    pub site_name: String,
    pub meta_title: String,
    pub meta_description: String,
    pub meta_keywords: String,
    pub canonical_url: String,
    pub robots: String,

    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub og_type: String,
    pub og_url: String,

    pub twitter_card: String,
    pub twitter_title: String,
    pub twitter_description: String,
    pub twitter_image: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_schema: Option<OrganizationSchema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breadcrumbs: Option<BreadcrumbList>,

    pub features: FeatureToggles,
    pub analytics: AnalyticsIds,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_head_tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_footer_scripts: Option<String>,
}

/// The stored layers the resolver merges
#[derive(Debug, Clone, Default)]
pub struct SeoSources {
    /// Global settings row
    pub settings: Option<global_seo_settings::Model>,
    /// Active override for the page type
    pub page_override: Option<page_seo_override::Model>,
}

/// Loads the stored layers for `page_type`.
///
/// A layer that cannot be loaded is logged with its fallback reason and treated as
/// absent.
#[instrument(skip(db))]
pub async fn load_sources<C>(db: &C, page_type: PageType) -> SeoSources
where
    C: ConnectionTrait,
{
    let settings = match settings::get_global_settings(db).await {
        Ok(Some(settings)) => Some(settings),
        Ok(None) => {
            log_absent("global_seo_settings");
            None
        }
        Err(e) => {
            log_fallback("global_seo_settings", &e);
            None
        }
    };

    let page_override = match overrides::get_page_override(db, page_type).await {
        Ok(Some(page_override)) => Some(page_override),
        Ok(None) => {
            log_absent("page_seo_overrides");
            None
        }
        Err(e) => {
            log_fallback("page_seo_overrides", &e);
            None
        }
    };

    SeoSources {
        settings,
        page_override,
    }
}

/// Loads the layers and merges them for one page.
pub async fn resolve<C>(
    db: &C,
    request: &RequestContext,
    page_type: PageType,
    content: Option<&dyn ContentSource>,
) -> MetadataRecord
where
    C: ConnectionTrait,
{
    let sources = load_sources(db, page_type).await;
    build_metadata(&sources, request, page_type, content)
}

/// Merges the layers into a complete record.
#[must_use]
pub fn build_metadata(
    sources: &SeoSources,
    request: &RequestContext,
    page_type: PageType,
    content: Option<&dyn ContentSource>,
) -> MetadataRecord {
    let mut draft = Draft::defaults(request);

    if let Some(settings) = &sources.settings {
        draft.apply_settings(settings);
    }
    if let Some(page_override) = &sources.page_override {
        draft.apply_override(page_override, request);
    }
    if let Some(content) = content {
        draft.apply_content(content, request);
    }

    let organization_schema = sources
        .settings
        .as_ref()
        .filter(|_| draft.features.schema_markup)
        .map(|settings| OrganizationSchema::from_settings(settings, request));

    let breadcrumbs = draft
        .features
        .breadcrumbs
        .then(|| breadcrumbs::build(request, None, None))
        .filter(|trail| !trail.is_empty());

    draft.finish(page_type, request, organization_schema, breadcrumbs)
}

/// Working state while layers are applied. Channel fields left as `None` fall back to
/// the meta title/description when the record is finished.
struct Draft {
    site_name: String,
    meta_title: String,
    meta_description: String,
    meta_keywords: String,
    canonical_url: Option<String>,
    robots: String,
    og_title: Option<String>,
    og_description: Option<String>,
    og_image: String,
    og_type: String,
    twitter_card: String,
    twitter_title: Option<String>,
    twitter_description: Option<String>,
    twitter_image: String,
    schema_data: Option<Value>,
    features: FeatureToggles,
    analytics: AnalyticsIds,
    custom_head_tags: Option<String>,
    custom_footer_scripts: Option<String>,
}

impl Draft {
    fn defaults(request: &RequestContext) -> Self {
        Self {
            site_name: DEFAULT_SITE_NAME.to_string(),
            meta_title: DEFAULT_TITLE.to_string(),
            meta_description: DEFAULT_DESCRIPTION.to_string(),
            meta_keywords: DEFAULT_KEYWORDS.to_string(),
            canonical_url: None,
            robots: DEFAULT_ROBOTS.to_string(),
            og_title: None,
            og_description: None,
            og_image: request.absolute(DEFAULT_OG_IMAGE_PATH),
            og_type: DEFAULT_OG_TYPE.to_string(),
            twitter_card: DEFAULT_TWITTER_CARD.to_string(),
            twitter_title: None,
            twitter_description: None,
            twitter_image: request.absolute(DEFAULT_TWITTER_IMAGE_PATH),
            schema_data: None,
            features: FeatureToggles::default(),
            analytics: AnalyticsIds::default(),
            custom_head_tags: None,
            custom_footer_scripts: None,
        }
    }

    fn apply_settings(&mut self, settings: &global_seo_settings::Model) {
        let owned = |value: &Option<String>| non_blank(value.as_deref()).map(str::to_string);

        set_if_present(&mut self.site_name, Some(&settings.site_name));
        set_if_present(
            &mut self.meta_description,
            Some(&settings.default_meta_description),
        );
        set_if_present(&mut self.robots, Some(&settings.default_robots_directive));

        self.features = FeatureToggles {
            breadcrumbs: settings.enable_breadcrumbs,
            schema_markup: settings.enable_schema_markup,
            open_graph: settings.enable_open_graph,
            twitter_cards: settings.enable_twitter_cards,
        };
        self.analytics = AnalyticsIds {
            google_analytics_id: owned(&settings.google_analytics_id),
            google_tag_manager_id: owned(&settings.google_tag_manager_id),
            facebook_pixel_id: owned(&settings.facebook_pixel_id),
            google_search_console_verification: owned(
                &settings.google_search_console_verification,
            ),
            bing_webmaster_verification: owned(&settings.bing_webmaster_verification),
        };
        self.custom_head_tags = owned(&settings.custom_head_tags);
        self.custom_footer_scripts = owned(&settings.custom_footer_scripts);
    }

    fn apply_override(&mut self, row: &page_seo_override::Model, request: &RequestContext) {
        let owned = |value: &Option<String>| non_blank(value.as_deref()).map(str::to_string);

        set_if_present(&mut self.meta_title, row.meta_title.as_ref());
        set_if_present(&mut self.meta_description, row.meta_description.as_ref());
        set_if_present(&mut self.meta_keywords, row.meta_keywords.as_ref());
        set_if_present(&mut self.og_type, row.og_type.as_ref());
        set_if_present(&mut self.twitter_card, row.twitter_card.as_ref());
        set_if_present(&mut self.robots, row.robots_directive.as_ref());

        if let Some(title) = owned(&row.og_title) {
            self.og_title = Some(title);
        }
        if let Some(description) = owned(&row.og_description) {
            self.og_description = Some(description);
        }
        if let Some(title) = owned(&row.twitter_title) {
            self.twitter_title = Some(title);
        }
        if let Some(description) = owned(&row.twitter_description) {
            self.twitter_description = Some(description);
        }

        if let Some(image) = ImageRef::pick(row.og_image_path.as_deref(), row.og_image_url.as_deref())
        {
            self.og_image = image.absolute_url(request);
        }
        if let Some(image) = ImageRef::pick(
            row.twitter_image_path.as_deref(),
            row.twitter_image_url.as_deref(),
        ) {
            self.twitter_image = image.absolute_url(request);
        }

        if let Some(canonical) = non_blank(row.canonical_url.as_deref()) {
            self.canonical_url = Some(request.absolute(canonical.trim()));
        }

        if let Some(raw) = non_blank(row.schema_data.as_deref()) {
            match parse_schema_data(raw) {
                Ok(value) => self.schema_data = Some(value),
                Err(e) => {
                    warn!(
                        reason = e.fallback_reason().as_str(),
                        page_type = row.page_type.as_str(),
                        error = %e,
                        "Ignoring unparsable structured data"
                    );
                }
            }
        }
    }

    fn apply_content(&mut self, content: &dyn ContentSource, request: &RequestContext) {
        if let Some(title) = content.as_titled().and_then(|t| t.title()) {
            self.meta_title = format!("{title} | {}", self.site_name);
            self.og_title = Some(title.to_string());
            self.twitter_title = Some(title.to_string());
        }

        if let Some(description) = content.as_describable().and_then(|d| d.description()) {
            self.meta_description = truncate_chars(description, META_DESCRIPTION_CHARS);
            let social = truncate_chars(description, SOCIAL_DESCRIPTION_CHARS);
            self.og_description = Some(social.clone());
            self.twitter_description = Some(social);
        }

        if let Some(image) = content.as_illustrated().and_then(|i| i.image()) {
            let url = image.absolute_url(request);
            self.og_image = url.clone();
            self.twitter_image = url;
        }
    }

    fn finish(
        self,
        page_type: PageType,
        request: &RequestContext,
        organization_schema: Option<OrganizationSchema>,
        breadcrumbs: Option<BreadcrumbList>,
    ) -> MetadataRecord {
        let current_url = request.current_url();
        MetadataRecord {
            page_type,
            og_title: self.og_title.unwrap_or_else(|| self.meta_title.clone()),
            twitter_title: self.twitter_title.unwrap_or_else(|| self.meta_title.clone()),
            og_description: self
                .og_description
                .unwrap_or_else(|| self.meta_description.clone()),
            twitter_description: self
                .twitter_description
                .unwrap_or_else(|| self.meta_description.clone()),
            canonical_url: self.canonical_url.unwrap_or_else(|| current_url.clone()),
            og_url: current_url,
            site_name: self.site_name,
            meta_title: self.meta_title,
            meta_description: self.meta_description,
            meta_keywords: self.meta_keywords,
            robots: self.robots,
            og_image: self.og_image,
            og_type: self.og_type,
            twitter_card: self.twitter_card,
            twitter_image: self.twitter_image,
            schema_data: self.schema_data,
            organization_schema,
            breadcrumbs,
            features: self.features,
            analytics: self.analytics,
            custom_head_tags: self.custom_head_tags,
            custom_footer_scripts: self.custom_footer_scripts,
        }
    }
}

/// Overwrites `target` with `value` unless the value is blank.
fn set_if_present(target: &mut String, value: Option<&String>) {
    if let Some(value) = non_blank(value.map(String::as_str)) {
        *target = value.trim().to_string();
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

fn parse_schema_data(raw: &str) -> Result<Value, Error> {
    serde_json::from_str(raw).map_err(|e| Error::MalformedData {
        field: "schema_data",
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::overrides::{PageOverrideDraft, create_page_override};
    use crate::core::settings::create_global_settings;
    use crate::errors::Result;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    fn request(path: &str) -> RequestContext {
        RequestContext::new("https", "acme.example", path)
    }

    fn assert_defaults(record: &MetadataRecord, current_url: &str) {
        assert_eq!(record.site_name, DEFAULT_SITE_NAME);
        assert_eq!(record.meta_title, DEFAULT_TITLE);
        assert_eq!(record.meta_description, DEFAULT_DESCRIPTION);
        assert_eq!(record.meta_keywords, DEFAULT_KEYWORDS);
        assert_eq!(record.robots, "index, follow");
        assert_eq!(record.og_title, DEFAULT_TITLE);
        assert_eq!(record.twitter_title, DEFAULT_TITLE);
        assert_eq!(record.og_description, DEFAULT_DESCRIPTION);
        assert_eq!(record.twitter_description, DEFAULT_DESCRIPTION);
        assert_eq!(
            record.og_image,
            "https://acme.example/static/images/og-default.jpg"
        );
        assert_eq!(
            record.twitter_image,
            "https://acme.example/static/images/twitter-default.jpg"
        );
        assert_eq!(record.og_type, "website");
        assert_eq!(record.twitter_card, "summary_large_image");
        assert_eq!(record.canonical_url, current_url);
        assert_eq!(record.og_url, current_url);
        assert!(record.organization_schema.is_none());
        assert!(record.schema_data.is_none());
    }

    #[tokio::test]
    async fn test_defaults_without_any_configuration() -> Result<()> {
        let db = setup_test_db().await?;

        for page_type in [PageType::Home, PageType::Careers, PageType::CaseStudies] {
            let record = resolve(&db, &request("/careers/"), page_type, None).await;
            assert_defaults(&record, "https://acme.example/careers/");
            assert_eq!(record.page_type, page_type);
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_store_unreachable_yields_defaults() -> Result<()> {
        init_test_tracing();
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_errors(vec![
                DbErr::Custom("connection refused".to_string()),
                DbErr::Custom("connection refused".to_string()),
            ])
            .into_connection();

        let record = resolve(&db, &request("/about/"), PageType::About, None).await;
        assert_defaults(&record, "https://acme.example/about/");
        Ok(())
    }

    #[tokio::test]
    async fn test_override_with_only_meta_title() -> Result<()> {
        let db = setup_test_db().await?;
        create_page_override(
            &db,
            PageType::Services,
            PageOverrideDraft {
                meta_title: Some("Our Services".to_string()),
                meta_description: Some("   ".to_string()),
                ..Default::default()
            },
        )
        .await?;

        let record = resolve(&db, &request("/services/"), PageType::Services, None).await;
        assert_eq!(record.meta_title, "Our Services");
        assert_eq!(record.og_title, "Our Services");
        assert_eq!(record.twitter_title, "Our Services");

        assert_eq!(record.meta_description, DEFAULT_DESCRIPTION);
        assert_eq!(record.og_description, DEFAULT_DESCRIPTION);
        assert_eq!(record.meta_keywords, DEFAULT_KEYWORDS);
        assert_eq!(record.robots, DEFAULT_ROBOTS);
        assert_eq!(record.og_type, DEFAULT_OG_TYPE);
        assert_eq!(record.canonical_url, "https://acme.example/services/");
        assert_eq!(
            record.og_image,
            "https://acme.example/static/images/og-default.jpg"
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_override_channels_and_images() -> Result<()> {
        let db = setup_test_db().await?;
        create_page_override(
            &db,
            PageType::Portfolio,
            PageOverrideDraft {
                meta_title: Some("Portfolio".to_string()),
                og_title: Some("See our work".to_string()),
                og_image_path: Some("/media/seo/og.png".to_string()),
                og_image_url: Some("https://cdn.example/ignored.png".to_string()),
                twitter_image_url: Some("https://cdn.example/tw.png".to_string()),
                canonical_url: Some("/portfolio/".to_string()),
                robots_directive: Some("noindex, follow".to_string()),
                schema_data: Some(r#"{"@type": "CollectionPage"}"#.to_string()),
                ..Default::default()
            },
        )
        .await?;

        let record = resolve(
            &db,
            &request("/projects/acme/"),
            PageType::Portfolio,
            None,
        )
        .await;
        assert_eq!(record.og_title, "See our work");
        assert_eq!(record.twitter_title, "Portfolio");
        assert_eq!(record.og_image, "https://acme.example/media/seo/og.png");
        assert_eq!(record.twitter_image, "https://cdn.example/tw.png");
        assert_eq!(record.canonical_url, "https://acme.example/portfolio/");
        assert_eq!(record.robots, "noindex, follow");
        assert_eq!(record.schema_data.unwrap()["@type"], "CollectionPage");
        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_schema_data_only_drops_that_field() -> Result<()> {
        init_test_tracing();
        let db = setup_test_db().await?;
        create_page_override(
            &db,
            PageType::Team,
            PageOverrideDraft {
                meta_title: Some("Meet the team".to_string()),
                schema_data: Some("{not json".to_string()),
                ..Default::default()
            },
        )
        .await?;

        let record = resolve(&db, &request("/team/"), PageType::Team, None).await;
        assert!(record.schema_data.is_none());
        assert_eq!(record.meta_title, "Meet the team");
        Ok(())
    }

    #[tokio::test]
    async fn test_content_title_uses_site_name() -> Result<()> {
        let db = setup_test_db().await?;
        create_global_settings(&db, acme_settings_draft()).await?;

        let mut post = sample_blog_post("widget-launch", true);
        post.title = "Widget Launch".to_string();
        post.excerpt = String::new();

        let record = resolve(
            &db,
            &request("/blog/widget-launch/"),
            PageType::Blog,
            Some(&post),
        )
        .await;

        assert_eq!(record.meta_title, "Widget Launch | Acme");
        assert_eq!(record.og_title, "Widget Launch");
        assert_eq!(record.twitter_title, "Widget Launch");
        // Page-level descriptions survive when the content has none
        assert_eq!(record.meta_description, "Acme builds websites.");
        assert_eq!(record.og_description, "Acme builds websites.");
        assert_eq!(record.twitter_description, "Acme builds websites.");
        Ok(())
    }

    #[test]
    fn test_description_truncation_boundary() {
        let mut project = sample_project("long", true);
        project.description = "a".repeat(160) + "b";
        assert_eq!(project.description.chars().count(), 161);

        let record = build_metadata(
            &SeoSources::default(),
            &request("/projects/long/"),
            PageType::Portfolio,
            Some(&project),
        );
        assert_eq!(record.meta_description, "a".repeat(160));
        assert_eq!(record.og_description, project.description);
        assert_eq!(record.twitter_description, project.description);
    }

    #[test]
    fn test_social_descriptions_truncated_at_200() {
        let mut project = sample_project("longer", true);
        project.description = "a".repeat(200) + "b";

        let record = build_metadata(
            &SeoSources::default(),
            &request("/projects/longer/"),
            PageType::Portfolio,
            Some(&project),
        );
        assert_eq!(record.meta_description, "a".repeat(160));
        assert_eq!(record.og_description, "a".repeat(200));
        assert_eq!(record.twitter_description, "a".repeat(200));
    }

    #[tokio::test]
    async fn test_stored_relative_image_url_keeps_default() -> Result<()> {
        let db = setup_test_db().await?;
        create_page_override(
            &db,
            PageType::About,
            PageOverrideDraft {
                meta_title: Some("About Acme".to_string()),
                ..Default::default()
            },
        )
        .await?;
        db.execute_unprepared(
            "UPDATE page_seo_overrides SET og_image_url = 'images/og.png', twitter_image_url = 'tw.png'",
        )
        .await?;

        let record = resolve(&db, &request("/about/"), PageType::About, None).await;
        assert_eq!(record.meta_title, "About Acme");
        assert_eq!(
            record.og_image,
            "https://acme.example/static/images/og-default.jpg"
        );
        assert_eq!(
            record.twitter_image,
            "https://acme.example/static/images/twitter-default.jpg"
        );
        Ok(())
    }

    #[test]
    fn test_absolute_looking_path_stays_on_site() {
        let record = build_metadata(
            &SeoSources::default(),
            &request("https://evil.example/x"),
            PageType::Home,
            None,
        );
        assert!(record.canonical_url.starts_with("https://acme.example/"));
        assert!(record.og_url.starts_with("https://acme.example/"));
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let text = "é".repeat(250);
        assert_eq!(truncate_chars(&text, 200).chars().count(), 200);
    }

    #[test]
    fn test_content_image_replaces_both_channels() {
        let mut project = sample_project("acme", true);
        project.image_path = Some("/media/projects/acme.png".to_string());

        let record = build_metadata(
            &SeoSources::default(),
            &request("/projects/acme/"),
            PageType::Portfolio,
            Some(&project),
        );
        assert_eq!(record.og_image, "https://acme.example/media/projects/acme.png");
        assert_eq!(record.twitter_image, record.og_image);
    }

    #[tokio::test]
    async fn test_organization_schema_from_settings() -> Result<()> {
        let db = setup_test_db().await?;
        let mut draft = acme_settings_draft();
        draft.phone = Some("+1 555 0100".to_string());
        draft.city = Some("Springfield".to_string());
        draft.facebook_url = Some("https://facebook.com/acme".to_string());
        draft.twitter_url = Some(String::new());
        draft.youtube_url = Some("https://youtube.com/@acme".to_string());
        draft.google_analytics_id = Some("G-TEST123".to_string());
        create_global_settings(&db, draft).await?;

        let record = resolve(&db, &request("/"), PageType::Home, None).await;
        let org = record.organization_schema.unwrap();
        assert_eq!(org.name, "Acme Ltd");
        assert_eq!(org.url, "https://acme.example");
        assert_eq!(org.logo, "https://acme.example/static/images/logo.png");
        assert_eq!(
            org.same_as,
            vec![
                "https://facebook.com/acme".to_string(),
                "https://youtube.com/@acme".to_string()
            ]
        );
        assert_eq!(org.contact_point.contact_type, "customer service");
        assert_eq!(org.address.locality.as_deref(), Some("Springfield"));

        assert_eq!(record.site_name, "Acme");
        assert_eq!(
            record.analytics.google_analytics_id.as_deref(),
            Some("G-TEST123")
        );

        let json = serde_json::to_value(&org)?;
        assert_eq!(json["@type"], "Organization");
        assert_eq!(json["contactPoint"]["@type"], "ContactPoint");
        assert!(json["contactPoint"].get("email").is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_disabled_features_skip_structured_data() -> Result<()> {
        let db = setup_test_db().await?;
        let mut draft = acme_settings_draft();
        draft.enable_schema_markup = false;
        draft.enable_breadcrumbs = false;
        create_global_settings(&db, draft).await?;

        let record = resolve(&db, &request("/blog/post/"), PageType::Blog, None).await;
        assert!(record.organization_schema.is_none());
        assert!(record.breadcrumbs.is_none());
        assert!(!record.features.schema_markup);
        Ok(())
    }

    #[tokio::test]
    async fn test_resolution_is_deterministic() -> Result<()> {
        let db = setup_test_db().await?;
        create_global_settings(&db, acme_settings_draft()).await?;

        let first = resolve(&db, &request("/about/"), PageType::About, None).await;
        let second = resolve(&db, &request("/about/"), PageType::About, None).await;
        assert_eq!(
            serde_json::to_string(&first)?,
            serde_json::to_string(&second)?
        );
        Ok(())
    }
}
