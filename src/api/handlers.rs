//! Request handlers.
//!
//! Each handler builds a [`RequestContext`] from the configured site and calls the core
//! explicitly; nothing is attached to the request behind the scenes.

use super::{
    AppState,
    error::{ApiError, ApiResult},
    xml,
};
use crate::{
    core::{
        breadcrumbs::{self, BreadcrumbList},
        content::{self, ContentSource},
        health,
        request::RequestContext,
        robots,
        seo::{self, MetadataRecord},
        sitemap,
    },
    entities::PageType,
    errors::Error,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::error;

/// `GET /sitemap.xml`
pub async fn sitemap_xml(State(state): State<AppState>) -> impl IntoResponse {
    let request = RequestContext::for_site(&state.site, "/sitemap.xml");
    let (db, request) = (&*state.db, &request);
    let body = state
        .sitemap_cache
        .get_or_refresh(move || async move {
            let entries = sitemap::build(db, request).await;
            xml::render_sitemap(&entries).unwrap_or_else(|e| {
                error!(error = %e, "Sitemap rendering failed");
                xml::minimal_sitemap(request.base_url())
            })
        })
        .await;

    ([(header::CONTENT_TYPE, "text/xml; charset=utf-8")], body)
}

/// `GET /robots.txt`
pub async fn robots_txt(State(state): State<AppState>) -> impl IntoResponse {
    let request = RequestContext::for_site(&state.site, "/robots.txt");
    let (db, request) = (&*state.db, &request);
    let body = state
        .robots_cache
        .get_or_refresh(move || robots::resolve(db, request))
        .await;

    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body)
}

/// `GET /api/seo/check/`
pub async fn seo_check(State(state): State<AppState>) -> impl IntoResponse {
    let content_type = [(header::CONTENT_TYPE, "text/plain; charset=utf-8")];
    match health::check(&*state.db).await {
        Ok(report) => (StatusCode::OK, content_type, report.render_plain()),
        Err(e) => {
            error!(error = %e, "SEO health check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                content_type,
                format!("SEO Check Error: {e}"),
            )
        }
    }
}

/// Query of `GET /api/seo/meta`
#[derive(Debug, Deserialize)]
pub struct MetaQuery {
    /// Page type identifier; derived from `path` when absent
    pub page_type: Option<String>,
    /// Path of the page being rendered, `/` by default
    pub path: Option<String>,
}

/// `GET /api/seo/meta`
pub async fn page_meta(
    State(state): State<AppState>,
    Query(query): Query<MetaQuery>,
) -> ApiResult<Json<MetadataRecord>> {
    let path = query.path.as_deref().unwrap_or("/");
    if !path.starts_with('/') {
        return Err(Error::Validation {
            message: format!("Path '{path}' must start with '/'"),
        }
        .into());
    }
    let page_type = match query.page_type.as_deref() {
        Some(raw) => raw.parse::<PageType>()?,
        None => PageType::from_path(path),
    };

    let request = RequestContext::for_site(&state.site, path);
    Ok(Json(seo::resolve(&*state.db, &request, page_type, None).await))
}

async fn content_meta(
    state: &AppState,
    path: String,
    page_type: PageType,
    content: &dyn ContentSource,
) -> Json<MetadataRecord> {
    let request = RequestContext::for_site(&state.site, &path);
    Json(seo::resolve(&*state.db, &request, page_type, Some(content)).await)
}

/// `GET /api/seo/meta/projects/:slug`
pub async fn project_meta(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<MetadataRecord>> {
    let project = content::find_project(&*state.db, &slug)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Project '{slug}' not found")))?;
    let path = format!("/projects/{slug}/");
    Ok(content_meta(&state, path, PageType::Portfolio, &project).await)
}

/// `GET /api/seo/meta/blog/:slug`
pub async fn post_meta(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<MetadataRecord>> {
    let post = content::find_published_post(&*state.db, &slug)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Blog post '{slug}' not found")))?;
    let path = format!("/blog/{slug}/");
    Ok(content_meta(&state, path, PageType::Blog, &post).await)
}

/// `GET /api/seo/meta/services/:slug`
pub async fn service_meta(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<MetadataRecord>> {
    let service = content::find_active_service(&*state.db, &slug)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Service '{slug}' not found")))?;
    let path = format!("/services/{slug}/");
    Ok(content_meta(&state, path, PageType::Services, &service).await)
}

/// Query of `GET /api/seo/breadcrumbs`
#[derive(Debug, Deserialize)]
pub struct BreadcrumbQuery {
    /// Path of the page being rendered
    pub path: Option<String>,
    /// Title of the current page, appended as the last crumb
    pub title: Option<String>,
}

/// `GET /api/seo/breadcrumbs`
pub async fn breadcrumb_trail(
    State(state): State<AppState>,
    Query(query): Query<BreadcrumbQuery>,
) -> Json<BreadcrumbList> {
    let request = RequestContext::for_site(&state.site, query.path.as_deref().unwrap_or("/"));
    Json(breadcrumbs::build(&request, query.title.as_deref(), None))
}
