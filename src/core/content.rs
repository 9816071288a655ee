//! Content capabilities consumed by the resolver and the sitemap.
//!
//! Content types declare what they can offer by implementing [`Titled`],
//! [`Describable`] and [`Illustrated`], and advertise those implementations through
//! [`ContentSource`]. The SEO code only ever sees `&dyn ContentSource`.

use crate::core::request::{RequestContext, is_absolute_url};
use crate::entities::{BlogPost, Project, Service, blog_post, project, service};
use crate::errors::Result;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

/// Content with a human-readable title or name
pub trait Titled {
    /// The title, or `None` when it is blank.
    fn title(&self) -> Option<&str>;
}

/// Content with a description or excerpt
pub trait Describable {
    /// The description, or `None` when it is blank.
    fn description(&self) -> Option<&str>;
}

/// Content with a representative image
pub trait Illustrated {
    /// The image, preferring an uploaded file over an external URL.
    fn image(&self) -> Option<ImageRef<'_>>;
}

/// Where an image lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRef<'a> {
    /// Uploaded file, stored as a media path relative to the site root
    Uploaded(&'a str),
    /// Image hosted elsewhere
    External(&'a str),
}

impl ImageRef<'_> {
    /// Picks the uploaded path if present, else the external URL.
    ///
    /// An external value that is not an absolute `http(s)` URL is ignored, so the
    /// caller keeps whatever image it already had.
    #[must_use]
    pub fn pick<'a>(uploaded: Option<&'a str>, external: Option<&'a str>) -> Option<ImageRef<'a>> {
        non_blank(uploaded).map(ImageRef::Uploaded).or_else(|| {
            non_blank(external)
                .map(str::trim)
                .filter(|url| is_absolute_url(url))
                .map(ImageRef::External)
        })
    }

    /// Absolute URL of the image for the given request.
    #[must_use]
    pub fn absolute_url(&self, request: &RequestContext) -> String {
        match self {
            ImageRef::Uploaded(path) => request.absolute(path),
            ImageRef::External(url) => (*url).to_string(),
        }
    }
}

/// Capability query surface for content objects.
///
/// Each accessor returns `Some(self)` when the type supports the capability.
/// Resolutions hold a `&dyn ContentSource` across awaits, hence the `Sync` bound.
pub trait ContentSource: Sync {
    /// Title capability
    fn as_titled(&self) -> Option<&dyn Titled> {
        None
    }

    /// Description capability
    fn as_describable(&self) -> Option<&dyn Describable> {
        None
    }

    /// Image capability
    fn as_illustrated(&self) -> Option<&dyn Illustrated> {
        None
    }
}

/// Treats empty and whitespace-only strings as absent.
#[must_use]
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

impl Titled for project::Model {
    fn title(&self) -> Option<&str> {
        non_blank(Some(self.title.as_str()))
    }
}

impl Describable for project::Model {
    fn description(&self) -> Option<&str> {
        non_blank(Some(self.description.as_str()))
    }
}

impl Illustrated for project::Model {
    fn image(&self) -> Option<ImageRef<'_>> {
        ImageRef::pick(self.image_path.as_deref(), self.image_url.as_deref())
    }
}

impl ContentSource for project::Model {
    fn as_titled(&self) -> Option<&dyn Titled> {
        Some(self)
    }

    fn as_describable(&self) -> Option<&dyn Describable> {
        Some(self)
    }

    fn as_illustrated(&self) -> Option<&dyn Illustrated> {
        Some(self)
    }
}

impl Titled for blog_post::Model {
    fn title(&self) -> Option<&str> {
        non_blank(Some(self.title.as_str()))
    }
}

// Posts are described by their excerpt, never the full body.
impl Describable for blog_post::Model {
    fn description(&self) -> Option<&str> {
        non_blank(Some(self.excerpt.as_str()))
    }
}

impl Illustrated for blog_post::Model {
    fn image(&self) -> Option<ImageRef<'_>> {
        ImageRef::pick(
            self.featured_image_path.as_deref(),
            self.featured_image_url.as_deref(),
        )
    }
}

impl ContentSource for blog_post::Model {
    fn as_titled(&self) -> Option<&dyn Titled> {
        Some(self)
    }

    fn as_describable(&self) -> Option<&dyn Describable> {
        Some(self)
    }

    fn as_illustrated(&self) -> Option<&dyn Illustrated> {
        Some(self)
    }
}

impl Titled for service::Model {
    fn title(&self) -> Option<&str> {
        non_blank(Some(self.name.as_str()))
    }
}

impl Describable for service::Model {
    fn description(&self) -> Option<&str> {
        non_blank(Some(self.description.as_str()))
    }
}

impl ContentSource for service::Model {
    fn as_titled(&self) -> Option<&dyn Titled> {
        Some(self)
    }

    fn as_describable(&self) -> Option<&dyn Describable> {
        Some(self)
    }
}

/// Finds a project by slug.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn find_project<C>(db: &C, slug: &str) -> Result<Option<project::Model>>
where
    C: ConnectionTrait,
{
    Project::find()
        .filter(project::Column::Slug.eq(slug))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a published blog post by slug.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn find_published_post<C>(db: &C, slug: &str) -> Result<Option<blog_post::Model>>
where
    C: ConnectionTrait,
{
    BlogPost::find()
        .filter(blog_post::Column::Slug.eq(slug))
        .filter(blog_post::Column::IsPublished.eq(true))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds an active service by slug.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn find_active_service<C>(db: &C, slug: &str) -> Result<Option<service::Model>>
where
    C: ConnectionTrait,
{
    Service::find()
        .filter(service::Column::Slug.eq(slug))
        .filter(service::Column::IsActive.eq(true))
        .one(db)
        .await
        .map_err(Into::into)
}
