//! Entity module - Contains all SeaORM entity definitions for the database.
//! Configuration tables (settings, overrides, sitemap entries, robots) are owned by
//! this crate; content tables (projects, blog posts, services) are read-only here.

pub mod blog_post;
pub mod enums;
pub mod global_seo_settings;
pub mod manual_sitemap_entry;
pub mod page_seo_override;
pub mod project;
pub mod robots_configuration;
pub mod service;

// Re-export specific types to avoid conflicts
pub use blog_post::{Column as BlogPostColumn, Entity as BlogPost, Model as BlogPostModel};
pub use enums::{ChangeFrequency, PageType, SitemapPriority};
pub use global_seo_settings::{
    Column as GlobalSeoSettingsColumn, Entity as GlobalSeoSettings,
    Model as GlobalSeoSettingsModel,
};
pub use manual_sitemap_entry::{
    Column as ManualSitemapEntryColumn, Entity as ManualSitemapEntry,
    Model as ManualSitemapEntryModel,
};
pub use page_seo_override::{
    Column as PageSeoOverrideColumn, Entity as PageSeoOverride, Model as PageSeoOverrideModel,
};
pub use project::{Column as ProjectColumn, Entity as Project, Model as ProjectModel};
pub use robots_configuration::{
    Column as RobotsConfigurationColumn, Entity as RobotsConfiguration,
    Model as RobotsConfigurationModel,
};
pub use service::{Column as ServiceColumn, Entity as Service, Model as ServiceModel};
