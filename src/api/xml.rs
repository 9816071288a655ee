//! Sitemap protocol XML rendering.

use crate::{
    core::sitemap::SitemapEntry,
    errors::{Error, Result},
};
use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const IMAGE_NS: &str = "http://www.google.com/schemas/sitemap-image/1.1";

fn render_error(e: impl std::fmt::Display) -> Error {
    Error::Render {
        message: e.to_string(),
    }
}

fn write_text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<()> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(render_error)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(render_error)?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(render_error)?;
    Ok(())
}

/// Renders the entries as a `<urlset>` document.
///
/// # Errors
/// Returns `Error::Render` if the writer fails.
pub fn render_sitemap(entries: &[SitemapEntry]) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(render_error)?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NS));
    urlset.push_attribute(("xmlns:image", IMAGE_NS));
    writer
        .write_event(Event::Start(urlset))
        .map_err(render_error)?;

    for entry in entries {
        writer
            .write_event(Event::Start(BytesStart::new("url")))
            .map_err(render_error)?;

        write_text_element(&mut writer, "loc", &entry.url)?;
        if let Some(last_modified) = entry.last_modified {
            let date = last_modified.format("%Y-%m-%d").to_string();
            write_text_element(&mut writer, "lastmod", &date)?;
        }
        write_text_element(&mut writer, "changefreq", entry.change_frequency.as_str())?;
        write_text_element(&mut writer, "priority", entry.priority.as_str())?;

        if let Some(image) = &entry.image {
            writer
                .write_event(Event::Start(BytesStart::new("image:image")))
                .map_err(render_error)?;
            write_text_element(&mut writer, "image:loc", &image.loc)?;
            if let Some(title) = &image.title {
                write_text_element(&mut writer, "image:title", title)?;
            }
            writer
                .write_event(Event::End(BytesEnd::new("image:image")))
                .map_err(render_error)?;
        }

        writer
            .write_event(Event::End(BytesEnd::new("url")))
            .map_err(render_error)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("urlset")))
        .map_err(render_error)?;

    String::from_utf8(writer.into_inner()).map_err(render_error)
}

/// Root-only document used if rendering the real sitemap fails.
#[must_use]
pub fn minimal_sitemap(base_url: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?><urlset xmlns=\"{SITEMAP_NS}\"><url><loc>{base_url}/</loc><changefreq>daily</changefreq><priority>1.0</priority></url></urlset>"
    )
}
