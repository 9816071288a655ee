//! Breadcrumb trail as schema.org `BreadcrumbList` JSON-LD.

use crate::core::request::RequestContext;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Caller-supplied breadcrumb, used verbatim in place of the path-derived trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbLink {
    /// Label
    pub name: String,
    /// Link target; rendered as `#` when absent
    pub url: Option<String>,
}

/// One `ListItem` of the trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    kind: &'static str,
    /// 1-based position, `Home` is always 1
    pub position: usize,
    /// Label
    pub name: String,
    /// Absolute link
    #[serde(rename = "item")]
    pub url: String,
}

impl ListItem {
    fn new(position: usize, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: "ListItem",
            position,
            name: name.into(),
            url: url.into(),
        }
    }
}

/// The full trail, serialisable straight into a `<script type="application/ld+json">` block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreadcrumbList {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    /// Trail entries in order
    #[serde(rename = "itemListElement")]
    pub items: Vec<ListItem>,
}

impl BreadcrumbList {
    fn new(items: Vec<ListItem>) -> Self {
        Self {
            context: "https://schema.org",
            kind: "BreadcrumbList",
            items,
        }
    }

    /// An empty trail
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// True when the trail has no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Builds the breadcrumb trail for the request.
///
/// `Home` always comes first. With `custom_items` the trail is `Home` followed by those
/// items in order. Otherwise every path segment except the last becomes an entry,
/// labelled in title case and linked to the cumulative path; `page_title` then adds a
/// final entry linked to the current URL.
///
/// A path that is not rooted at `/` yields an empty trail.
#[must_use]
pub fn build(
    request: &RequestContext,
    page_title: Option<&str>,
    custom_items: Option<&[BreadcrumbLink]>,
) -> BreadcrumbList {
    let path = request.path();
    if !path.starts_with('/') {
        debug!(path, "Not building breadcrumbs for a relative path");
        return BreadcrumbList::empty();
    }

    let base_url = request.base_url();
    let mut items = vec![ListItem::new(1, "Home", base_url)];

    if let Some(custom) = custom_items {
        for link in custom {
            let url = link.url.clone().unwrap_or_else(|| "#".to_string());
            items.push(ListItem::new(items.len() + 1, link.name.clone(), url));
        }
        return BreadcrumbList::new(items);
    }

    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    let mut cumulative = base_url.to_string();
    if let Some((_, parents)) = segments.split_last() {
        for segment in parents.iter().filter(|s| !s.is_empty()) {
            cumulative.push('/');
            cumulative.push_str(segment);
            items.push(ListItem::new(
                items.len() + 1,
                title_case(&segment.replace('-', " ")),
                cumulative.clone(),
            ));
        }
    }

    if let Some(title) = page_title.filter(|t| !t.trim().is_empty()) {
        items.push(ListItem::new(items.len() + 1, title, request.current_url()));
    }

    BreadcrumbList::new(items)
}

/// Upper-cases the first letter of every run of letters and lower-cases the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_is_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            out.push(c);
            previous_is_letter = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(path: &str) -> RequestContext {
        RequestContext::new("https", "acme.example", path)
    }

    #[test]
    fn test_service_page_trail() {
        let trail = build(
            &request("/services/web-development"),
            Some("Web Development"),
            None,
        );

        let names: Vec<&str> = trail.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Home", "Services", "Web Development"]);

        let positions: Vec<usize> = trail.items.iter().map(|i| i.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);

        assert_eq!(trail.items[0].url, "https://acme.example");
        assert_eq!(trail.items[1].url, "https://acme.example/services");
        assert_eq!(
            trail.items[2].url,
            "https://acme.example/services/web-development"
        );
    }

    #[test]
    fn test_nested_segments_are_title_cased() {
        let trail = build(&request("/blog/case-studies/acme-rebrand/"), None, None);
        let names: Vec<&str> = trail.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Home", "Blog", "Case Studies"]);
        assert_eq!(
            trail.items[2].url,
            "https://acme.example/blog/case-studies"
        );
    }

    #[test]
    fn test_custom_items_replace_path_trail() {
        let custom = vec![
            BreadcrumbLink {
                name: "Portfolio".to_string(),
                url: Some("https://acme.example/portfolio".to_string()),
            },
            BreadcrumbLink {
                name: "Acme Rebrand".to_string(),
                url: None,
            },
        ];
        let trail = build(&request("/projects/acme/"), Some("Ignored"), Some(&custom));

        assert_eq!(trail.items.len(), 3);
        assert_eq!(trail.items[1].name, "Portfolio");
        assert_eq!(trail.items[1].position, 2);
        assert_eq!(trail.items[2].url, "#");
        assert_eq!(trail.items[2].position, 3);
    }

    #[test]
    fn test_root_without_title_is_home_only() {
        let trail = build(&request("/"), None, None);
        assert_eq!(trail.items.len(), 1);
        assert_eq!(trail.items[0].name, "Home");
    }

    #[test]
    fn test_relative_path_gives_empty_trail() {
        let trail = build(&request("services/web"), Some("Web"), None);
        assert!(trail.is_empty());
    }

    #[test]
    fn test_json_ld_shape() {
        let trail = build(&request("/about/"), Some("About Us"), None);
        let json = serde_json::to_value(&trail).unwrap_or_default();
        assert_eq!(json["@context"], "https://schema.org");
        assert_eq!(json["@type"], "BreadcrumbList");
        assert_eq!(json["itemListElement"][0]["@type"], "ListItem");
        assert_eq!(json["itemListElement"][1]["item"], "https://acme.example/about/");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("web development"), "Web Development");
        assert_eq!(title_case("UI design"), "Ui Design");
    }
}
