//! Page type identifiers and the path → page type mapping.

use crate::entities::PageType;
use crate::errors::{Error, Result};
use std::str::FromStr;

impl PageType {
    /// Kebab-case identifier, as stored in the database and accepted by the API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Services => "services",
            Self::Portfolio => "portfolio",
            Self::Team => "team",
            Self::Contact => "contact",
            Self::Blog => "blog",
            Self::Careers => "careers",
            Self::Help => "help",
            Self::CaseStudies => "case-studies",
            Self::Privacy => "privacy",
            Self::Terms => "terms",
        }
    }

    /// Maps a request path to the page type whose override should apply.
    ///
    /// Matching is by prefix of the first path segment; anything unrecognised is
    /// treated as the home page.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_matches('/');
        let starts = |prefix: &str| path.starts_with(prefix);

        if path.is_empty() {
            Self::Home
        } else if starts("about") {
            Self::About
        } else if starts("services") {
            Self::Services
        } else if starts("portfolio") || starts("projects") {
            Self::Portfolio
        } else if starts("team") {
            Self::Team
        } else if starts("contact") {
            Self::Contact
        } else if starts("blog") {
            Self::Blog
        } else if starts("careers") || starts("jobs") {
            Self::Careers
        } else if starts("case-studies") {
            Self::CaseStudies
        } else if starts("help") {
            Self::Help
        } else if starts("privacy") {
            Self::Privacy
        } else if starts("terms") {
            Self::Terms
        } else {
            Self::Home
        }
    }
}

impl FromStr for PageType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "home" => Ok(Self::Home),
            "about" => Ok(Self::About),
            "services" => Ok(Self::Services),
            "portfolio" => Ok(Self::Portfolio),
            "team" => Ok(Self::Team),
            "contact" => Ok(Self::Contact),
            "blog" => Ok(Self::Blog),
            "careers" => Ok(Self::Careers),
            "help" => Ok(Self::Help),
            "case-studies" => Ok(Self::CaseStudies),
            "privacy" => Ok(Self::Privacy),
            "terms" => Ok(Self::Terms),
            other => Err(Error::Validation {
                message: format!("Unknown page type '{other}'"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use sea_orm::{ActiveEnum, Iterable};

    #[test]
    fn test_from_path() {
        assert_eq!(PageType::from_path("/"), PageType::Home);
        assert_eq!(PageType::from_path(""), PageType::Home);
        assert_eq!(PageType::from_path("/about-us/"), PageType::About);
        assert_eq!(PageType::from_path("/projects/acme/"), PageType::Portfolio);
        assert_eq!(PageType::from_path("/jobs/42"), PageType::Careers);
        assert_eq!(PageType::from_path("/case-studies/x"), PageType::CaseStudies);
        assert_eq!(PageType::from_path("/terms"), PageType::Terms);
        assert_eq!(PageType::from_path("/unknown/page"), PageType::Home);
    }

    #[test]
    fn test_round_trip_through_str() {
        for page_type in PageType::iter() {
            assert_eq!(page_type.as_str().parse::<PageType>().unwrap(), page_type);
            assert_eq!(page_type.to_value(), page_type.as_str());
        }
    }

    #[test]
    fn test_unknown_page_type_is_validation_error() {
        let result = "landing".parse::<PageType>();
        assert!(matches!(result, Err(Error::Validation { .. })));
    }
}
