//! Record models

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::render::TrustedHtml;

/// A blog post, lesson or single page as published in the CMS
///
/// Snapshot of the CMS at fetch time. Attributes the query did not ask for
/// are left at their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContentRecord {
    pub id: u64,

    pub title: String,

    /// Unique within the content type; the only identifier used in URLs
    pub slug: String,

    pub description: String,

    /// Rich text, pre-rendered to HTML by the CMS
    pub content: TrustedHtml,

    pub cover: Option<CoverImage>,

    pub categories: Vec<CategoryRef>,

    pub published_at: Option<DateTime<Utc>>,
}

impl ContentRecord {
    /// Category names in CMS order
    pub fn category_names(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }
}

/// Uploaded cover image; `url` is usually relative to the backend origin
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoverImage {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub alternative_text: Option<String>,
}

/// A category, used as filter token and display tag
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryRef {
    pub name: String,
}

impl CategoryRef {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// Case-insensitive equality, the rule the CMS filter applies
    pub fn matches(&self, category: &str) -> bool {
        !category.is_empty() && self.name.to_lowercase() == category.to_lowercase()
    }
}
