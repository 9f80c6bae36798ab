//! Page metadata and Open Graph tags

use serde::Serialize;

use crate::content::ContentRecord;
use crate::helpers::{asset_url, excerpt};

/// Length of descriptions derived from page content
const DESCRIPTION_LENGTH: usize = 160;

/// Open Graph properties
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub og_type: String,
    pub images: Vec<String>,
}

/// `<title>`, description and Open Graph data for one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: Option<String>,
    pub open_graph: Option<OpenGraph>,
}

impl PageMeta {
    /// Title only
    pub fn fixed(title: &str) -> Self {
        Self {
            title: title.to_string(),
            description: None,
            open_graph: None,
        }
    }

    /// Static article page, e.g. About
    pub fn article(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: Some(description.to_string()),
            open_graph: Some(OpenGraph {
                title: title.to_string(),
                description: Some(description.to_string()),
                og_type: "article".to_string(),
                images: Vec::new(),
            }),
        }
    }

    /// Metadata for a CMS record; cover URLs are resolved against `origin`
    pub fn for_record(record: &ContentRecord, origin: &str) -> Self {
        let description = if record.description.trim().is_empty() {
            Some(excerpt(record.content.as_str(), DESCRIPTION_LENGTH)).filter(|d| !d.is_empty())
        } else {
            Some(record.description.clone())
        };
        let images = record
            .cover
            .iter()
            .map(|cover| asset_url(origin, &cover.url))
            .collect();

        Self {
            title: record.title.clone(),
            description: description.clone(),
            open_graph: Some(OpenGraph {
                title: record.title.clone(),
                description,
                og_type: "article".to_string(),
                images,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::CoverImage;
    use crate::render::TrustedHtml;

    fn record() -> ContentRecord {
        ContentRecord {
            id: 1,
            title: "Ownership".to_string(),
            slug: "ownership".to_string(),
            description: "Moves and borrows".to_string(),
            content: TrustedHtml::from_cms("<p>Body</p>"),
            cover: Some(CoverImage {
                url: "/uploads/own.png".to_string(),
                width: Some(800),
                height: Some(600),
                alternative_text: None,
            }),
            ..ContentRecord::default()
        }
    }

    #[test]
    fn test_for_record() {
        let meta = PageMeta::for_record(&record(), "http://cms:1337");
        assert_eq!(meta.title, "Ownership");
        assert_eq!(meta.description.as_deref(), Some("Moves and borrows"));
        let og = meta.open_graph.unwrap();
        assert_eq!(og.og_type, "article");
        assert_eq!(og.images, vec!["http://cms:1337/uploads/own.png".to_string()]);
    }

    #[test]
    fn test_description_falls_back_to_content() {
        let mut record = record();
        record.description = String::new();
        record.cover = None;
        let meta = PageMeta::for_record(&record, "http://cms:1337");
        assert_eq!(meta.description.as_deref(), Some("Body"));
        assert!(meta.open_graph.unwrap().images.is_empty());
    }

    #[test]
    fn test_fixed_and_article() {
        assert_eq!(PageMeta::fixed("Blog not found").title, "Blog not found");
        assert!(PageMeta::fixed("Lessons").open_graph.is_none());

        let about = PageMeta::article("About", "About the site");
        assert_eq!(about.open_graph.unwrap().title, "About");
    }
}
