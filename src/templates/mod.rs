//! Built-in site templates using Tera template engine
//!
//! All templates are embedded directly in the binary.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::helpers::{html_escape, strip_html};
use crate::render::{PageMeta, TrustedHtml};

/// Template renderer with the embedded site theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Escape CMS text, but leave `/` alone so hrefs stay readable.
        // Rich text bypasses escaping only through `TrustedHtml | safe`.
        tera.set_escape_fn(html_escape);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("site/layout.html")),
            ("article.html", include_str!("site/article.html")),
            ("lessons.html", include_str!("site/lessons.html")),
            ("message.html", include_str!("site/message.html")),
            // Partials
            ("partials/head.html", include_str!("site/partials/head.html")),
            (
                "partials/category_select.html",
                include_str!("site/partials/category_select.html"),
            ),
            ("partials/pager.html", include_str!("site/partials/pager.html")),
        ])?;

        tera.register_filter("truncate_chars", truncate_chars_filter);
        tera.register_filter("strip_html", strip_html_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }

    /// Context shared by every page: site data, metadata and footer year
    pub fn base_context(&self, config: &SiteConfig, meta: &PageMeta) -> Context {
        let mut context = Context::new();
        context.insert(
            "site",
            &SiteData {
                title: config.title.clone(),
                description: config.description.clone(),
            },
        );
        context.insert("meta", meta);
        context.insert("current_year", &chrono::Utc::now().format("%Y").to_string());
        context
    }
}

/// Tera filter: truncate by character count
fn truncate_chars_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("truncate_chars", "value", String, value);
    let length = match args.get("length") {
        Some(val) => tera::try_get_value!("truncate_chars", "length", usize, val),
        None => 150,
    };
    let omission = match args.get("omission") {
        Some(val) => tera::try_get_value!("truncate_chars", "omission", String, val),
        None => "...".to_string(),
    };

    if s.chars().count() <= length {
        Ok(tera::Value::String(s))
    } else {
        let truncated: String = s.chars().take(length).collect();
        Ok(tera::Value::String(format!(
            "{}{}",
            truncated.trim_end(),
            omission
        )))
    }
}

/// Tera filter: drop markup from CMS text
fn strip_html_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("strip_html", "value", String, value);
    Ok(tera::Value::String(strip_html(&s)))
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageData {
    pub src: String,
    pub alt: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// A single record page (about, blog post, lesson)
#[derive(Debug, Clone, Serialize)]
pub struct ArticleData {
    pub content: TrustedHtml,
    pub published: Option<String>,
    pub categories: Vec<String>,
}

/// One lesson card in the grid
#[derive(Debug, Clone, Serialize)]
pub struct CardData {
    pub title: String,
    pub href: String,
    pub description: String,
    pub image: Option<ImageData>,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryOption {
    pub name: String,
    pub selected: bool,
}

/// The category filter form
#[derive(Debug, Clone, Serialize)]
pub struct FilterData {
    pub action: String,
    pub limit: u32,
    pub options: Vec<CategoryOption>,
}
