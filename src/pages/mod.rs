//! Page rendering: render state + metadata + template = HTML document
//!
//! Each page module fetches what it needs through [`crate::content::Cms`],
//! reduces the result to a [`crate::render::RenderState`] and renders the matching
//! template. Fetch failures never escape as errors; only template failures
//! do.

pub mod about;
pub mod blog;
pub mod lessons;

use anyhow::Result;

use crate::content::ContentRecord;
use crate::helpers::{asset_url, decode_path_segment, decode_query};
use crate::render::{error_message, PageMeta, RenderKind};
use crate::templates::{ArticleData, ImageData};
use crate::Site;

/// A rendered page
#[derive(Debug, Clone)]
pub struct Page {
    pub kind: RenderKind,
    pub html: String,
}

impl Page {
    pub fn is_not_found(&self) -> bool {
        self.kind == RenderKind::NotFound
    }
}

/// Render a plain message page (errors, empty lists, missing records)
pub(crate) fn message_page(
    site: &Site,
    kind: RenderKind,
    meta: &PageMeta,
    message: &str,
) -> Result<Page> {
    let mut context = site.renderer.base_context(&site.config, meta);
    context.insert("message", message);
    Ok(Page {
        kind,
        html: site.renderer.render("message.html", &context)?,
    })
}

/// Render a single CMS record, injecting its rich text
pub(crate) fn article_page(site: &Site, meta: &PageMeta, article: &ArticleData) -> Result<Page> {
    let mut context = site.renderer.base_context(&site.config, meta);
    context.insert("article", article);
    Ok(Page {
        kind: RenderKind::Populated,
        html: site.renderer.render("article.html", &context)?,
    })
}

/// Generic error page; the failure detail is only logged
pub(crate) fn error_page(site: &Site, what: &str) -> Result<Page> {
    message_page(
        site,
        RenderKind::Error,
        &PageMeta::fixed("Error"),
        &error_message(what),
    )
}

/// Page for a keyed lookup that found nothing
pub(crate) fn not_found_page(site: &Site, title: &str) -> Result<Page> {
    message_page(site, RenderKind::NotFound, &PageMeta::fixed(title), title)
}

/// Fallback for unknown routes
pub fn not_found(site: &Site) -> Result<Page> {
    not_found_page(site, "Page not found")
}

pub(crate) fn cover_image(record: &ContentRecord, origin: &str) -> Option<ImageData> {
    record.cover.as_ref().map(|cover| ImageData {
        src: asset_url(origin, &cover.url),
        alt: cover
            .alternative_text
            .clone()
            .unwrap_or_else(|| record.title.clone()),
        width: cover.width,
        height: cover.height,
    })
}

/// Template data for a record page; `show_meta` adds date and category chips
pub(crate) fn article_data(record: ContentRecord, show_meta: bool) -> ArticleData {
    let (published, categories) = if show_meta {
        (
            record
                .published_at
                .map(|date| date.format("%B %d, %Y").to_string()),
            record.category_names(),
        )
    } else {
        (None, Vec::new())
    };

    ArticleData {
        content: record.content,
        published,
        categories,
    }
}

/// Render a site URL (path plus optional query) the same way the server does
pub async fn render_path(site: &Site, target: &str) -> Result<Page> {
    let (path, query) = target.split_once('?').unwrap_or((target, ""));
    let raw = decode_query(query);
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    tracing::debug!("Rendering {}", target);

    match segments.as_slice() {
        [] | ["lessons"] => lessons::index(site, &raw).await,
        ["about"] => about::show(site).await,
        ["blogs", slug] => blog::show(site, &decode_path_segment(slug)).await,
        ["lessons", slug] => lessons::show(site, &decode_path_segment(slug)).await,
        _ => not_found(site),
    }
}
