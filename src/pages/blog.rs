//! Blog post page

use anyhow::Result;

use super::{article_data, article_page, error_page, not_found_page, Page};
use crate::render::{PageMeta, RenderState};
use crate::Site;

/// Title used when no post has the requested slug
pub const NOT_FOUND_TITLE: &str = "Blog not found";

/// Render `/blogs/<slug>`
pub async fn show(site: &Site, slug: &str) -> Result<Page> {
    match RenderState::single("Blog", site.cms.blog(slug).await) {
        RenderState::Populated(blog) => {
            let meta = PageMeta::for_record(&blog, site.config.origin());
            article_page(site, &meta, &article_data(blog, false))
        }
        RenderState::Error { what } => error_page(site, what),
        RenderState::NotFound | RenderState::Empty => not_found_page(site, NOT_FOUND_TITLE),
    }
}
