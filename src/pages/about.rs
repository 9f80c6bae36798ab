//! About page

use anyhow::Result;

use super::{article_data, article_page, error_page, not_found_page, Page};
use crate::render::{PageMeta, RenderState};
use crate::Site;

/// Render `/about` from the CMS "about" single type
pub async fn show(site: &Site) -> Result<Page> {
    match RenderState::single("About", site.cms.about().await) {
        RenderState::Populated(about) => article_page(
            site,
            &PageMeta::article("About", "About the site"),
            &article_data(about, false),
        ),
        RenderState::Error { what } => error_page(site, what),
        RenderState::NotFound | RenderState::Empty => not_found_page(site, "About not found"),
    }
}
