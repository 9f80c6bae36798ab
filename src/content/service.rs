//! Typed content operations over a [`ContentSource`]

use std::sync::Arc;

use super::dto::{decode_categories, decode_many, decode_one};
use super::record::{CategoryRef, ContentRecord};
use crate::api::{ContentSource, FetchResult};
use crate::listing::QueryParams;

pub const ABOUT_PATH: &str = "/api/about";
pub const BLOGS_PATH: &str = "/api/blogs/";
pub const LESSONS_PATH: &str = "/api/lessons";
pub const CATEGORIES_PATH: &str = "/api/categories";

fn pair(key: &str, value: &str) -> (String, String) {
    (key.to_string(), value.to_string())
}

/// Content endpoints of the CMS
#[derive(Clone)]
pub struct Cms {
    source: Arc<dyn ContentSource>,
}

impl Cms {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    /// The "about" single type
    pub async fn about(&self) -> FetchResult<Option<ContentRecord>> {
        self.source
            .fetch_content(ABOUT_PATH, &[])
            .await?
            .try_map(decode_one)
    }

    /// A blog post by slug, with its cover
    pub async fn blog(&self, slug: &str) -> FetchResult<Option<ContentRecord>> {
        let query = [pair("populate", "cover"), pair("slug", slug)];
        self.source
            .fetch_content(BLOGS_PATH, &query)
            .await?
            .try_map(decode_one)
    }

    /// A lesson by slug, with all relations
    pub async fn lesson(&self, slug: &str) -> FetchResult<Option<ContentRecord>> {
        let query = [pair("populate", "*"), pair("filters[slug][$eq]", slug)];
        self.source
            .fetch_content(LESSONS_PATH, &query)
            .await?
            .try_map(decode_one)
    }

    /// One page of lesson cards, filtered by category when one is set
    pub async fn lessons(&self, params: &QueryParams) -> FetchResult<Vec<ContentRecord>> {
        self.source
            .fetch_content(LESSONS_PATH, &params.api_query())
            .await?
            .try_map(decode_many)
    }

    /// Every category, for the filter control
    pub async fn categories(&self) -> FetchResult<Vec<CategoryRef>> {
        self.source
            .fetch_content(CATEGORIES_PATH, &[])
            .await?
            .try_map(decode_categories)
    }
}
