//! Lessons list: request parameters, pagination and page composition

mod controller;
mod pagination;

pub use controller::{load_lessons, LessonsListing, CATEGORIES, LESSONS};
pub use pagination::{paginate, PageItem, PageLinks};

use serde::Serialize;
use std::collections::HashMap;

use crate::helpers::link_with_query;

/// Page size used when the request does not carry a usable `limit`
pub const DEFAULT_LIMIT: u32 = 10;

/// Route of the lessons list
pub const LESSONS_ROUTE: &str = "/lessons";

/// Parameters of one lessons-list request
///
/// Built once per request by [`build_query`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryParams {
    /// Empty means "no filter"
    pub category: String,
    /// Always positive
    pub limit: u32,
    /// 1-based, always positive
    pub page: u32,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            category: String::new(),
            limit: DEFAULT_LIMIT,
            page: 1,
        }
    }
}

fn positive(raw: &HashMap<String, String>, key: &str) -> Option<u32> {
    raw.get(key)
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|n| *n > 0)
}

/// Derive [`QueryParams`] from the raw request query
///
/// A missing `category` means no filter; a missing, non-numeric or
/// non-positive `limit` falls back to [`DEFAULT_LIMIT`], and `page` to 1.
pub fn build_query(raw: &HashMap<String, String>) -> QueryParams {
    QueryParams {
        category: raw
            .get("category")
            .map(|c| c.trim().to_string())
            .unwrap_or_default(),
        limit: positive(raw, "limit").unwrap_or(DEFAULT_LIMIT),
        page: positive(raw, "page").unwrap_or(1),
    }
}

impl QueryParams {
    pub fn has_category(&self) -> bool {
        !self.category.is_empty()
    }

    /// Index of the first record on the current page
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }

    /// Query sent to the lessons endpoint
    ///
    /// The CMS compares categories case-insensitively (`$eqi`); the value is
    /// lowercased so equivalent requests are also identical requests.
    pub fn api_query(&self) -> Vec<(String, String)> {
        let mut query = vec![
            ("populate".to_string(), "*".to_string()),
            ("fields[0]".to_string(), "title".to_string()),
            ("fields[1]".to_string(), "slug".to_string()),
            ("fields[2]".to_string(), "description".to_string()),
            ("pagination[start]".to_string(), self.offset().to_string()),
            ("pagination[limit]".to_string(), self.limit.to_string()),
        ];
        if self.has_category() {
            query.push((
                "filters[categories][name][$eqi]".to_string(),
                self.category.to_lowercase(),
            ));
        }
        query
    }

    /// Link to another page of the same listing
    pub fn page_link(&self, page: u32) -> String {
        let mut query = Vec::with_capacity(3);
        if self.has_category() {
            query.push(("category", self.category.clone()));
        }
        query.push(("limit", self.limit.to_string()));
        query.push(("page", page.to_string()));
        link_with_query(LESSONS_ROUTE, &query)
    }
}
