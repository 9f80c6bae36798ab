//! Pagination links for the lessons list

use serde::Serialize;

use super::QueryParams;

/// Numbered links shown on each side of the current page
const MID_SIZE: u32 = 2;

/// One entry of the numbered page strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PageItem {
    Link { number: u32, href: String },
    Current { number: u32 },
    Gap,
}

/// Pagination controls for one listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLinks {
    pub pages: u32,
    pub current: u32,
    pub prev: Option<String>,
    pub next: Option<String>,
    pub items: Vec<PageItem>,
}

impl PageLinks {
    /// Controls are only worth rendering with more than one page
    pub fn is_visible(&self) -> bool {
        self.pages > 1
    }

    /// The controls to render, if any
    pub fn visible(self) -> Option<Self> {
        self.is_visible().then_some(self)
    }
}

/// Compute `ceil(total / limit)` pages and the links around the current one
///
/// Links keep the request's category and limit. A current page beyond the
/// last one is clamped for link computation.
pub fn paginate(total: u64, params: &QueryParams) -> PageLinks {
    let limit = u64::from(params.limit.max(1));
    let pages = u32::try_from(total.div_ceil(limit)).unwrap_or(u32::MAX);
    let current = params.page.clamp(1, pages.max(1));

    let prev = (current > 1).then(|| params.page_link(current - 1));
    let next = (current < pages).then(|| params.page_link(current + 1));

    let mut items = Vec::new();
    if pages > 1 {
        let start = current.saturating_sub(MID_SIZE).max(1);
        let end = current.saturating_add(MID_SIZE).min(pages);

        if start > 1 {
            items.push(link(params, 1));
            if start > 2 {
                items.push(PageItem::Gap);
            }
        }
        for number in start..=end {
            if number == current {
                items.push(PageItem::Current { number });
            } else {
                items.push(link(params, number));
            }
        }
        if end < pages {
            if end < pages - 1 {
                items.push(PageItem::Gap);
            }
            items.push(link(params, pages));
        }
    }

    PageLinks {
        pages,
        current,
        prev,
        next,
        items,
    }
}

fn link(params: &QueryParams, number: u32) -> PageItem {
    PageItem::Link {
        number,
        href: params.page_link(number),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(category: &str, limit: u32, page: u32) -> QueryParams {
        QueryParams {
            category: category.to_string(),
            limit,
            page,
        }
    }

    #[test]
    fn test_page_count() {
        assert_eq!(paginate(25, &params("", 10, 1)).pages, 3);
        assert_eq!(paginate(30, &params("", 10, 1)).pages, 3);
        assert_eq!(paginate(0, &params("", 10, 1)).pages, 0);
        assert_eq!(paginate(1, &params("", 10, 1)).pages, 1);
    }

    #[test]
    fn test_links_preserve_category_and_limit() {
        let links = paginate(25, &params("math", 10, 2));
        assert_eq!(
            links.prev.as_deref(),
            Some("/lessons?category=math&limit=10&page=1")
        );
        assert_eq!(
            links.next.as_deref(),
            Some("/lessons?category=math&limit=10&page=3")
        );
        assert_eq!(
            links.items,
            vec![
                PageItem::Link {
                    number: 1,
                    href: "/lessons?category=math&limit=10&page=1".to_string()
                },
                PageItem::Current { number: 2 },
                PageItem::Link {
                    number: 3,
                    href: "/lessons?category=math&limit=10&page=3".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_first_and_last_page() {
        let first = paginate(25, &params("", 10, 1));
        assert!(first.prev.is_none());
        assert!(first.next.is_some());

        let last = paginate(25, &params("", 10, 3));
        assert!(last.prev.is_some());
        assert!(last.next.is_none());
    }

    #[test]
    fn test_window_with_gaps() {
        let links = paginate(200, &params("", 10, 10));
        let numbers: Vec<String> = links
            .items
            .iter()
            .map(|item| match item {
                PageItem::Link { number, .. } => number.to_string(),
                PageItem::Current { number } => format!("[{}]", number),
                PageItem::Gap => "...".to_string(),
            })
            .collect();
        assert_eq!(
            numbers,
            vec!["1", "...", "8", "9", "[10]", "11", "12", "...", "20"]
        );
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let links = paginate(25, &params("", 10, 9));
        assert_eq!(links.current, 3);
        assert!(links.next.is_none());
        assert_eq!(links.prev.as_deref(), Some("/lessons?limit=10&page=2"));
    }

    #[test]
    fn test_single_page_hides_controls() {
        let links = paginate(7, &params("", 10, 1));
        assert!(!links.is_visible());
        assert!(links.items.is_empty());
        assert!(links.prev.is_none() && links.next.is_none());
        assert!(links.visible().is_none());
        assert!(paginate(25, &params("", 10, 1)).visible().is_some());
    }
}
