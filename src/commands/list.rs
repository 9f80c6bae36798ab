//! List CMS content

use anyhow::Result;

use crate::listing::QueryParams;
use crate::Site;

/// Largest page size requested when listing everything
const LIST_LIMIT: u32 = 100;

/// List CMS content by type
pub async fn run(site: &Site, content_type: &str) -> Result<()> {
    match content_type {
        "lesson" | "lessons" => {
            let params = QueryParams {
                limit: LIST_LIMIT,
                ..QueryParams::default()
            };
            let lessons = site.cms.lessons(&params).await?;
            let total = lessons.total().unwrap_or(lessons.data.len() as u64);
            println!("Lessons ({}):", total);
            for lesson in lessons.data {
                let categories = lesson.category_names();
                if categories.is_empty() {
                    println!("  {} [{}]", lesson.title, lesson.slug);
                } else {
                    println!(
                        "  {} [{}] ({})",
                        lesson.title,
                        lesson.slug,
                        categories.join(", ")
                    );
                }
            }
        }
        "category" | "categories" => {
            let categories = site.cms.categories().await?;
            println!("Categories ({}):", categories.data.len());
            for category in categories.data {
                println!("  {}", category.name);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: lessons, categories",
                content_type
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FetchError;
    use crate::config::SiteConfig;
    use crate::content::{CATEGORIES_PATH, LESSONS_PATH};
    use crate::testing::FakeSource;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_list_lessons_requests_large_page() {
        let source = Arc::new(FakeSource::new().with(LESSONS_PATH, json!({ "data": [] })));
        let site = Site::with_source(SiteConfig::default(), source.clone()).unwrap();

        run(&site, "lessons").await.unwrap();
        assert!(source.requests()[0].contains("pagination[limit]=100"));
    }

    #[tokio::test]
    async fn test_list_fetch_failure_is_reported() {
        let source = FakeSource::new()
            .failing(CATEGORIES_PATH, FetchError::Network("refused".to_string()));
        let site = Site::with_source(SiteConfig::default(), Arc::new(source)).unwrap();

        let err = run(&site, "categories").await.unwrap_err();
        assert!(err.to_string().contains("refused"));
    }

    #[tokio::test]
    async fn test_unknown_type() {
        let site = Site::with_source(SiteConfig::default(), Arc::new(FakeSource::new())).unwrap();
        assert!(run(&site, "tags").await.is_err());
    }
}
