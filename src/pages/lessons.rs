//! Lessons list and lesson detail pages

use anyhow::Result;
use std::collections::HashMap;

use super::{
    article_data, article_page, cover_image, error_page, message_page, not_found_page, Page,
};
use crate::listing::{build_query, load_lessons, paginate, LessonsListing, QueryParams, LESSONS_ROUTE};
use crate::render::{PageMeta, RenderKind, RenderState};
use crate::templates::{CardData, CategoryOption, FilterData};
use crate::Site;

pub const EMPTY_MESSAGE: &str = "No Lessons Published Yet";
pub const NOT_FOUND_TITLE: &str = "Lesson not found";

/// Render `/lessons?category=&limit=&page=`
pub async fn index(site: &Site, raw: &HashMap<String, String>) -> Result<Page> {
    let params = build_query(raw);
    let meta = PageMeta::fixed("Lessons");

    match load_lessons(&site.cms, &params, site.config.fetch_plan).await {
        RenderState::Populated(listing) => listing_page(site, &meta, &params, listing),
        RenderState::Error { what } => error_page(site, what),
        RenderState::Empty => message_page(site, RenderKind::Empty, &meta, EMPTY_MESSAGE),
        RenderState::NotFound => not_found_page(site, "Page not found"),
    }
}

/// Render `/lessons/<slug>`
pub async fn show(site: &Site, slug: &str) -> Result<Page> {
    match RenderState::single("Lesson", site.cms.lesson(slug).await) {
        RenderState::Populated(lesson) => {
            let meta = PageMeta::for_record(&lesson, site.config.origin());
            article_page(site, &meta, &article_data(lesson, true))
        }
        RenderState::Error { what } => error_page(site, what),
        RenderState::NotFound | RenderState::Empty => not_found_page(site, NOT_FOUND_TITLE),
    }
}

fn listing_page(
    site: &Site,
    meta: &PageMeta,
    params: &QueryParams,
    listing: LessonsListing,
) -> Result<Page> {
    let origin = site.config.origin();
    let cards: Vec<CardData> = listing
        .lessons
        .iter()
        .map(|lesson| CardData {
            title: lesson.title.clone(),
            href: format!("{}/{}", LESSONS_ROUTE, lesson.slug),
            description: lesson.description.clone(),
            image: cover_image(lesson, origin),
            categories: lesson.category_names(),
        })
        .collect();
    let filter = FilterData {
        action: LESSONS_ROUTE.to_string(),
        limit: params.limit,
        options: listing
            .categories
            .iter()
            .map(|category| CategoryOption {
                name: category.name.clone(),
                selected: category.matches(&params.category),
            })
            .collect(),
    };

    let mut context = site.renderer.base_context(&site.config, meta);
    context.insert("cards", &cards);
    context.insert("filter", &filter);
    context.insert("pager", &paginate(listing.total, params).visible());

    Ok(Page {
        kind: RenderKind::Populated,
        html: site.renderer.render("lessons.html", &context)?,
    })
}
