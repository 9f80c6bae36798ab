//! Lessons page composition

use crate::api::{FetchResult, Fetched};
use crate::config::FetchPlan;
use crate::content::{CategoryRef, Cms, ContentRecord};
use crate::render::RenderState;

use super::QueryParams;

/// Resource names used in error messages
pub const LESSONS: &str = "Lessons";
pub const CATEGORIES: &str = "Categories";

/// Everything the populated lessons page shows
#[derive(Debug, Clone, PartialEq)]
pub struct LessonsListing {
    pub lessons: Vec<ContentRecord>,
    /// Size of the whole (filtered) collection
    pub total: u64,
    pub categories: Vec<CategoryRef>,
}

/// Fetch the lessons page and its category set
///
/// The list is checked first: a failed list is an error, an empty list skips
/// the categories entirely, a page past the end of a non-empty collection is
/// not found. Only then does the categories result count; if it failed the
/// whole page is an error. With [`FetchPlan::Joined`] both requests are in
/// flight together but the results are judged in the same order.
pub async fn load_lessons(
    cms: &Cms,
    params: &QueryParams,
    plan: FetchPlan,
) -> RenderState<LessonsListing> {
    let lessons_task = cms.lessons(params);
    let categories_task = cms.categories();

    let (lessons, categories) = match plan {
        FetchPlan::Sequential => {
            let lessons = match lessons_state(lessons_task.await).into_populated() {
                Ok(lessons) => lessons,
                Err(state) => return state,
            };
            (lessons, categories_task.await)
        }
        FetchPlan::Joined => {
            let (lessons, categories) = tokio::join!(lessons_task, categories_task);
            let lessons = match lessons_state(lessons).into_populated() {
                Ok(lessons) => lessons,
                Err(state) => return state,
            };
            (lessons, categories)
        }
    };

    assemble(lessons, categories)
}

fn lessons_state(
    result: FetchResult<Vec<ContentRecord>>,
) -> RenderState<Fetched<Vec<ContentRecord>>> {
    match result {
        Ok(fetched) if fetched.data.is_empty() && fetched.total().unwrap_or(0) > 0 => {
            RenderState::NotFound
        }
        other => RenderState::list(LESSONS, other),
    }
}

fn assemble(
    lessons: Fetched<Vec<ContentRecord>>,
    categories: FetchResult<Vec<CategoryRef>>,
) -> RenderState<LessonsListing> {
    let categories = match categories {
        Ok(fetched) => fetched.data,
        Err(e) => {
            tracing::warn!("Error while fetching {}: {}", CATEGORIES, e);
            return RenderState::Error { what: CATEGORIES };
        }
    };

    let total = lessons.total().unwrap_or(lessons.data.len() as u64);
    RenderState::Populated(LessonsListing {
        lessons: lessons.data,
        total,
        categories,
    })
}
