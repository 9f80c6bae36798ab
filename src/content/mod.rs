//! Content module - CMS records and the typed content operations

mod dto;
mod record;
mod service;

pub use record::{CategoryRef, ContentRecord, CoverImage};
pub use service::{Cms, ABOUT_PATH, BLOGS_PATH, CATEGORIES_PATH, LESSONS_PATH};
