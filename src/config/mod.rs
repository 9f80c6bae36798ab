//! Configuration module

mod site;

pub use site::{FetchPlan, SiteConfig, CONFIG_FILE};
