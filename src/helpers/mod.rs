//! Helper functions shared by pages and templates
//!
//! URL building for the CMS API and site links, and the small HTML
//! text utilities used for meta descriptions and template filters.

mod html;
mod url;

pub use html::*;
pub use url::*;
