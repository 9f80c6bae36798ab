//! cms-front: server-rendered blog and lessons pages for a headless CMS
//!
//! Every request fetches its content from the CMS REST API, reduces the
//! outcome to a render state (error, not found, empty or populated) and
//! renders one of the embedded Tera templates.

pub mod api;
pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod listing;
pub mod pages;
pub mod render;
pub mod server;
pub mod templates;

#[cfg(test)]
pub(crate) mod testing;

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use api::{CmsClient, ContentSource};
use config::SiteConfig;
use content::Cms;
use templates::TemplateRenderer;

/// The front-end application: configuration, CMS access and templates
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: Arc<SiteConfig>,
    /// Typed content operations
    pub cms: Cms,
    /// Template renderer
    pub renderer: Arc<TemplateRenderer>,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
}

impl Site {
    /// Create a site from a directory, talking to the configured CMS
    ///
    /// `backend_url` overrides the `backend_url` of `config.yml`.
    pub fn new<P: AsRef<Path>>(base_dir: P, backend_url: Option<String>) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        let config = SiteConfig::load_or_default(base_dir)?.with_backend_url(backend_url);
        let client = CmsClient::new(&config)?;
        tracing::debug!("Using CMS at {}", client.origin());

        let mut site = Self::with_source(config, Arc::new(client))?;
        site.static_dir = base_dir.join(&site.config.static_dir);
        Ok(site)
    }

    /// Create a site over any content source
    pub fn with_source(config: SiteConfig, source: Arc<dyn ContentSource>) -> Result<Self> {
        let static_dir = PathBuf::from(&config.static_dir);
        Ok(Self {
            config: Arc::new(config),
            cms: Cms::new(source),
            renderer: Arc::new(TemplateRenderer::new()?),
            static_dir,
        })
    }

    /// Render one site URL, e.g. `/lessons?category=math`
    pub async fn render(&self, target: &str) -> Result<pages::Page> {
        pages::render_path(self, target).await
    }
}
