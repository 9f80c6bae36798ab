//! Render a single page without starting the server

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::render::RenderKind;
use crate::Site;

/// Render `target` (e.g. `/lessons?page=2`) and print it, or write it to `output`
pub async fn run(site: &Site, target: &str, output: Option<&Path>) -> Result<RenderKind> {
    let page = site.render(target).await?;
    if page.kind != RenderKind::Populated {
        tracing::warn!("{} rendered as {:?}", target, page.kind);
    }

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, &page.html)?;
            tracing::info!("Wrote {:?}", path);
        }
        None => println!("{}", page.html),
    }

    Ok(page.kind)
}
