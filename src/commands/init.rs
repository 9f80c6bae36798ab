//! Initialize a new front-end directory

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::CONFIG_FILE;

const DEFAULT_CONFIG: &str = r#"# cms-front configuration

# Site
title: Lessons
description: ''

# Backend
## Origin of the CMS REST API. BACKEND_URL or --backend-url take precedence.
backend_url: http://localhost:1337
## Seconds before an upstream request is abandoned; leave empty to wait forever.
request_timeout_secs:
## sequential: fetch categories only after lessons arrive
## joined: fetch lessons and categories at the same time
fetch_plan: sequential

# Directory
## Served under /static
static_dir: public
"#;

const DEFAULT_STYLE: &str = r#":root { --accent: #2b6cb0; --muted: #718096; }
body { margin: 0; font-family: system-ui, sans-serif; color: #1a202c; }
.container { max-width: 64rem; margin: 0 auto; padding: 0 1rem; }
.site-header { border-bottom: 1px solid #e2e8f0; }
.nav { display: flex; gap: 1rem; align-items: center; height: 3.5rem; }
.nav-brand { font-weight: 700; margin-right: auto; }
a { color: var(--accent); text-decoration: none; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr)); gap: 1.5rem; margin: 1.5rem 0; }
.card { display: flex; flex-direction: column; border: 1px solid #e2e8f0; border-radius: .5rem; overflow: hidden; color: inherit; }
.card-image { width: 100%; height: auto; object-fit: cover; }
.card-body { padding: 1rem; flex: 1; }
.card-footer, .article-meta { padding: 0 1rem 1rem; color: var(--muted); }
.chip { margin-right: .5rem; font-size: .875rem; }
.category-select { display: flex; gap: .5rem; margin-top: 1.5rem; }
.pagination { display: flex; justify-content: space-between; margin: 2rem 0; }
.pagination-number { padding: 0 .4rem; }
.pagination .current { font-weight: 700; }
.pagination .disabled { color: var(--muted); }
.message { text-align: center; padding: 4rem 0; }
.site-footer { border-top: 1px solid #e2e8f0; margin-top: 3rem; color: var(--muted); }
"#;

/// Initialize a new front-end in the given directory
///
/// Existing files are left untouched.
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir.join("public"))?;

    write_if_missing(&target_dir.join(CONFIG_FILE), DEFAULT_CONFIG)?;
    write_if_missing(&target_dir.join("public/style.css"), DEFAULT_STYLE)?;

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        tracing::warn!("{:?} already exists, skipping", path);
    } else {
        fs::write(path, content)?;
        tracing::debug!("Created {:?}", path);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FetchPlan, SiteConfig};

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        init_site(dir.path()).unwrap();

        let config = SiteConfig::load(dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config.backend_url, "http://localhost:1337");
        assert_eq!(config.fetch_plan, FetchPlan::Sequential);
        assert_eq!(config.request_timeout_secs, None);
        assert!(dir.path().join("public/style.css").exists());
    }

    #[test]
    fn test_init_keeps_existing_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "title: Mine\n").unwrap();

        init_site(dir.path()).unwrap();
        let config = SiteConfig::load(dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config.title, "Mine");
    }
}
