//! Site configuration (config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Name of the configuration file looked up in the base directory
pub const CONFIG_FILE: &str = "config.yml";

/// How the lessons page issues its two upstream requests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchPlan {
    /// Lessons first, categories only once the list is known to be non-empty
    #[default]
    Sequential,
    /// Both requests in flight at once, results checked in the same order
    Joined,
}

/// Main site configuration
///
/// Resolved once at startup and shared read-only with every component.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,

    // Backend
    /// Origin of the CMS, e.g. `https://cms.example.com`
    pub backend_url: String,
    /// Optional upstream timeout; without it the client waits indefinitely
    pub request_timeout_secs: Option<u64>,
    pub fetch_plan: FetchPlan,

    // Directory
    pub static_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Lessons".to_string(),
            description: String::new(),

            backend_url: "http://localhost:1337".to_string(),
            request_timeout_secs: None,
            fetch_plan: FetchPlan::default(),

            static_dir: "public".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load `config.yml` from `base_dir` if it exists, defaults otherwise
    pub fn load_or_default<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join(CONFIG_FILE);
        if config_path.exists() {
            tracing::debug!("Loading configuration from {:?}", config_path);
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Replace the backend origin (from `BACKEND_URL` or the command line)
    pub fn with_backend_url(mut self, backend_url: Option<String>) -> Self {
        if let Some(url) = backend_url.filter(|u| !u.trim().is_empty()) {
            self.backend_url = url;
        }
        self
    }

    /// Backend origin without a trailing slash
    pub fn origin(&self) -> &str {
        self.backend_url.trim().trim_end_matches('/')
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.backend_url, "http://localhost:1337");
        assert_eq!(config.fetch_plan, FetchPlan::Sequential);
        assert!(config.request_timeout().is_none());
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Lessons
backend_url: https://cms.example.com/
fetch_plan: joined
request_timeout_secs: 5
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Lessons");
        assert_eq!(config.origin(), "https://cms.example.com");
        assert_eq!(config.fetch_plan, FetchPlan::Joined);
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.static_dir, "public");
    }

    #[test]
    fn test_backend_override() {
        let config = SiteConfig::default().with_backend_url(Some("http://cms:1337".to_string()));
        assert_eq!(config.origin(), "http://cms:1337");

        let config = SiteConfig::default().with_backend_url(Some("  ".to_string()));
        assert_eq!(config.origin(), "http://localhost:1337");
    }

    #[test]
    fn test_load_or_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config.title, "Lessons");

        fs::write(dir.path().join(CONFIG_FILE), "title: Courses\n").unwrap();
        let config = SiteConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config.title, "Courses");
    }
}
