//! Reqwest-backed CMS client

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CACHE_CONTROL, PRAGMA};
use reqwest::Client;
use serde_json::Value;

use super::{error_message, parse_envelope, ContentSource, FetchError, FetchResult};
use crate::config::SiteConfig;
use crate::helpers::api_url;

/// HTTP client bound to one backend origin
#[derive(Debug, Clone)]
pub struct CmsClient {
    client: Client,
    origin: String,
}

impl CmsClient {
    /// Build a client for the configured backend
    ///
    /// No timeout is installed unless `request_timeout_secs` is set.
    pub fn new(config: &SiteConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            origin: config.origin().to_string(),
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Absolute URL for an API path and query
    pub fn url_for(&self, path: &str, query: &[(String, String)]) -> String {
        api_url(&self.origin, path, query)
    }
}

#[async_trait]
impl ContentSource for CmsClient {
    async fn fetch_content(&self, path: &str, query: &[(String, String)]) -> FetchResult<Value> {
        let url = self.url_for(path, query);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .header(CACHE_CONTROL, "no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        tracing::debug!("{} -> {} ({} bytes)", url, status, body.len());

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        parse_envelope(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(backend: &str) -> CmsClient {
        let config = SiteConfig::default().with_backend_url(Some(backend.to_string()));
        CmsClient::new(&config).unwrap()
    }

    #[test]
    fn test_url_for() {
        let client = client("http://cms.test:1337/");
        assert_eq!(client.origin(), "http://cms.test:1337");
        assert_eq!(
            client.url_for(
                "/api/lessons",
                &[("pagination[limit]".to_string(), "10".to_string())]
            ),
            "http://cms.test:1337/api/lessons?pagination[limit]=10"
        );
    }

    /// Serve a fixed CMS stand-in on an ephemeral port
    async fn stub_backend() -> String {
        use axum::{http::StatusCode, response::Html, routing::get, Json, Router};

        let app = Router::new()
            .route(
                "/api/forbidden",
                get(|| async {
                    (
                        StatusCode::FORBIDDEN,
                        Json(serde_json::json!({
                            "data": null,
                            "error": { "status": 403, "name": "ForbiddenError", "message": "Forbidden" }
                        })),
                    )
                }),
            )
            .route("/api/html", get(|| async { Html("<html>maintenance</html>") }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_error_status_carries_cms_message() {
        let client = client(&stub_backend().await);
        let result = client.fetch_content("/api/forbidden", &[]).await;
        assert_eq!(
            result,
            Err(FetchError::Status {
                status: 403,
                message: "Forbidden".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_non_json_success_is_parse_error() {
        let client = client(&stub_backend().await);
        let result = client.fetch_content("/api/html", &[]).await;
        assert!(matches!(result, Err(FetchError::Parse(_))));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = client(&format!("http://127.0.0.1:{}", port));
        let result = client.fetch_content("/api/about", &[]).await;
        assert!(matches!(result, Err(FetchError::Network(_))));
    }
}
