//! HTTP server: one route per page, plus static assets

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::listing::LESSONS_ROUTE;
use crate::pages::{self, Page};
use crate::Site;

/// Build the application router
pub fn router(site: Site) -> Router {
    let static_dir = site.static_dir.clone();

    Router::new()
        .route("/", get(|| async { Redirect::temporary(LESSONS_ROUTE) }))
        .route("/about", get(about_handler))
        .route("/blogs/:slug", get(blog_handler))
        .route("/lessons", get(lessons_handler))
        .route("/lessons/:slug", get(lesson_handler))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(site)
}

/// Start the server and block until it stops
pub async fn start(site: Site, ip: &str, port: u16) -> Result<()> {
    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Content from {}", site.config.origin());
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(site)).await?;

    Ok(())
}

async fn about_handler(State(site): State<Site>) -> Response {
    respond(pages::about::show(&site).await)
}

async fn blog_handler(State(site): State<Site>, Path(slug): Path<String>) -> Response {
    respond(pages::blog::show(&site, &slug).await)
}

async fn lessons_handler(
    State(site): State<Site>,
    Query(raw): Query<HashMap<String, String>>,
) -> Response {
    respond(pages::lessons::index(&site, &raw).await)
}

async fn lesson_handler(State(site): State<Site>, Path(slug): Path<String>) -> Response {
    respond(pages::lessons::show(&site, &slug).await)
}

async fn fallback_handler(State(site): State<Site>) -> Response {
    respond(pages::not_found(&site))
}

/// Turn a rendered page into a response
///
/// Pages are never cached; content changes in the CMS show up on reload.
fn respond(page: Result<Page>) -> Response {
    match page {
        Ok(page) => {
            let status = if page.is_not_found() {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::OK
            };
            (
                status,
                [(header::CACHE_CONTROL, "no-store")],
                Html(page.html),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to render page: {:#}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::{ABOUT_PATH, LESSONS_PATH};
    use crate::testing::FakeSource;
    use serde_json::json;
    use std::sync::Arc;

    fn page(kind: crate::render::RenderKind) -> Result<Page> {
        Ok(Page {
            kind,
            html: "<p>x</p>".to_string(),
        })
    }

    #[test]
    fn test_respond_status() {
        use crate::render::RenderKind;

        let response = respond(page(RenderKind::NotFound));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "no-store"
        );

        for kind in [RenderKind::Populated, RenderKind::Empty, RenderKind::Error] {
            assert_eq!(respond(page(kind)).status(), StatusCode::OK);
        }

        let failed = respond(Err(anyhow::anyhow!("template exploded")));
        assert_eq!(failed.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_router_serves_pages() {
        let source = FakeSource::new()
            .with(
                ABOUT_PATH,
                json!({ "data": { "id": 1, "attributes": { "content": "<p>Hi</p>" } } }),
            )
            .with(LESSONS_PATH, json!({ "data": [] }));
        let site = Site::with_source(SiteConfig::default(), Arc::new(source)).unwrap();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router(site)).await.unwrap();
        });

        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap();
        let base = format!("http://{}", addr);

        let root = client.get(&base).send().await.unwrap();
        assert!(root.status().is_redirection());
        assert_eq!(root.headers()["location"], "/lessons");

        let about = client.get(format!("{}/about", base)).send().await.unwrap();
        assert_eq!(about.status(), 200);
        assert!(about.text().await.unwrap().contains("<p>Hi</p>"));

        let missing = client.get(format!("{}/nope", base)).send().await.unwrap();
        assert_eq!(missing.status(), 404);
    }
}
