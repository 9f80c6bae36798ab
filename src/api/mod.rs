//! CMS API access
//!
//! Every call returns a [`FetchResult`]: either the decoded payload together
//! with optional pagination metadata, or a [`FetchError`] describing why the
//! request produced nothing usable. Callers never see a panic or a raw
//! transport error.

mod client;

pub use client::CmsClient;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Errors produced while talking to the CMS
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Upstream returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Pagination metadata reported by list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PaginationMeta {
    pub total: u64,
}

/// A successful fetch
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    pub data: T,
    /// Present only for paginated endpoints
    pub meta: Option<PaginationMeta>,
}

impl<T> Fetched<T> {
    pub fn new(data: T, meta: Option<PaginationMeta>) -> Self {
        Self { data, meta }
    }

    /// Decode the payload, keeping the metadata
    pub fn try_map<U, F>(self, f: F) -> FetchResult<U>
    where
        F: FnOnce(T) -> Result<U, FetchError>,
    {
        Ok(Fetched {
            data: f(self.data)?,
            meta: self.meta,
        })
    }

    /// Total reported by the CMS, if any
    pub fn total(&self) -> Option<u64> {
        self.meta.map(|m| m.total)
    }
}

pub type FetchResult<T> = Result<Fetched<T>, FetchError>;

/// Source of raw CMS JSON
///
/// `path` is relative to the configured backend origin and `query` is sent
/// in order, URL-encoded.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch_content(&self, path: &str, query: &[(String, String)]) -> FetchResult<Value>;
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Value,
    #[serde(default)]
    meta: Option<MetaDto>,
    #[serde(default)]
    error: Option<ErrorDto>,
}

#[derive(Deserialize)]
struct MetaDto {
    #[serde(default)]
    pagination: Option<PaginationMeta>,
}

#[derive(Deserialize)]
struct ErrorDto {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

impl ErrorDto {
    fn describe(self) -> String {
        self.message
            .or(self.name)
            .unwrap_or_else(|| "An error occurred".to_string())
    }
}

/// Split a CMS response body into payload and metadata
pub(crate) fn parse_envelope(body: &[u8]) -> FetchResult<Value> {
    let envelope: Envelope = serde_json::from_slice(body)
        .map_err(|e| FetchError::Parse(format!("invalid CMS JSON payload: {}", e)))?;

    if let Some(error) = envelope.error {
        return Err(FetchError::Upstream(error.describe()));
    }

    let meta = envelope.meta.and_then(|m| m.pagination);
    Ok(Fetched::new(envelope.data, meta))
}

/// Best-effort error message from a non-2xx body
pub(crate) fn error_message(body: &[u8]) -> String {
    serde_json::from_slice::<Envelope>(body)
        .ok()
        .and_then(|e| e.error)
        .map(ErrorDto::describe)
        .unwrap_or_else(|| String::from_utf8_lossy(body).chars().take(160).collect())
}
