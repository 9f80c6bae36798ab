//! In-memory CMS used by unit tests

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::api::{parse_envelope, ContentSource, FetchError, FetchResult};
use crate::helpers::api_url;

/// Serves canned response bodies by API path and records every request
#[derive(Default)]
pub struct FakeSource {
    responses: HashMap<String, Result<Value, FetchError>>,
    requests: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `path` with this JSON body
    pub fn with(mut self, path: &str, body: Value) -> Self {
        self.responses.insert(path.to_string(), Ok(body));
        self
    }

    /// Fail every request to `path`
    pub fn failing(mut self, path: &str, error: FetchError) -> Self {
        self.responses.insert(path.to_string(), Err(error));
        self
    }

    /// Requested paths with their query strings, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requested(&self, path: &str) -> bool {
        self.requests()
            .iter()
            .any(|r| r == path || r.starts_with(&format!("{}?", path)))
    }
}

#[async_trait]
impl ContentSource for FakeSource {
    async fn fetch_content(&self, path: &str, query: &[(String, String)]) -> FetchResult<Value> {
        self.requests.lock().unwrap().push(api_url("", path, query));

        match self.responses.get(path) {
            Some(Ok(body)) => parse_envelope(body.to_string().as_bytes()),
            Some(Err(error)) => Err(error.clone()),
            None => Err(FetchError::Status {
                status: 404,
                message: "Not Found".to_string(),
            }),
        }
    }
}
