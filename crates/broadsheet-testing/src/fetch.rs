//! A fetcher with programmable responses.

use broadsheet_runtime::{ContentFetcher, FetchError};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone)]
enum StubResponse {
    Content(String),
    Status(u16),
    Network(String),
}

/// Content fetcher backed by a fixed response table.
///
/// Unstubbed refs resolve to HTTP 404. Every fetched ref is recorded and
/// available through [`StubFetcher::calls`].
#[derive(Debug, Default)]
pub struct StubFetcher {
    responses: HashMap<String, StubResponse>,
    calls: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stub a successful fetch.
    pub fn with_content(mut self, content_ref: &str, content: &str) -> Self {
        self.responses.insert(
            content_ref.to_string(),
            StubResponse::Content(content.to_string()),
        );
        self
    }

    /// Stub a non-success HTTP status.
    pub fn with_status(mut self, content_ref: &str, status: u16) -> Self {
        self.responses
            .insert(content_ref.to_string(), StubResponse::Status(status));
        self
    }

    /// Stub a transport failure.
    pub fn with_network_error(mut self, content_ref: &str, message: &str) -> Self {
        self.responses.insert(
            content_ref.to_string(),
            StubResponse::Network(message.to_string()),
        );
        self
    }

    /// Refs fetched so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl ContentFetcher for StubFetcher {
    async fn fetch(&self, content_ref: &str) -> Result<String, FetchError> {
        self.calls.lock().unwrap().push(content_ref.to_string());

        match self.responses.get(content_ref) {
            Some(StubResponse::Content(content)) => Ok(content.clone()),
            Some(StubResponse::Status(status)) => Err(FetchError::Status(*status)),
            Some(StubResponse::Network(message)) => Err(FetchError::Network(message.clone())),
            None => Err(FetchError::Status(404)),
        }
    }
}
