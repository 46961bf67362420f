//! Mock transport for testing purposes.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::sources::{SourceError, Transport};

#[derive(Debug, Clone)]
enum MockResponse {
    Page(String),
    Status(u16),
    Failure(String),
}

/// A mock transport that serves predefined pages and records every request.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<HashMap<String, MockResponse>>,
    fallback_body: Mutex<Option<String>>,
    probed: Mutex<Vec<String>>,
    fetched: Mutex<Vec<String>>,
}

impl MockTransport {
    /// Create a new mock transport that knows no URLs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` at `url`.
    pub fn add_page(&self, url: impl Into<String>, body: impl Into<String>) {
        let mut guard = self.responses.lock().unwrap();
        guard.insert(url.into(), MockResponse::Page(body.into()));
    }

    /// Answer `url` with a bare HTTP status.
    pub fn set_status(&self, url: impl Into<String>, status: u16) {
        let mut guard = self.responses.lock().unwrap();
        guard.insert(url.into(), MockResponse::Status(status));
    }

    /// Fail every request to `url` with a network error.
    pub fn fail_url(&self, url: impl Into<String>, message: impl Into<String>) {
        let mut guard = self.responses.lock().unwrap();
        guard.insert(url.into(), MockResponse::Failure(message.into()));
    }

    /// Serve `body` for any URL without an explicit response.
    pub fn set_fallback_body(&self, body: impl Into<String>) {
        let mut guard = self.fallback_body.lock().unwrap();
        *guard = Some(body.into());
    }

    /// URLs probed so far, in order.
    pub fn probed_urls(&self) -> Vec<String> {
        self.probed.lock().unwrap().clone()
    }

    /// URLs fetched so far, in order.
    pub fn fetched_urls(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }

    pub fn probe_count(&self) -> usize {
        self.probed.lock().unwrap().len()
    }

    pub fn fetch_count(&self) -> usize {
        self.fetched.lock().unwrap().len()
    }

    /// Total probes and fetches.
    pub fn request_count(&self) -> usize {
        self.probe_count() + self.fetch_count()
    }

    fn lookup(&self, url: &str) -> Option<MockResponse> {
        if let Some(response) = self.responses.lock().unwrap().get(url) {
            return Some(response.clone());
        }
        self.fallback_body
            .lock()
            .unwrap()
            .clone()
            .map(MockResponse::Page)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn probe(&self, url: &str) -> Result<bool, SourceError> {
        self.probed.lock().unwrap().push(url.to_string());
        match self.lookup(url) {
            Some(MockResponse::Page(_)) => Ok(true),
            Some(MockResponse::Status(status)) => Ok((200..300).contains(&status)),
            Some(MockResponse::Failure(message)) => Err(SourceError::Network(message)),
            None => Ok(false),
        }
    }

    async fn fetch(&self, url: &str) -> Result<String, SourceError> {
        self.fetched.lock().unwrap().push(url.to_string());
        match self.lookup(url) {
            Some(MockResponse::Page(body)) => Ok(body),
            Some(MockResponse::Status(status)) if (200..300).contains(&status) => Ok(String::new()),
            Some(MockResponse::Status(404)) | None => Err(SourceError::NotFound(url.to_string())),
            Some(MockResponse::Status(status)) => {
                Err(SourceError::Api(format!("HTTP {} for {}", status, url)))
            }
            Some(MockResponse::Failure(message)) => Err(SourceError::Network(message)),
        }
    }
}
