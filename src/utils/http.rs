//! HTTP client utilities.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use std::time::Duration;

use crate::config::HttpConfig;
use crate::sources::{SourceError, Transport};
use crate::utils::{with_retry, RetryConfig};

/// Default user agent sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client with sensible defaults
///
/// Every request is bounded by the configured timeout so a stalled
/// connection cannot hang the search.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Arc<Client>,
    retry: RetryConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, SourceError> {
        Self::from_config(&HttpConfig::default())
    }

    /// Create a client from HTTP settings
    pub fn from_config(config: &HttpConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| SourceError::Other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client: Arc::new(client),
            retry: RetryConfig::default().max_attempts(config.max_retries.saturating_add(1)),
        })
    }

    /// Create from an existing reqwest Client
    pub fn from_client(client: Arc<Client>) -> Self {
        Self {
            client,
            retry: RetryConfig::default(),
        }
    }

    /// Override the retry policy used by [`Transport::fetch`]
    pub fn with_retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Get the underlying client
    pub fn client(&self) -> &Client {
        &self.client
    }

    async fn fetch_once(client: &Client, url: &str) -> Result<String, SourceError> {
        let response = client.get(url).send().await?;
        let status = response.status();

        if status.is_success() {
            return response
                .text()
                .await
                .map_err(|e| SourceError::Parse(format!("Failed to read response body: {}", e)));
        }

        Err(status_error(status, url))
    }
}

/// Map a non-success status to the matching error
fn status_error(status: StatusCode, url: &str) -> SourceError {
    if status == StatusCode::NOT_FOUND {
        SourceError::NotFound(url.to_string())
    } else if status == StatusCode::TOO_MANY_REQUESTS {
        SourceError::RateLimit
    } else if status == StatusCode::SERVICE_UNAVAILABLE {
        SourceError::Api(format!("service unavailable: HTTP {}", status.as_u16()))
    } else if status.is_server_error() {
        SourceError::Api(format!("server error: HTTP {}", status.as_u16()))
    } else {
        SourceError::Api(format!("HTTP {} for {}", status.as_u16(), url))
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn probe(&self, url: &str) -> Result<bool, SourceError> {
        let response = self.client.head(url).send().await?;
        Ok(response.status().is_success())
    }

    async fn fetch(&self, url: &str) -> Result<String, SourceError> {
        let client = Arc::clone(&self.client);
        let url = url.to_string();

        with_retry(self.retry, || {
            let client = Arc::clone(&client);
            let url = url.clone();
            async move { Self::fetch_once(&client, &url).await }
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_from_default_config() {
        let client = HttpClient::new().unwrap();
        assert_eq!(client.retry.max_attempts, HttpConfig::default().max_retries + 1);
    }

    #[test]
    fn test_huge_retry_count_saturates() {
        let config = HttpConfig {
            max_retries: u32::MAX,
            ..HttpConfig::default()
        };
        let client = HttpClient::from_config(&config).unwrap();
        assert_eq!(client.retry.max_attempts, u32::MAX);
    }

    #[test]
    fn test_status_error_mapping() {
        assert!(matches!(
            status_error(StatusCode::NOT_FOUND, "u"),
            SourceError::NotFound(_)
        ));
        assert!(matches!(
            status_error(StatusCode::TOO_MANY_REQUESTS, "u"),
            SourceError::RateLimit
        ));
        match status_error(StatusCode::BAD_GATEWAY, "u") {
            SourceError::Api(msg) => assert!(msg.contains("server error")),
            other => panic!("unexpected error: {:?}", other),
        }
        match status_error(StatusCode::FORBIDDEN, "u") {
            SourceError::Api(msg) => assert!(msg.contains("403")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
