//! Remote data source boundary and locate strategies.
//!
//! Two traits split the work with DBLP:
//!
//! - [`Transport`] is the network boundary: an existence probe (HEAD) and a
//!   content fetch (GET). [`crate::utils::HttpClient`] is the real one and
//!   [`MockTransport`] serves canned responses in tests.
//! - [`LocateStrategy`] decides which documents hold a (conference, year)
//!   pair. One strategy is selected per deployment:
//!
//! | Strategy | Id | Resources |
//! |---|---|---|
//! | [`SearchApiStrategy`] | `api` | one search API query (`streamid:conf/{abbr}/{abbr}{year}:`) |
//! | [`TocPageStrategy`] | `pages` | main table-of-contents page, else numbered sub-pages, else a venue-specific page |
//!
//! # Feature Flags
//!
//! - `api` - Enable the search API strategy (default: enabled)
//! - `pages` - Enable the table-of-contents page strategy (default: enabled)

#[cfg(feature = "source-api")]
mod dblp;
#[cfg(feature = "source-pages")]
mod dblp_toc;

pub mod mock;

#[cfg(feature = "source-api")]
pub use dblp::SearchApiStrategy;
#[cfg(feature = "source-pages")]
pub use dblp_toc::TocPageStrategy;
pub use mock::MockTransport;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::SourceConfig;
use crate::conferences::ConferenceRegistry;
use crate::models::{ConferenceEntry, ResourceLocation};
use crate::utils::{Pacer, ProgressSink};

/// Network operations the pipeline needs from the remote source.
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    /// Check whether a document exists. `Ok(false)` for any non-success status.
    async fn probe(&self, url: &str) -> Result<bool, SourceError>;

    /// Retrieve a document body
    async fn fetch(&self, url: &str) -> Result<String, SourceError>;
}

/// Finds the resources holding one conference-year's papers.
///
/// An empty result means "no data found" and is not an error.
#[async_trait]
pub trait LocateStrategy: Send + Sync + std::fmt::Debug {
    /// Short identifier ("api", "pages")
    fn id(&self) -> &str;

    /// Human-readable name
    fn name(&self) -> &str;

    /// Locate every resource for the pair, in retrieval order
    async fn locate(
        &self,
        conference: &ConferenceEntry,
        year: u16,
        progress: &dyn ProgressSink,
    ) -> Result<Vec<ResourceLocation>, SourceError>;
}

/// Which locate strategy to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Query the DBLP search API
    #[default]
    Api,
    /// Probe DBLP table-of-contents pages
    Pages,
}

impl StrategyKind {
    pub fn id(&self) -> &'static str {
        match self {
            StrategyKind::Api => "api",
            StrategyKind::Pages => "pages",
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl std::str::FromStr for StrategyKind {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "api" | "query" => Ok(StrategyKind::Api),
            "pages" | "toc" => Ok(StrategyKind::Pages),
            other => Err(SourceError::InvalidRequest(format!(
                "unknown strategy '{}' (expected 'api' or 'pages')",
                other
            ))),
        }
    }
}

/// Build the configured locate strategy
pub fn build_strategy(
    kind: StrategyKind,
    settings: &SourceConfig,
    transport: Arc<dyn Transport>,
    registry: Arc<ConferenceRegistry>,
    pacer: Pacer,
) -> Result<Arc<dyn LocateStrategy>, SourceError> {
    match kind {
        #[cfg(feature = "source-api")]
        StrategyKind::Api => {
            let _ = (transport, registry, pacer);
            Ok(Arc::new(
                SearchApiStrategy::new(settings.api_url.clone())
                    .max_results(settings.max_results),
            ))
        }
        #[cfg(feature = "source-pages")]
        StrategyKind::Pages => Ok(Arc::new(
            TocPageStrategy::new(transport, registry, pacer)
                .base_url(settings.toc_base_url.clone())
                .max_subpage(settings.max_subpage),
        )),
        #[allow(unreachable_patterns)]
        other => {
            let _ = settings;
            Err(SourceError::InvalidRequest(format!(
                "strategy '{}' is not compiled in",
                other
            )))
        }
    }
}

/// Errors that can occur when talking to the remote source
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Network or HTTP error
    #[error("Network error: {0}")]
    Network(String),

    /// Request did not complete in time
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Parsing error (JSON, HTML)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimit,

    /// Document not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// API error from the source
    #[error("API error: {0}")]
    Api(String),

    /// Other error
    #[error("Error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SourceError::Timeout(err.to_string())
        } else {
            SourceError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Parse(format!("JSON: {}", err))
    }
}
