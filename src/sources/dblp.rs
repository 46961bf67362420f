//! DBLP search API strategy.
//!
//! Uses the DBLP publication search API with a `streamid` query, which
//! returns every paper of one proceedings volume as JSON.

use async_trait::async_trait;

use crate::models::{ConferenceEntry, ResourceLocation};
use crate::sources::{LocateStrategy, SourceError};
use crate::utils::ProgressSink;

pub(crate) const DBLP_SEARCH_URL: &str = "https://dblp.org/search/publ/api";

/// Maximum number of hits requested per query
pub(crate) const API_MAX_RESULTS: usize = 1000;

/// DBLP search API strategy
///
/// Builds one query per (conference, year); no network access happens
/// until the orchestrator fetches the returned location.
#[derive(Debug, Clone)]
pub struct SearchApiStrategy {
    api_url: String,
    max_results: usize,
}

impl SearchApiStrategy {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            max_results: API_MAX_RESULTS,
        }
    }

    /// Set the maximum number of hits requested
    pub fn max_results(mut self, max: usize) -> Self {
        self.max_results = max;
        self
    }

    /// Stream identifier for a proceedings volume, e.g. `conf/nips/nips2023`
    pub fn stream_id(abbreviation: &str, year: u16) -> String {
        format!("conf/{0}/{0}{1}", abbreviation, year)
    }

    /// Full query URL for a conference-year
    pub fn query_url(&self, abbreviation: &str, year: u16) -> String {
        let query = format!("streamid:{}:", Self::stream_id(abbreviation, year));
        format!(
            "{}?q={}&format=json&h={}",
            self.api_url,
            urlencoding::encode(&query),
            self.max_results
        )
    }
}

impl Default for SearchApiStrategy {
    fn default() -> Self {
        Self::new(DBLP_SEARCH_URL)
    }
}

#[async_trait]
impl LocateStrategy for SearchApiStrategy {
    fn id(&self) -> &str {
        "api"
    }

    fn name(&self) -> &str {
        "DBLP search API"
    }

    async fn locate(
        &self,
        conference: &ConferenceEntry,
        year: u16,
        progress: &dyn ProgressSink,
    ) -> Result<Vec<ResourceLocation>, SourceError> {
        let url = self.query_url(&conference.abbreviation, year);
        tracing::debug!(%url, "DBLP search API query");
        progress.report("Fetching papers from DBLP API...");

        Ok(vec![ResourceLocation::search_hits(url)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResponseShape;
    use crate::utils::CollectingProgress;

    #[test]
    fn test_stream_id() {
        assert_eq!(SearchApiStrategy::stream_id("nips", 2023), "conf/nips/nips2023");
    }

    #[test]
    fn test_query_url_encoding() {
        let strategy = SearchApiStrategy::default();
        let url = strategy.query_url("icml", 2022);

        assert_eq!(
            url,
            "https://dblp.org/search/publ/api?q=streamid%3Aconf%2Ficml%2Ficml2022%3A&format=json&h=1000"
        );
    }

    #[test]
    fn test_query_url_custom_limit() {
        let strategy = SearchApiStrategy::new("http://localhost:1234/api").max_results(50);
        let url = strategy.query_url("kdd", 2021);

        assert!(url.starts_with("http://localhost:1234/api?q="));
        assert!(url.ends_with("&h=50"));
    }

    #[tokio::test]
    async fn test_locate_returns_single_query() {
        let strategy = SearchApiStrategy::default();
        let conference = ConferenceEntry::new("nips", "Neural Information Processing Systems", "neurips");
        let progress = CollectingProgress::new();

        let locations = strategy.locate(&conference, 2023, &progress).await.unwrap();

        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].shape, ResponseShape::SearchHits);
        assert!(locations[0].url.contains("conf%2Fnips%2Fnips2023"));
        assert_eq!(progress.messages(), vec!["Fetching papers from DBLP API..."]);
    }
}
