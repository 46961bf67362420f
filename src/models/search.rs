//! Search request, resource location and report models.

use serde::{Deserialize, Serialize};

use super::PaperRecord;

/// Token that expands to every conference when it is the only one requested
pub const ALL_CONFERENCES: &str = "all";

/// Search request parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Conference tokens as typed by the user (abbreviations, aliases, or "all")
    pub conferences: Vec<String>,

    /// Years to search, in order
    pub years: Vec<u16>,

    /// At least one of these patterns must match (ignored when empty)
    pub keywords_any: Vec<String>,

    /// Every one of these patterns must match
    pub keywords_all: Vec<String>,
}

impl SearchRequest {
    /// Create a new search request for the given conference tokens
    pub fn new<I, S>(conferences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            conferences: conferences.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Set the years to search
    pub fn years(mut self, years: impl IntoIterator<Item = u16>) -> Self {
        self.years = years.into_iter().collect();
        self
    }

    /// Set the require-any keyword patterns
    pub fn keywords_any<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords_any = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Set the require-all keyword patterns
    pub fn keywords_all<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords_all = keywords.into_iter().map(Into::into).collect();
        self
    }
}

/// How the body behind a [`ResourceLocation`] is shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseShape {
    /// JSON search API response with a list of hit records
    SearchHits,
    /// HTML table-of-contents page with citation fragments
    TocMarkup,
}

/// A retrievable document for one (conference, year) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLocation {
    pub url: String,
    pub shape: ResponseShape,
}

impl ResourceLocation {
    pub fn new(url: impl Into<String>, shape: ResponseShape) -> Self {
        Self {
            url: url.into(),
            shape,
        }
    }

    pub fn search_hits(url: impl Into<String>) -> Self {
        Self::new(url, ResponseShape::SearchHits)
    }

    pub fn toc_markup(url: impl Into<String>) -> Self {
        Self::new(url, ResponseShape::TocMarkup)
    }
}

/// Outcome of a single (conference, year) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairSummary {
    pub conference: String,
    pub year: u16,

    /// Number of resources the locator produced
    pub resources: usize,

    /// Titles extracted across every resource, before filtering
    pub total_titles: usize,

    /// Titles that passed the keyword filter
    pub matched: usize,

    /// Retrieval failure absorbed for this pair, if any
    pub error: Option<String>,
}

impl PairSummary {
    pub fn new(conference: impl Into<String>, year: u16) -> Self {
        Self {
            conference: conference.into(),
            year,
            resources: 0,
            total_titles: 0,
            matched: 0,
            error: None,
        }
    }
}

/// Everything a search produced
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchReport {
    /// Matching papers in discovery order
    pub records: Vec<PaperRecord>,

    /// One entry per processed (conference, year) pair
    pub pairs: Vec<PairSummary>,

    /// Whether the search stopped early on cancellation
    pub cancelled: bool,
}

impl SearchReport {
    /// Total titles crawled across all pairs
    pub fn total_titles(&self) -> usize {
        self.pairs.iter().map(|p| p.total_titles).sum()
    }

    /// Pairs whose retrieval failed
    pub fn failed_pairs(&self) -> impl Iterator<Item = &PairSummary> {
        self.pairs.iter().filter(|p| p.error.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = SearchRequest::new(["nips", "icml"])
            .years([2022, 2023])
            .keywords_any(["transformer"])
            .keywords_all(["graph"]);

        assert_eq!(request.conferences, vec!["nips", "icml"]);
        assert_eq!(request.years, vec![2022, 2023]);
        assert_eq!(request.keywords_any, vec!["transformer"]);
        assert_eq!(request.keywords_all, vec!["graph"]);
    }

    #[test]
    fn test_report_totals() {
        let mut ok = PairSummary::new("nips", 2023);
        ok.total_titles = 10;
        let mut failed = PairSummary::new("icml", 2023);
        failed.error = Some("Network error: boom".to_string());

        let report = SearchReport {
            records: vec![],
            pairs: vec![ok, failed],
            cancelled: false,
        };
        assert_eq!(report.total_titles(), 10);
        assert_eq!(report.failed_pairs().count(), 1);
    }
}
