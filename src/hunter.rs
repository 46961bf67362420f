//! Search orchestration.
//!
//! [`PaperHunter`] validates every requested conference up front, then walks
//! the (conference, year) pairs one at a time: locate resources, fetch them,
//! extract titles, filter. A failure inside a pair is reported and counted as
//! zero results; only an unknown conference aborts the whole search, and it
//! does so before any request is sent.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::conferences::{ConferenceError, ConferenceRegistry};
use crate::extract::extract_titles;
use crate::filter::KeywordFilter;
use crate::models::{ConferenceEntry, PaperRecord, PairSummary, SearchReport, SearchRequest};
use crate::sources::{build_strategy, LocateStrategy, SourceError, Transport};
use crate::utils::{HttpClient, NoopProgress, Pacer, ProgressSink};

/// Errors surfaced by a search
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HunterError {
    #[error("Unknown conferences: {}", .0.join(", "))]
    UnknownConference(Vec<String>),
}

impl From<ConferenceError> for HunterError {
    fn from(err: ConferenceError) -> Self {
        match err {
            ConferenceError::UnknownConference(tokens) => HunterError::UnknownConference(tokens),
        }
    }
}

/// Conference paper search pipeline
#[derive(Debug, Clone)]
pub struct PaperHunter {
    registry: Arc<ConferenceRegistry>,
    transport: Arc<dyn Transport>,
    strategy: Arc<dyn LocateStrategy>,
    pacer: Pacer,
}

impl PaperHunter {
    pub fn new(
        registry: Arc<ConferenceRegistry>,
        transport: Arc<dyn Transport>,
        strategy: Arc<dyn LocateStrategy>,
    ) -> Self {
        Self {
            registry,
            transport,
            strategy,
            pacer: Pacer::default(),
        }
    }

    /// Set the pause taken after every content fetch
    pub fn with_pacer(mut self, pacer: Pacer) -> Self {
        self.pacer = pacer;
        self
    }

    /// Build the pipeline over the real HTTP client
    pub fn from_config(config: &Config) -> Result<Self, SourceError> {
        let transport: Arc<dyn Transport> = Arc::new(HttpClient::from_config(&config.http)?);
        Self::with_transport(config, transport)
    }

    /// Build the pipeline over a caller-supplied transport
    pub fn with_transport(
        config: &Config,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, SourceError> {
        let registry = Arc::new(ConferenceRegistry::new());
        let pacer = config.pacing.pacer();
        let strategy = build_strategy(
            config.source.strategy,
            &config.source,
            Arc::clone(&transport),
            Arc::clone(&registry),
            pacer,
        )?;

        Ok(Self::new(registry, transport, strategy).with_pacer(pacer))
    }

    pub fn registry(&self) -> &ConferenceRegistry {
        &self.registry
    }

    pub fn strategy(&self) -> &dyn LocateStrategy {
        self.strategy.as_ref()
    }

    /// Run a search to completion and return only the matching papers
    pub async fn search_papers(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<PaperRecord>, HunterError> {
        Ok(self.search(request, &NoopProgress).await?.records)
    }

    /// Run a search to completion
    pub async fn search(
        &self,
        request: &SearchRequest,
        progress: &dyn ProgressSink,
    ) -> Result<SearchReport, HunterError> {
        self.search_with_cancel(request, progress, CancellationToken::new())
            .await
    }

    /// Run a search that stops when `cancel` fires.
    ///
    /// Cancellation is honoured between pairs and while a pair is in flight;
    /// an interrupted pair contributes nothing. The report keeps what was
    /// gathered before and is marked `cancelled`.
    pub async fn search_with_cancel(
        &self,
        request: &SearchRequest,
        progress: &dyn ProgressSink,
        cancel: CancellationToken,
    ) -> Result<SearchReport, HunterError> {
        let conferences = self.registry.expand(request.conferences.as_slice())?;
        let filter = KeywordFilter::new(request.keywords_any.as_slice(), request.keywords_all.as_slice());

        tracing::debug!(
            strategy = self.strategy.id(),
            conferences = conferences.len(),
            years = request.years.len(),
            "starting search"
        );

        let mut report = SearchReport::default();

        'pairs: for conference in conferences {
            for &year in &request.years {
                if cancel.is_cancelled() {
                    report.cancelled = true;
                    break 'pairs;
                }

                let outcome = tokio::select! {
                    biased;
                    _ = cancel.cancelled() => None,
                    outcome = self.search_pair(conference, year, &filter, progress) => Some(outcome),
                };

                let Some((matched, summary)) = outcome else {
                    progress.report("Search cancelled");
                    report.cancelled = true;
                    break 'pairs;
                };

                report.records.extend(
                    matched
                        .into_iter()
                        .map(|title| PaperRecord::new(conference.abbreviation.as_str(), year, title)),
                );
                report.pairs.push(summary);
            }
        }

        tracing::info!(
            records = report.records.len(),
            pairs = report.pairs.len(),
            failed = report.failed_pairs().count(),
            cancelled = report.cancelled,
            "search finished"
        );

        Ok(report)
    }

    /// Process one pair, absorbing any retrieval failure into the summary
    async fn search_pair(
        &self,
        conference: &ConferenceEntry,
        year: u16,
        filter: &KeywordFilter,
        progress: &dyn ProgressSink,
    ) -> (Vec<String>, PairSummary) {
        let mut summary = PairSummary::new(conference.abbreviation.as_str(), year);

        progress.report(&format!(
            "===== Searching {} {} =====",
            conference.abbreviation.to_uppercase(),
            year
        ));
        progress.report(&format!("Recognized conference: {}", conference.display_name));

        let locations = match self.strategy.locate(conference, year, progress).await {
            Ok(locations) => locations,
            Err(e) => {
                tracing::warn!(conference = %conference.abbreviation, year, error = %e, "locate failed");
                progress.report(&format!(
                    "Error searching {} {}: {}",
                    conference.abbreviation, year, e
                ));
                summary.error = Some(e.to_string());
                return (Vec::new(), summary);
            }
        };
        summary.resources = locations.len();

        let mut titles = Vec::new();
        for location in &locations {
            tracing::debug!(url = %location.url, "fetching");
            let fetched = match self.transport.fetch(&location.url).await {
                Ok(body) => extract_titles(location, &body),
                Err(e) => Err(e),
            };
            match fetched {
                Ok(found) => titles.extend(found),
                Err(e) => {
                    tracing::warn!(url = %location.url, error = %e, "fetch failed");
                    progress.report(&format!("Error fetching papers: {}", e));
                    summary.error = Some(e.to_string());
                    return (Vec::new(), summary);
                }
            }
            self.pacer.pause().await;
        }

        summary.total_titles = titles.len();
        if titles.is_empty() {
            progress.report(&format!(
                "No papers found for {} in {}",
                conference.display_name, year
            ));
            return (Vec::new(), summary);
        }

        let matched = filter.apply(&titles);
        summary.matched = matched.len();
        progress.report(&format!(
            "Crawled {} total papers. Found {} matching the criteria.",
            titles.len(),
            matched.len()
        ));
        tracing::info!(
            conference = %conference.abbreviation,
            year,
            total = titles.len(),
            matched = matched.len(),
            "pair done"
        );

        (matched, summary)
    }
}
