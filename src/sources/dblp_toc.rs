//! DBLP table-of-contents page strategy.
//!
//! DBLP publishes each proceedings volume under
//! `{base}/{abbreviation}/{key}{year}.html`. Large volumes are split into
//! `{key}{year}-1.html`, `{key}{year}-2.html`, ... and a handful of venues
//! use their own file names. Pages are found by probing in that order.

use async_trait::async_trait;
use std::sync::Arc;

use crate::conferences::ConferenceRegistry;
use crate::models::{ConferenceEntry, ResourceLocation};
use crate::sources::{LocateStrategy, SourceError, Transport};
use crate::utils::{Pacer, ProgressSink};

pub(crate) const DBLP_TOC_URL: &str = "https://dblp.org/db/conf";

/// Highest continuation page probed
pub(crate) const MAX_SUBPAGE: u32 = 5;

/// DBLP table-of-contents page strategy
#[derive(Debug, Clone)]
pub struct TocPageStrategy {
    transport: Arc<dyn Transport>,
    registry: Arc<ConferenceRegistry>,
    pacer: Pacer,
    base_url: String,
    max_subpage: u32,
}

impl TocPageStrategy {
    pub fn new(
        transport: Arc<dyn Transport>,
        registry: Arc<ConferenceRegistry>,
        pacer: Pacer,
    ) -> Self {
        Self {
            transport,
            registry,
            pacer,
            base_url: DBLP_TOC_URL.to_string(),
            max_subpage: MAX_SUBPAGE,
        }
    }

    /// Set the table-of-contents base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the highest continuation page to probe
    pub fn max_subpage(mut self, max: u32) -> Self {
        self.max_subpage = max;
        self
    }

    fn venue_dir(&self, conference: &ConferenceEntry) -> String {
        format!("{}/{}", self.base_url, conference.abbreviation)
    }

    /// URL of the single-page table of contents
    pub fn main_page_url(&self, conference: &ConferenceEntry, year: u16) -> String {
        format!(
            "{}/{}{}.html",
            self.venue_dir(conference),
            conference.dblp_key,
            year
        )
    }

    /// URL of continuation page `page` (1-based)
    pub fn sub_page_url(&self, conference: &ConferenceEntry, year: u16, page: u32) -> String {
        format!(
            "{}/{}{}-{}.html",
            self.venue_dir(conference),
            conference.dblp_key,
            year,
            page
        )
    }

    /// URL of the venue-specific page, if the venue has one
    pub fn special_page_url(&self, conference: &ConferenceEntry, year: u16) -> Option<String> {
        self.registry
            .page_suffix(&conference.abbreviation)
            .map(|suffix| {
                let file = suffix
                    .replace("{key}", &conference.dblp_key)
                    .replace("{year}", &year.to_string());
                format!("{}/{}", self.venue_dir(conference), file)
            })
    }

    /// Probe a URL, treating transport failures as "not there"
    async fn reachable(&self, url: &str) -> bool {
        match self.transport.probe(url).await {
            Ok(found) => {
                tracing::debug!(%url, found, "probed page");
                found
            }
            Err(e) => {
                tracing::debug!(%url, error = %e, "probe failed");
                false
            }
        }
    }
}

#[async_trait]
impl LocateStrategy for TocPageStrategy {
    fn id(&self) -> &str {
        "pages"
    }

    fn name(&self) -> &str {
        "DBLP table-of-contents pages"
    }

    async fn locate(
        &self,
        conference: &ConferenceEntry,
        year: u16,
        progress: &dyn ProgressSink,
    ) -> Result<Vec<ResourceLocation>, SourceError> {
        let main_url = self.main_page_url(conference, year);
        if self.reachable(&main_url).await {
            progress.report(&format!("Found main page: {}", main_url));
            return Ok(vec![ResourceLocation::toc_markup(main_url)]);
        }
        self.pacer.pause().await;

        let mut pages = Vec::new();
        for page in 1..=self.max_subpage {
            let url = self.sub_page_url(conference, year, page);
            let found = self.reachable(&url).await;
            self.pacer.pause().await;
            if !found {
                break;
            }
            progress.report(&format!("Found sub-page {}: {}", page, url));
            pages.push(ResourceLocation::toc_markup(url));
        }
        if !pages.is_empty() {
            return Ok(pages);
        }

        if let Some(url) = self.special_page_url(conference, year) {
            let found = self.reachable(&url).await;
            self.pacer.pause().await;
            if found {
                progress.report(&format!("Found special page: {}", url));
                return Ok(vec![ResourceLocation::toc_markup(url)]);
            }
        }

        progress.report(&format!(
            "No page found for {} {}",
            conference.abbreviation.to_uppercase(),
            year
        ));
        Ok(Vec::new())
    }
}
