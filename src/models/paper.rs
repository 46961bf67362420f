//! Paper record produced by the search pipeline.

use serde::{Deserialize, Serialize};

/// A matching paper title tagged with where it was found.
///
/// `conference` is always the registry abbreviation, never an alias.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaperRecord {
    /// Registry abbreviation of the conference (e.g. "nips")
    pub conference: String,

    /// Conference year
    pub year: u16,

    /// Paper title, trimmed
    pub title: String,
}

impl PaperRecord {
    /// Create a new paper record
    pub fn new(conference: impl Into<String>, year: u16, title: impl Into<String>) -> Self {
        Self {
            conference: conference.into(),
            year,
            title: title.into(),
        }
    }

    /// Short venue label such as `NIPS 2023`
    pub fn venue(&self) -> String {
        format!("{} {}", self.conference.to_uppercase(), self.year)
    }
}

impl std::fmt::Display for PaperRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.venue(), self.title)
    }
}
