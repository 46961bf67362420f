//! Conference catalog entries.

use serde::Serialize;

/// A conference known to the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConferenceEntry {
    /// Registry key and DBLP venue directory (lowercase, e.g. "nips")
    pub abbreviation: String,

    /// Full conference name
    pub display_name: String,

    /// DBLP table-of-contents file prefix (e.g. "neurips")
    pub dblp_key: String,
}

impl ConferenceEntry {
    pub fn new(
        abbreviation: impl Into<String>,
        display_name: impl Into<String>,
        dblp_key: impl Into<String>,
    ) -> Self {
        Self {
            abbreviation: abbreviation.into().to_lowercase(),
            display_name: display_name.into(),
            dblp_key: dblp_key.into(),
        }
    }
}

/// An alternate abbreviation mapping onto a registry key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AliasEntry {
    pub alias: String,
    pub target: String,
}

impl AliasEntry {
    pub fn new(alias: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            alias: alias.into().to_lowercase(),
            target: target.into().to_lowercase(),
        }
    }
}
