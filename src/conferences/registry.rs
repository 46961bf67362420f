//! Registry for conference abbreviations, aliases and page overrides.

use std::collections::HashMap;

use super::catalog::{ALIASES, CONFERENCES, PAGE_SUFFIXES};
use super::ConferenceError;
use crate::models::{AliasEntry, ConferenceEntry, ALL_CONFERENCES};

/// Registry of all known conferences
///
/// Built once at startup and shared read-only. Lookups are case-insensitive;
/// alias resolution performs exactly one substitution.
#[derive(Debug, Clone)]
pub struct ConferenceRegistry {
    entries: Vec<ConferenceEntry>,
    index: HashMap<String, usize>,
    aliases: Vec<AliasEntry>,
    alias_index: HashMap<String, String>,
    page_suffixes: HashMap<String, String>,
}

impl ConferenceRegistry {
    /// Create a registry from the built-in catalog
    pub fn new() -> Self {
        let mut registry = Self::empty();

        for (abbreviation, display_name, dblp_key) in CONFERENCES {
            registry.register(ConferenceEntry::new(*abbreviation, *display_name, *dblp_key));
        }
        for (alias, target) in ALIASES {
            registry.add_alias(*alias, *target);
        }
        for (abbreviation, suffix) in PAGE_SUFFIXES {
            registry.set_page_suffix(*abbreviation, *suffix);
        }

        registry
    }

    /// Create a registry with no conferences
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            aliases: Vec::new(),
            alias_index: HashMap::new(),
            page_suffixes: HashMap::new(),
        }
    }

    /// Register a conference, replacing any entry with the same abbreviation
    pub fn register(&mut self, entry: ConferenceEntry) {
        if let Some(&position) = self.index.get(&entry.abbreviation) {
            self.entries[position] = entry;
            return;
        }
        self.index
            .insert(entry.abbreviation.clone(), self.entries.len());
        self.entries.push(entry);
    }

    /// Map an alternate abbreviation onto a registry key
    pub fn add_alias(&mut self, alias: impl Into<String>, target: impl Into<String>) {
        let entry = AliasEntry::new(alias, target);
        self.aliases.retain(|a| a.alias != entry.alias);
        self.alias_index
            .insert(entry.alias.clone(), entry.target.clone());
        self.aliases.push(entry);
    }

    /// Set a non-standard table-of-contents file name for a conference
    pub fn set_page_suffix(&mut self, abbreviation: impl Into<String>, suffix: impl Into<String>) {
        self.page_suffixes
            .insert(abbreviation.into().to_lowercase(), suffix.into());
    }

    /// Lowercase a token and apply at most one alias substitution
    pub fn normalize(&self, token: &str) -> String {
        let lower = token.trim().to_lowercase();
        match self.alias_index.get(&lower) {
            Some(target) => target.clone(),
            None => lower,
        }
    }

    /// Resolve a user token to its registry entry
    pub fn resolve(&self, token: &str) -> Result<&ConferenceEntry, ConferenceError> {
        let normalized = self.normalize(token);
        self.get(&normalized)
            .ok_or_else(|| ConferenceError::UnknownConference(vec![token.to_string()]))
    }

    /// Resolve every requested token, or fail listing all that are unknown
    ///
    /// A lone `all` token expands to the whole catalog in catalog order.
    pub fn expand<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> Result<Vec<&ConferenceEntry>, ConferenceError> {
        if let [only] = tokens {
            if only.as_ref().trim().eq_ignore_ascii_case(ALL_CONFERENCES) {
                return Ok(self.entries.iter().collect());
            }
        }

        let mut resolved = Vec::with_capacity(tokens.len());
        let mut unknown: Vec<String> = Vec::new();

        for token in tokens {
            let token = token.as_ref();
            match self.get(&self.normalize(token)) {
                Some(entry) => resolved.push(entry),
                None => {
                    if !unknown.iter().any(|u| u == token) {
                        unknown.push(token.to_string());
                    }
                }
            }
        }

        if unknown.is_empty() {
            Ok(resolved)
        } else {
            Err(ConferenceError::UnknownConference(unknown))
        }
    }

    /// Check that every token resolves, without keeping the result
    pub fn validate<S: AsRef<str>>(&self, tokens: &[S]) -> Result<(), ConferenceError> {
        self.expand(tokens).map(|_| ())
    }

    /// Get a conference by registry abbreviation (case-insensitive, no alias lookup)
    pub fn get(&self, abbreviation: &str) -> Option<&ConferenceEntry> {
        self.index
            .get(&abbreviation.to_lowercase())
            .map(|&position| &self.entries[position])
    }

    /// Check if a registry abbreviation exists
    pub fn has(&self, abbreviation: &str) -> bool {
        self.get(abbreviation).is_some()
    }

    /// Non-standard page file name for a conference, if any
    pub fn page_suffix(&self, abbreviation: &str) -> Option<&str> {
        self.page_suffixes
            .get(&abbreviation.to_lowercase())
            .map(String::as_str)
    }

    /// All conferences in catalog order
    pub fn entries(&self) -> &[ConferenceEntry] {
        &self.entries
    }

    /// All aliases in insertion order
    pub fn aliases(&self) -> &[AliasEntry] {
        &self.aliases
    }

    /// Get all registry abbreviations in catalog order
    pub fn abbreviations(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.abbreviation.as_str())
    }

    /// Get the number of registered conferences
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ConferenceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
