//! Keyword filtering of paper titles.
//!
//! A title passes when every `all` pattern matches and, if any `any`
//! patterns are given, at least one of them matches. Patterns are
//! case-insensitive regular expressions searched anywhere in the title.

use regex::{Regex, RegexBuilder};

/// Compiled two-tier keyword predicate
#[derive(Debug, Clone, Default)]
pub struct KeywordFilter {
    any: Vec<Pattern>,
    all: Vec<Pattern>,
}

#[derive(Debug, Clone)]
enum Pattern {
    Regex(Regex),
    /// Lowercased literal text
    Literal(String),
}

impl Pattern {
    fn compile(pattern: &str) -> Self {
        match RegexBuilder::new(pattern).case_insensitive(true).build() {
            Ok(re) => Pattern::Regex(re),
            Err(e) => {
                tracing::warn!(pattern, error = %e, "invalid keyword pattern, matching it literally");
                Pattern::Literal(pattern.to_lowercase())
            }
        }
    }

    fn is_match(&self, title: &str) -> bool {
        match self {
            Pattern::Regex(re) => re.is_match(title),
            Pattern::Literal(text) => title.to_lowercase().contains(text.as_str()),
        }
    }
}

impl KeywordFilter {
    /// Compile both keyword groups.
    ///
    /// A pattern that is not a valid regular expression is matched as
    /// literal text instead.
    pub fn new<A, B>(keywords_any: &[A], keywords_all: &[B]) -> Self
    where
        A: AsRef<str>,
        B: AsRef<str>,
    {
        Self {
            any: keywords_any.iter().map(|k| Pattern::compile(k.as_ref())).collect(),
            all: keywords_all.iter().map(|k| Pattern::compile(k.as_ref())).collect(),
        }
    }

    /// True when no pattern was given in either group
    pub fn is_empty(&self) -> bool {
        self.any.is_empty() && self.all.is_empty()
    }

    pub fn matches(&self, title: &str) -> bool {
        if !self.all.iter().all(|p| p.is_match(title)) {
            return false;
        }
        self.any.is_empty() || self.any.iter().any(|p| p.is_match(title))
    }

    /// Keep matching titles, preserving order
    pub fn apply<S: AsRef<str>>(&self, titles: &[S]) -> Vec<String> {
        titles
            .iter()
            .map(AsRef::as_ref)
            .filter(|title| self.matches(title))
            .map(str::to_string)
            .collect()
    }
}

/// One-shot filter over a title list
pub fn filter_titles<S, A, B>(titles: &[S], keywords_any: &[A], keywords_all: &[B]) -> Vec<String>
where
    S: AsRef<str>,
    A: AsRef<str>,
    B: AsRef<str>,
{
    KeywordFilter::new(keywords_any, keywords_all).apply(titles)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: &[&str] = &[];

    #[test]
    fn test_empty_filter_is_identity() {
        let titles = vec!["B paper", "A paper", "B paper"];
        assert_eq!(filter_titles(&titles, NONE, NONE), titles);
        assert!(KeywordFilter::new(NONE, NONE).is_empty());
    }

    #[test]
    fn test_any_and_all() {
        let titles = ["Fast Distributed KV Store"];
        assert_eq!(
            filter_titles(&titles, &["kv"], &["distributed"]),
            vec!["Fast Distributed KV Store"]
        );
        assert!(filter_titles(&titles, &["kv"], &["cache"]).is_empty());
    }

    #[test]
    fn test_all_requires_every_pattern() {
        let filter = KeywordFilter::new(NONE, &["graph", "neural"]);
        assert!(filter.matches("Graph Neural Networks"));
        assert!(!filter.matches("Graph Databases"));
    }

    #[test]
    fn test_any_requires_one_pattern() {
        let filter = KeywordFilter::new(&["llm", "transformer"], NONE);
        assert!(filter.matches("Scaling Transformers"));
        assert!(filter.matches("LLM agents"));
        assert!(!filter.matches("Graph Nets"));
    }

    #[test]
    fn test_case_insensitive_search() {
        let filter = KeywordFilter::new(&["TRANSFORMER"], NONE);
        assert!(filter.matches("a transformer study"));
        assert!(filter.matches("Vision-Transformers at scale"));
    }

    #[test]
    fn test_regex_patterns() {
        let filter = KeywordFilter::new(&[r"^graph\b", "diffusion|score-based"], NONE);
        assert!(filter.matches("Graph Nets"));
        assert!(!filter.matches("Knowledge Graphs"));
        assert!(filter.matches("Score-Based Generative Models"));
    }

    #[test]
    fn test_invalid_pattern_matches_literally() {
        let filter = KeywordFilter::new(&["c++("], NONE);
        assert!(filter.matches("Parsing C++(20) modules"));
        assert!(!filter.matches("Parsing C modules"));
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let titles = ["Z kv", "other", "A kv", "Z kv"];
        assert_eq!(
            filter_titles(&titles, &["kv"], NONE),
            vec!["Z kv", "A kv", "Z kv"]
        );
    }
}
