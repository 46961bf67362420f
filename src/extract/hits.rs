//! Titles from DBLP search API JSON.
//!
//! ```json
//! {"result": {"hits": {"hit": [{"info": {"title": "Some Paper."}}]}}}
//! ```
//!
//! `title` is usually a string but may be an object carrying `text`.

use serde::Deserialize;
use serde_json::Value;

use crate::sources::SourceError;

#[derive(Debug, Deserialize)]
struct ApiResponse {
    result: Option<ApiResult>,
}

#[derive(Debug, Deserialize)]
struct ApiResult {
    hits: Option<ApiHits>,
}

#[derive(Debug, Deserialize)]
struct ApiHits {
    #[serde(default)]
    hit: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct ApiHit {
    info: Option<HitInfo>,
}

#[derive(Debug, Deserialize)]
struct HitInfo {
    title: Option<TitleField>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TitleField {
    Plain(String),
    Nested { text: Option<String> },
    Other(Value),
}

impl TitleField {
    fn into_text(self) -> Option<String> {
        match self {
            TitleField::Plain(text) => Some(text),
            TitleField::Nested { text } => text,
            TitleField::Other(_) => None,
        }
    }
}

/// Extract trimmed titles in hit order, skipping hits without a usable title
///
/// A body that is not JSON at all is an error; individual malformed hits are not.
pub fn extract_hit_titles(body: &str) -> Result<Vec<String>, SourceError> {
    let response: ApiResponse = serde_json::from_str(body)?;

    let hits = response
        .result
        .and_then(|r| r.hits)
        .map(|h| h.hit)
        .unwrap_or_default();

    Ok(hits
        .into_iter()
        .filter_map(|hit| serde_json::from_value::<ApiHit>(hit).ok())
        .filter_map(|hit| hit.info?.title?.into_text())
        .map(|title| title.trim().to_string())
        .filter(|title| !title.is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_nested_titles() {
        let body = r#"{"result": {"hits": {"@total": "3", "hit": [
            {"info": {"title": "  A Transformer Study. "}},
            {"info": {"title": {"text": "Graph Nets", "@lang": "en"}}},
            {"info": {"title": "Fast KV  Store"}}
        ]}}}"#;

        assert_eq!(
            extract_hit_titles(body).unwrap(),
            vec!["A Transformer Study.", "Graph Nets", "Fast KV  Store"]
        );
    }

    #[test]
    fn test_malformed_hits_are_skipped() {
        let body = r#"{"result": {"hits": {"hit": [
            {"info": {"authors": {}}},
            {"noinfo": true},
            "not an object",
            {"info": {"title": 42}},
            {"info": {"title": {"lang": "en"}}},
            {"info": {"title": "   "}},
            {"info": {"title": "Kept"}}
        ]}}}"#;

        assert_eq!(extract_hit_titles(body).unwrap(), vec!["Kept"]);
    }

    #[test]
    fn test_no_hits() {
        assert!(extract_hit_titles(r#"{"result": {"hits": {"@total": "0"}}}"#)
            .unwrap()
            .is_empty());
        assert!(extract_hit_titles(r#"{"result": {}}"#).unwrap().is_empty());
        assert!(extract_hit_titles("{}").unwrap().is_empty());
    }

    #[test]
    fn test_unparseable_body_is_an_error() {
        let err = extract_hit_titles("<html>Service busy, try later</html>").unwrap_err();
        assert!(matches!(err, SourceError::Parse(_)));

        assert!(extract_hit_titles("").is_err());
    }
}
