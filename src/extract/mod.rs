//! Title extraction from located resources.
//!
//! Entries without a usable title are skipped. A search API body that cannot
//! be parsed at all is reported as [`SourceError::Parse`]; HTML is parsed
//! leniently and never fails. Titles are trimmed at both ends; inner
//! whitespace is kept.

mod hits;
mod toc;

pub use hits::extract_hit_titles;
pub use toc::extract_toc_titles;

use crate::models::{ResourceLocation, ResponseShape};
use crate::sources::SourceError;

/// Extract paper titles from a fetched resource body
pub fn extract_titles(location: &ResourceLocation, body: &str) -> Result<Vec<String>, SourceError> {
    let titles = match location.shape {
        ResponseShape::SearchHits => extract_hit_titles(body)?,
        ResponseShape::TocMarkup => extract_toc_titles(body),
    };
    tracing::debug!(url = %location.url, count = titles.len(), "extracted titles");
    Ok(titles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_on_shape() {
        let json = r#"{"result": {"hits": {"hit": [{"info": {"title": "From JSON"}}]}}}"#;
        let html = r#"<cite class="data"><span class="title">From HTML</span></cite>"#;

        let api = ResourceLocation::search_hits("http://api");
        let toc = ResourceLocation::toc_markup("http://toc");

        assert_eq!(extract_titles(&api, json).unwrap(), vec!["From JSON"]);
        assert_eq!(extract_titles(&toc, html).unwrap(), vec!["From HTML"]);

        // html where JSON was expected is unreadable; JSON as html has no citations
        assert!(matches!(extract_titles(&api, html), Err(SourceError::Parse(_))));
        assert!(extract_titles(&toc, json).unwrap().is_empty());
    }
}
