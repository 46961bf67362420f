//! Titles from DBLP table-of-contents HTML.
//!
//! Each publication is a `<cite class="data">` element whose title sits in a
//! nested `<span class="title">`.

use scraper::{Html, Selector};

/// Extract trimmed titles in document order, skipping citations without a title span
pub fn extract_toc_titles(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let cite_selector = Selector::parse("cite.data").expect("static selector");
    let title_selector = Selector::parse("span.title").expect("static selector");

    document
        .select(&cite_selector)
        .filter_map(|cite| cite.select(&title_selector).next())
        .map(|span| span.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty())
        .collect()
}
