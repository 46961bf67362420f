//! End-to-end tests of the search pipeline over a mock transport.

use std::collections::HashSet;
use std::sync::Arc;

use paper_hunter::config::Config;
use paper_hunter::sources::{MockTransport, SearchApiStrategy, TocPageStrategy};
use paper_hunter::utils::{CollectingProgress, NoopProgress, Pacer};
use paper_hunter::{
    ConferenceRegistry, HunterError, PaperHunter, PaperRecord, SearchRequest, StrategyKind,
};

const TOC_BASE: &str = "http://toc.test/db/conf";

fn hits_body(titles: &[&str]) -> String {
    let hits: Vec<_> = titles
        .iter()
        .map(|t| serde_json::json!({"info": {"title": t, "venue": "NeurIPS", "year": "2023"}}))
        .collect();
    serde_json::json!({"result": {"hits": {"@total": titles.len().to_string(), "hit": hits}}})
        .to_string()
}

fn toc_body(titles: &[&str]) -> String {
    let entries: String = titles
        .iter()
        .map(|t| {
            format!(
                r#"<li class="entry inproceedings"><cite class="data"><span itemprop="author">X</span>: <span class="title">{}</span></cite></li>"#,
                t
            )
        })
        .collect();
    format!("<html><body><ul class=\"publ-list\">{}</ul></body></html>", entries)
}

fn quiet_config(strategy: StrategyKind) -> Config {
    let mut config = Config::default();
    config.source.strategy = strategy;
    config.source.toc_base_url = TOC_BASE.to_string();
    config.pacing.min_delay_ms = 0;
    config.pacing.max_delay_ms = 0;
    config
}

fn api_hunter(transport: &Arc<MockTransport>) -> PaperHunter {
    PaperHunter::with_transport(&quiet_config(StrategyKind::Api), transport.clone()).unwrap()
}

fn pages_hunter(transport: &Arc<MockTransport>) -> PaperHunter {
    PaperHunter::with_transport(&quiet_config(StrategyKind::Pages), transport.clone()).unwrap()
}

#[tokio::test]
async fn test_neurips_alias_end_to_end() {
    let transport = Arc::new(MockTransport::new());
    transport.add_page(
        SearchApiStrategy::default().query_url("nips", 2023),
        hits_body(&["A Transformer Study", "Graph Nets"]),
    );
    let hunter = api_hunter(&transport);

    let request = SearchRequest::new(["neurips"])
        .years([2023])
        .keywords_any(["transformer"]);
    let records = hunter.search_papers(&request).await.unwrap();

    assert_eq!(
        records,
        vec![PaperRecord::new("nips", 2023, "A Transformer Study")]
    );
    assert_eq!(
        transport.fetched_urls(),
        vec!["https://dblp.org/search/publ/api?q=streamid%3Aconf%2Fnips%2Fnips2023%3A&format=json&h=1000"]
    );
}

#[tokio::test]
async fn test_unknown_conferences_abort_without_requests() {
    let transport = Arc::new(MockTransport::new());
    transport.set_fallback_body(hits_body(&["anything"]));
    let hunter = api_hunter(&transport);

    let request = SearchRequest::new(["icml", "nope", "Neurips", "xyz"]).years([2022, 2023]);
    let err = hunter.search(&request, &NoopProgress).await.unwrap_err();

    match err {
        HunterError::UnknownConference(tokens) => assert_eq!(tokens, vec!["nope", "xyz"]),
    }
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_all_expands_to_every_conference_once() {
    let transport = Arc::new(MockTransport::new());
    transport.set_fallback_body(hits_body(&[]));
    let hunter = api_hunter(&transport);

    let report = hunter
        .search(&SearchRequest::new(["ALL"]).years([2023]), &NoopProgress)
        .await
        .unwrap();

    let registry = ConferenceRegistry::new();
    let processed: Vec<&str> = report.pairs.iter().map(|p| p.conference.as_str()).collect();
    let expected: Vec<&str> = registry.abbreviations().collect();
    assert_eq!(processed, expected);

    let unique: HashSet<_> = processed.iter().collect();
    assert_eq!(unique.len(), registry.len());
    assert_eq!(transport.fetch_count(), registry.len());
}

#[tokio::test]
async fn test_all_mixed_with_other_tokens_is_unknown() {
    let transport = Arc::new(MockTransport::new());
    let hunter = api_hunter(&transport);

    let err = hunter
        .search_papers(&SearchRequest::new(["all", "icml"]).years([2023]))
        .await
        .unwrap_err();
    assert_eq!(err, HunterError::UnknownConference(vec!["all".to_string()]));
}

#[tokio::test]
async fn test_pages_strategy_collects_contiguous_sub_pages() {
    let transport = Arc::new(MockTransport::new());
    let dir = format!("{}/icml", TOC_BASE);
    transport.set_status(format!("{}/icml2023.html", dir), 404);
    transport.add_page(
        format!("{}/icml2023-1.html", dir),
        toc_body(&["Scaling Transformers", "Kernel Methods"]),
    );
    transport.add_page(
        format!("{}/icml2023-2.html", dir),
        toc_body(&["Transformer Circuits", "Scaling Transformers"]),
    );
    transport.set_status(format!("{}/icml2023-3.html", dir), 404);
    transport.add_page(format!("{}/icml2023-4.html", dir), toc_body(&["Never Seen"]));

    let hunter = pages_hunter(&transport);
    let progress = CollectingProgress::new();
    let request = SearchRequest::new(["icml"])
        .years([2023])
        .keywords_any(["transformer"]);
    let report = hunter.search(&request, &progress).await.unwrap();

    // duplicates across pages are kept
    let titles: Vec<&str> = report.records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Scaling Transformers", "Transformer Circuits", "Scaling Transformers"]
    );
    assert_eq!(report.pairs[0].resources, 2);
    assert_eq!(report.pairs[0].total_titles, 4);

    let probed = transport.probed_urls();
    assert_eq!(probed.len(), 4);
    assert!(!probed.iter().any(|u| u.ends_with("icml2023-4.html")));
    assert_eq!(transport.fetch_count(), 2);
    assert!(progress.contains("Found sub-page 2"));
    assert!(progress.contains("Crawled 4 total papers. Found 3 matching the criteria."));
}

#[tokio::test]
async fn test_pages_strategy_special_page_fallback() {
    let transport = Arc::new(MockTransport::new());
    let special = format!("{}/hotchips/hcs2022.html", TOC_BASE);
    transport.add_page(special.clone(), toc_body(&["Chiplet Interconnects"]));

    let hunter = pages_hunter(&transport);
    let records = hunter
        .search_papers(&SearchRequest::new(["hotchips"]).years([2022]))
        .await
        .unwrap();

    assert_eq!(
        records,
        vec![PaperRecord::new("hotchips", 2022, "Chiplet Interconnects")]
    );
    assert_eq!(transport.fetched_urls(), vec![special]);
}

#[tokio::test]
async fn test_missing_pages_yield_no_data() {
    let transport = Arc::new(MockTransport::new());
    let hunter = pages_hunter(&transport);
    let progress = CollectingProgress::new();

    let report = hunter
        .search(&SearchRequest::new(["icml"]).years([1970]), &progress)
        .await
        .unwrap();

    assert!(report.records.is_empty());
    assert_eq!(report.pairs[0].resources, 0);
    assert!(report.pairs[0].error.is_none());
    assert_eq!(transport.fetch_count(), 0);
    assert!(progress.contains("No page found for ICML 1970"));
    assert!(progress.contains("No papers found for"));
}

#[tokio::test]
async fn test_failed_pair_does_not_stop_search() {
    let transport = Arc::new(MockTransport::new());
    let api = SearchApiStrategy::default();
    transport.add_page(api.query_url("icml", 2022), hits_body(&["Graph Nets"]));
    transport.set_status(api.query_url("icml", 2023), 500);
    transport.add_page(api.query_url("nips", 2022), hits_body(&["Graph Diffusion"]));
    transport.fail_url(api.query_url("nips", 2023), "connection refused");

    let hunter = api_hunter(&transport);
    let progress = CollectingProgress::new();
    let request = SearchRequest::new(["icml", "nips"])
        .years([2022, 2023])
        .keywords_all(["graph"]);
    let report = hunter.search(&request, &progress).await.unwrap();

    assert_eq!(
        report.records,
        vec![
            PaperRecord::new("icml", 2022, "Graph Nets"),
            PaperRecord::new("nips", 2022, "Graph Diffusion"),
        ]
    );
    assert_eq!(report.pairs.len(), 4);
    assert_eq!(report.failed_pairs().count(), 2);
    assert!(!report.cancelled);
    assert!(progress.contains("connection refused"));
}

#[tokio::test]
async fn test_custom_strategy_wiring() {
    let transport = Arc::new(MockTransport::new());
    let registry = Arc::new(ConferenceRegistry::new());
    let strategy = TocPageStrategy::new(transport.clone(), registry.clone(), Pacer::disabled())
        .base_url(TOC_BASE)
        .max_subpage(1);
    transport.add_page(
        format!("{}/nips/neurips2021.html", TOC_BASE),
        toc_body(&["Main Page Paper"]),
    );

    let hunter = PaperHunter::new(registry, transport.clone(), Arc::new(strategy))
        .with_pacer(Pacer::disabled());
    let records = hunter
        .search_papers(&SearchRequest::new(["NeurIPS"]).years([2021]))
        .await
        .unwrap();

    assert_eq!(records, vec![PaperRecord::new("nips", 2021, "Main Page Paper")]);
    assert_eq!(transport.probe_count(), 1);
}
