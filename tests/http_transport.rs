//! `HttpClient` and the full pipeline against a local mock HTTP server.

use std::time::Duration;

use mockito::{Matcher, Server};
use paper_hunter::config::{Config, HttpConfig};
use paper_hunter::sources::Transport;
use paper_hunter::utils::{HttpClient, NoopProgress, RetryConfig};
use paper_hunter::{PaperHunter, PaperRecord, SearchRequest, SourceError, StrategyKind};

fn fast_retry(attempts: u32) -> RetryConfig {
    RetryConfig {
        initial_delay: Duration::from_millis(10),
        max_delay: Duration::from_millis(20),
        ..RetryConfig::default()
    }
    .max_attempts(attempts)
}

fn client() -> HttpClient {
    let config = HttpConfig {
        timeout_secs: 5,
        connect_timeout_secs: 2,
        ..HttpConfig::default()
    };
    HttpClient::from_config(&config)
        .unwrap()
        .with_retry_config(fast_retry(2))
}

#[tokio::test]
async fn test_probe_uses_head_status() {
    let mut server = Server::new_async().await;
    let found = server
        .mock("HEAD", "/db/conf/icml/icml2023.html")
        .with_status(200)
        .create_async()
        .await;
    let missing = server
        .mock("HEAD", "/db/conf/icml/icml2023-1.html")
        .with_status(404)
        .create_async()
        .await;

    let client = client();
    let base = server.url();
    assert!(client
        .probe(&format!("{}/db/conf/icml/icml2023.html", base))
        .await
        .unwrap());
    assert!(!client
        .probe(&format!("{}/db/conf/icml/icml2023-1.html", base))
        .await
        .unwrap());

    found.assert_async().await;
    missing.assert_async().await;
}

#[tokio::test]
async fn test_fetch_returns_body() {
    let mut server = Server::new_async().await;
    let page = server
        .mock("GET", "/page.html")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body("<html>ok</html>")
        .create_async()
        .await;

    let body = client()
        .fetch(&format!("{}/page.html", server.url()))
        .await
        .unwrap();
    assert_eq!(body, "<html>ok</html>");
    page.assert_async().await;
}

#[tokio::test]
async fn test_fetch_not_found_is_not_retried() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/gone.html")
        .with_status(404)
        .expect(1)
        .create_async()
        .await;

    let result = client().fetch(&format!("{}/gone.html", server.url())).await;
    assert!(matches!(result, Err(SourceError::NotFound(_))));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_retries_server_errors() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/flaky")
        .with_status(502)
        .expect(2)
        .create_async()
        .await;

    let result = client().fetch(&format!("{}/flaky", server.url())).await;
    match result {
        Err(SourceError::Api(msg)) => assert!(msg.contains("server error")),
        other => panic!("unexpected result: {:?}", other),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_search_over_http() {
    let mut server = Server::new_async().await;
    let body = serde_json::json!({"result": {"hits": {"hit": [
        {"info": {"title": "A Transformer Study"}},
        {"info": {"title": {"text": "Graph Nets"}}}
    ]}}})
    .to_string();
    let api = server
        .mock("GET", "/search/publ/api")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "streamid:conf/nips/nips2023:".into()),
            Matcher::UrlEncoded("format".into(), "json".into()),
            Matcher::UrlEncoded("h".into(), "1000".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .expect(1)
        .create_async()
        .await;

    let mut config = Config::default();
    config.source.strategy = StrategyKind::Api;
    config.source.api_url = format!("{}/search/publ/api", server.url());
    config.pacing.min_delay_ms = 0;
    config.pacing.max_delay_ms = 0;

    let hunter = PaperHunter::from_config(&config).unwrap();
    let report = hunter
        .search(
            &SearchRequest::new(["neurips"]).years([2023]).keywords_all(["graph"]),
            &NoopProgress,
        )
        .await
        .unwrap();

    assert_eq!(report.records, vec![PaperRecord::new("nips", 2023, "Graph Nets")]);
    assert_eq!(report.pairs[0].total_titles, 2);
    api.assert_async().await;
}

#[tokio::test]
async fn test_pages_search_over_http() {
    let mut server = Server::new_async().await;
    let _main = server
        .mock("HEAD", "/db/conf/nips/neurips2019.html")
        .with_status(404)
        .create_async()
        .await;
    let _sub1 = server
        .mock("HEAD", "/db/conf/nips/neurips2019-1.html")
        .with_status(200)
        .create_async()
        .await;
    let _sub2 = server
        .mock("HEAD", "/db/conf/nips/neurips2019-2.html")
        .with_status(404)
        .create_async()
        .await;
    let page = server
        .mock("GET", "/db/conf/nips/neurips2019-1.html")
        .with_status(200)
        .with_body(
            r#"<ul><li><cite class="data"><span class="title">Deep Equilibrium Models.</span></cite></li></ul>"#,
        )
        .expect(1)
        .create_async()
        .await;

    let mut config = Config::default();
    config.source.strategy = StrategyKind::Pages;
    config.source.toc_base_url = format!("{}/db/conf", server.url());
    config.pacing.min_delay_ms = 0;
    config.pacing.max_delay_ms = 0;

    let hunter = PaperHunter::from_config(&config).unwrap();
    let records = hunter
        .search_papers(&SearchRequest::new(["nips"]).years([2019]))
        .await
        .unwrap();

    assert_eq!(
        records,
        vec![PaperRecord::new("nips", 2019, "Deep Equilibrium Models.")]
    );
    page.assert_async().await;
}
