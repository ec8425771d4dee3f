//! End-to-end resolve-loop tests against a mock HTTP server.
//!
//! Each test stands up a wiremock server serving topic detail pages, points
//! the runner at it with a temp-dir cache file, and asserts on the cache
//! contents, the run summary, and the number of requests actually made.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;
use vignette::cache::ImageCache;
use vignette::config::Config;
use vignette::runner;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BOTH_PAGE: &str = r#"<html>
<head><meta property="og:image" content="https://cdn.example/og.png"></head>
<body><img alt="thumbnail" src="https://cdn.example/thumb.png"></body>
</html>"#;

const OG_ONLY_PAGE: &str = r#"<html>
<head><meta property="og:image" content="https://cdn.example/og-only.jpg"></head>
<body><img alt="logo" src="https://cdn.example/logo.png"></body>
</html>"#;

const BARE_PAGE: &str = "<html><head><title>nothing here</title></head><body></body></html>";

fn test_config(server_uri: &str, ids: &[u32], output: PathBuf) -> Config {
    Config {
        topic_ids: ids.to_vec(),
        base_url: format!("{server_uri}/detail?topicId="),
        output,
        delay: Duration::ZERO,
        ..Config::default()
    }
}

fn topic_mock(topic_id: u32, body: &str) -> Mock {
    Mock::given(method("GET"))
        .and(path("/detail"))
        .and(query_param("topicId", topic_id.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
}

fn read_cache_file(path: &Path) -> BTreeMap<String, String> {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[tokio::test]
async fn thumbnail_beats_og_image_on_the_wire() {
    let server = MockServer::start().await;
    topic_mock(1, BOTH_PAGE).mount(&server).await;

    let dir = TempDir::new().unwrap();
    let config = test_config(&server.uri(), &[1], dir.path().join("cache.json"));

    let mut cache = ImageCache::load(&config.output).unwrap();
    let summary = runner::run(&config, &mut cache).await.unwrap();

    assert_eq!(summary.resolved, 1);
    let entries = read_cache_file(&config.output);
    assert_eq!(
        entries.get("1").map(String::as_str),
        Some("https://cdn.example/thumb.png")
    );
}

#[tokio::test]
async fn mixed_outcomes_only_cache_resolved_topics() {
    let server = MockServer::start().await;
    topic_mock(1, BOTH_PAGE).mount(&server).await;
    topic_mock(2, OG_ONLY_PAGE).mount(&server).await;
    // Topic 3 has no mount and gets wiremock's 404.
    topic_mock(4, BARE_PAGE).mount(&server).await;

    let dir = TempDir::new().unwrap();
    let config = test_config(&server.uri(), &[1, 2, 3, 4], dir.path().join("cache.json"));

    let mut cache = ImageCache::load(&config.output).unwrap();
    let summary = runner::run(&config, &mut cache).await.unwrap();

    assert_eq!(summary.resolved, 2);
    assert_eq!(summary.skipped, 0);
    assert_eq!(summary.fetch_failed, 1);
    assert_eq!(summary.no_image, 1);

    let entries = read_cache_file(&config.output);
    assert_eq!(entries.len(), 2);
    assert_eq!(
        entries.get("1").map(String::as_str),
        Some("https://cdn.example/thumb.png")
    );
    assert_eq!(
        entries.get("2").map(String::as_str),
        Some("https://cdn.example/og-only.jpg")
    );
    assert!(!entries.contains_key("3"));
    assert!(!entries.contains_key("4"));
}

#[tokio::test]
async fn second_run_is_idempotent_and_fetch_free() {
    let server = MockServer::start().await;
    // expect(1): the resolved topics must not be fetched again on run two.
    topic_mock(1, BOTH_PAGE).expect(1).mount(&server).await;
    topic_mock(2, OG_ONLY_PAGE).expect(1).mount(&server).await;

    let dir = TempDir::new().unwrap();
    let config = test_config(&server.uri(), &[1, 2], dir.path().join("cache.json"));

    let mut cache = ImageCache::load(&config.output).unwrap();
    runner::run(&config, &mut cache).await.unwrap();
    let after_first = fs::read_to_string(&config.output).unwrap();

    let mut cache = ImageCache::load(&config.output).unwrap();
    let summary = runner::run(&config, &mut cache).await.unwrap();

    assert_eq!(summary.resolved, 0);
    assert_eq!(summary.skipped, 2);
    let after_second = fs::read_to_string(&config.output).unwrap();
    assert_eq!(after_first, after_second);
}

#[tokio::test]
async fn failed_topics_are_retried_on_the_next_run() {
    let server = MockServer::start().await;
    let not_found = Mock::given(method("GET"))
        .and(path("/detail"))
        .and(query_param("topicId", "9"))
        .respond_with(ResponseTemplate::new(404))
        .expect(2);
    not_found.mount(&server).await;

    let dir = TempDir::new().unwrap();
    let config = test_config(&server.uri(), &[9], dir.path().join("cache.json"));

    for _ in 0..2 {
        let mut cache = ImageCache::load(&config.output).unwrap();
        let summary = runner::run(&config, &mut cache).await.unwrap();
        assert_eq!(summary.fetch_failed, 1);
        assert_eq!(summary.resolved, 0);
    }

    // Nothing ever resolved, so no cache file was created.
    assert!(!config.output.exists());
}

#[tokio::test]
async fn partial_progress_resumes_where_it_left_off() {
    let server = MockServer::start().await;
    topic_mock(1, BOTH_PAGE).expect(1).mount(&server).await;
    topic_mock(2, OG_ONLY_PAGE).expect(1).mount(&server).await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("cache.json");

    // First run covers only topic 1 (stand-in for a run interrupted after it).
    let config = test_config(&server.uri(), &[1], output.clone());
    let mut cache = ImageCache::load(&config.output).unwrap();
    runner::run(&config, &mut cache).await.unwrap();

    let entries = read_cache_file(&output);
    assert_eq!(entries.len(), 1);
    assert!(entries.contains_key("1"));

    // Second run over the full list skips 1 and picks up 2.
    let config = test_config(&server.uri(), &[1, 2], output.clone());
    let mut cache = ImageCache::load(&config.output).unwrap();
    let summary = runner::run(&config, &mut cache).await.unwrap();

    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.resolved, 1);
    let entries = read_cache_file(&output);
    assert_eq!(entries.len(), 2);
}

#[tokio::test]
async fn preseeded_string_keys_match_integer_ids() {
    let server = MockServer::start().await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("cache.json");
    fs::write(
        &output,
        r#"{
  "3365": "https://cdn.example/already.png"
}"#,
    )
    .unwrap();

    let config = test_config(&server.uri(), &[3365], output);
    let mut cache = ImageCache::load(&config.output).unwrap();
    let summary = runner::run(&config, &mut cache).await.unwrap();

    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.fetch_failed, 0);

    // The cached topic never hit the network at all.
    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}
