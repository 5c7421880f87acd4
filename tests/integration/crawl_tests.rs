//! Integration tests for the crawler and the pipeline
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end.

use page_lexicon::config::{
    Config, CrawlOptions, LinkDiscovery, UserAgentConfig, DEFAULT_ACCEPT, DEFAULT_ACCEPT_LANGUAGE,
    DEFAULT_USER_AGENT,
};
use page_lexicon::crawler::{crawl, Crawler};
use page_lexicon::{pipeline, LexiconError};
use std::collections::HashSet;
use std::time::Duration;
use wiremock::matchers::{header, method, path, path_regex};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Options used by most tests: short timeout, generous budget
fn test_options(follow_links: bool, max_pages: usize, concurrency: usize) -> CrawlOptions {
    CrawlOptions::new(
        follow_links,
        max_pages,
        concurrency,
        Duration::from_millis(2000),
    )
}

fn html_page(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body)
        .insert_header("content-type", "text/html")
}

/// Mounts a GET page that must be requested exactly `times` times
async fn mount_page(server: &MockServer, route: &str, body: &str, times: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(html_page(body.to_string()))
        .expect(times)
        .mount(server)
        .await;
}

/// Reads a request header back as one string
///
/// wiremock splits header values on commas, so the parts are re-joined and
/// whitespace is dropped; compare against [`squash`] of the expected value.
fn header_text(request: &Request, name: &str) -> Option<String> {
    request
        .headers
        .iter()
        .find(|(key, _)| key.as_str().eq_ignore_ascii_case(name))
        .map(|(_, values)| {
            let joined = values
                .iter()
                .map(|value| value.as_str())
                .collect::<Vec<_>>()
                .join(",");
            squash(&joined)
        })
}

fn squash(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

#[tokio::test]
async fn test_single_entry_without_following() {
    let mock_server = MockServer::start().await;
    let entry = format!("{}/", mock_server.uri());

    mount_page(
        &mock_server,
        "/",
        r#"<html><head><title>Ferris</title></head><body>
        <p>Ownership rules</p>
        <a href="/other">Other</a>
        </body></html>"#,
        1,
    )
    .await;
    mount_page(&mock_server, "/other", "<html></html>", 0).await;

    let result = crawl(&[entry.as_str()], &test_options(false, 5, 4))
        .await
        .expect("Crawl failed");

    assert_eq!(result.outcomes.len(), 1);
    assert_eq!(result.discovered_count, 1);

    let outcome = &result.outcomes[0];
    assert_eq!(outcome.url, entry);
    assert!(outcome.is_usable());
    assert!(outcome.text.contains("Ferris"));
    assert!(outcome.text.contains("Ownership rules"));
}

#[tokio::test]
async fn test_follow_links_same_origin_and_dedup() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // Index links to two pages several ways, plus links that must be ignored
    mount_page(
        &mock_server,
        "/",
        &format!(
            r##"<html><head><title>Home</title></head><body>
            <a href="/a">A</a>
            <a href="{base}/b">B</a>
            <a href="/a#section">A again</a>
            <a href="a">A relative</a>
            <a href="#top">Top</a>
            <a href="/logo.PNG">Logo</a>
            <a href="/files/report.pdf">Report</a>
            <a href="mailto:team@example.com">Mail</a>
            <a href="tel:+15550100">Call</a>
            <a href="javascript:void(0)">Script</a>
            <a href="https://other.example/x">Elsewhere</a>
            </body></html>"##,
            base = base_url
        ),
        1,
    )
    .await;

    // Pages link back to each other and to the index
    mount_page(
        &mock_server,
        "/a",
        r#"<html><body>Page A <a href="/">home</a> <a href="/b">B</a></body></html>"#,
        1,
    )
    .await;
    mount_page(
        &mock_server,
        "/b",
        r#"<html><body>Page B <a href="/a">A</a></body></html>"#,
        1,
    )
    .await;
    mount_page(&mock_server, "/logo.PNG", "", 0).await;
    mount_page(&mock_server, "/files/report.pdf", "", 0).await;

    let result = crawl(&[format!("{}/", base_url)], &test_options(true, 10, 4))
        .await
        .expect("Crawl failed");

    assert_eq!(result.outcomes.len(), 3);
    assert_eq!(result.discovered_count, 3);
    assert!(result.outcomes.iter().all(|outcome| outcome.is_usable()));

    let urls: HashSet<&str> = result.outcomes.iter().map(|o| o.url.as_str()).collect();
    assert!(urls.contains(format!("{}/", base_url).as_str()));
    assert!(urls.contains(format!("{}/a", base_url).as_str()));
    assert!(urls.contains(format!("{}/b", base_url).as_str()));

    // Entry comes first, in its own batch
    assert_eq!(result.outcomes[0].url, format!("{}/", base_url));

    // No cross-origin requests were attempted
    let requests = mock_server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 3);
}

#[tokio::test]
async fn test_page_budget_bounds_crawl() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let links: String = (0..10)
        .map(|i| format!(r#"<a href="/p{}">page {}</a>"#, i, i))
        .collect();
    mount_page(
        &mock_server,
        "/",
        &format!("<html><body>{}</body></html>", links),
        1,
    )
    .await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/p\d$"))
        .respond_with(html_page(
            r#"<html><body>leaf <a href="/p9">p9</a> <a href="/extra">extra</a></body></html>"#
                .to_string(),
        ))
        .mount(&mock_server)
        .await;

    let result = crawl(&[format!("{}/", base_url)], &test_options(true, 4, 2))
        .await
        .expect("Crawl failed");

    assert_eq!(result.outcomes.len(), 4);
    assert_eq!(result.discovered_count, 4);
    assert!(result.discovered_count >= result.outcomes.len());

    let urls: Vec<&str> = result.outcomes.iter().map(|o| o.url.as_str()).collect();
    for expected in ["/p0", "/p1", "/p2"] {
        let url = format!("{}{}", base_url, expected);
        assert!(urls.contains(&url.as_str()), "missing {}", url);
    }

    // Only the budgeted pages were ever requested
    let requests = mock_server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 4);
}

#[tokio::test]
async fn test_discovery_grows_with_budget() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let links: String = (0..8).map(|i| format!(r#"<a href="/p{}">p</a>"#, i)).collect();
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(format!("<html><body>{}</body></html>", links)))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/p\d$"))
        .respond_with(html_page("<html><body>leaf</body></html>".to_string()))
        .mount(&mock_server)
        .await;

    let entry = format!("{}/", base_url);
    let mut previous = 0;
    for max_pages in [1, 3, 6, 12] {
        let result = crawl(&[entry.as_str()], &test_options(true, max_pages, 3))
            .await
            .expect("Crawl failed");

        assert!(result.outcomes.len() <= max_pages);
        assert!(result.discovered_count >= result.outcomes.len());
        assert!(result.discovered_count >= previous);
        previous = result.discovered_count;
    }
    assert_eq!(previous, 9);
}

#[tokio::test]
async fn test_failed_fetch_recorded_and_crawl_continues() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<html><body><a href="/missing">gone</a><a href="/ok">ok</a></body></html>"#,
        1,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_page(
        &mock_server,
        "/ok",
        r#"<html><body>still here</body></html>"#,
        1,
    )
    .await;

    let result = crawl(&[format!("{}/", base_url)], &test_options(true, 10, 4))
        .await
        .expect("Crawl failed");

    assert_eq!(result.outcomes.len(), 3);
    assert_eq!(result.usable().count(), 2);

    let failed: Vec<_> = result.unusable().collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].url, format!("{}/missing", base_url));
    assert_eq!(failed[0].error.as_deref(), Some("HTTP 404 Not Found"));
    assert!(failed[0].text.is_empty());
}

#[tokio::test]
async fn test_request_timeout_is_a_failed_outcome() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            html_page("<html><body>late</body></html>".to_string())
                .set_delay(Duration::from_millis(1500)),
        )
        .mount(&mock_server)
        .await;

    let options = CrawlOptions::new(false, 5, 4, Duration::from_millis(200));
    let result = crawl(&[format!("{}/slow", mock_server.uri())], &options)
        .await
        .expect("Crawl failed");

    assert_eq!(result.outcomes.len(), 1);
    assert_eq!(
        result.outcomes[0].error.as_deref(),
        Some("request timed out after 200ms")
    );
}

#[tokio::test]
async fn test_batch_outcomes_in_completion_order() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            html_page("<html><body>slow</body></html>".to_string())
                .set_delay(Duration::from_millis(400)),
        )
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/fast", "<html><body>fast</body></html>", 1).await;

    let entries = [format!("{}/slow", base_url), format!("{}/fast", base_url)];
    let result = crawl(&entries, &test_options(false, 5, 2))
        .await
        .expect("Crawl failed");

    assert_eq!(result.outcomes.len(), 2);
    assert_eq!(result.outcomes[0].url, format!("{}/fast", base_url));
    assert_eq!(result.outcomes[1].url, format!("{}/slow", base_url));
}

#[tokio::test]
async fn test_duplicate_entries_fetched_once() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", "<html><body>once</body></html>", 1).await;

    let entries = [
        base_url.clone(),
        format!("{}/", base_url),
        format!("  {}/#intro ", base_url),
    ];
    let result = crawl(&entries, &test_options(false, 5, 4))
        .await
        .expect("Crawl failed");

    assert_eq!(result.outcomes.len(), 1);
    assert_eq!(result.discovered_count, 1);
}

#[tokio::test]
async fn test_cached_markup_avoids_second_request() {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, "/", "<html><body>cached</body></html>", 1).await;

    let options = test_options(true, 5, 4).with_link_discovery(LinkDiscovery::Cached);
    let result = crawl(&[format!("{}/", mock_server.uri())], &options)
        .await
        .expect("Crawl failed");

    assert_eq!(result.outcomes.len(), 1);
}

#[tokio::test]
async fn test_refetch_mode_requests_page_twice() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        r#"<html><body>refetched <a href="/next">next</a></body></html>"#,
        2,
    )
    .await;
    mount_page(&mock_server, "/next", "<html><body>next</body></html>", 2).await;

    let options = test_options(true, 5, 4).with_link_discovery(LinkDiscovery::Refetch);
    let result = crawl(&[format!("{}/", mock_server.uri())], &options)
        .await
        .expect("Crawl failed");

    assert_eq!(result.outcomes.len(), 2);
    assert_eq!(result.discovered_count, 2);
}

#[tokio::test]
async fn test_refetch_failure_contributes_no_links() {
    let mock_server = MockServer::start().await;

    // First request serves the page, every later one fails
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(
            r#"<html><body>first <a href="/next">next</a></body></html>"#.to_string(),
        ))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/next", "<html><body>next</body></html>", 0).await;

    let options = test_options(true, 5, 4).with_link_discovery(LinkDiscovery::Refetch);
    let result = crawl(&[format!("{}/", mock_server.uri())], &options)
        .await
        .expect("Crawl failed");

    assert_eq!(result.outcomes.len(), 1);
    assert_eq!(result.discovered_count, 1);

    let outcome = &result.outcomes[0];
    assert!(outcome.is_usable());
    assert!(outcome.error.is_none());
    assert!(outcome.text.contains("first"));
}

#[tokio::test]
async fn test_default_browser_headers_sent() {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, "/", "<html><body>hello</body></html>", 1).await;

    let result = crawl(&[format!("{}/", mock_server.uri())], &CrawlOptions::default())
        .await
        .expect("Crawl failed");
    assert!(result.outcomes[0].is_usable());

    let requests = mock_server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    let request = &requests[0];

    assert_eq!(
        header_text(request, "user-agent"),
        Some(squash(DEFAULT_USER_AGENT))
    );
    assert_eq!(header_text(request, "accept"), Some(squash(DEFAULT_ACCEPT)));
    assert_eq!(
        header_text(request, "accept-language"),
        Some(squash(DEFAULT_ACCEPT_LANGUAGE))
    );
}

#[tokio::test]
async fn test_budget_keeps_earliest_queued_entries() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/slow", "<html><body>slow</body></html>", 1).await;
    mount_page(&mock_server, "/fast", "<html><body>fast</body></html>", 0).await;

    let entries = [format!("{}/slow", base_url), format!("{}/fast", base_url)];
    let result = crawl(&entries, &test_options(false, 1, 2))
        .await
        .expect("Crawl failed");

    assert_eq!(result.outcomes.len(), 1);
    assert_eq!(result.outcomes[0].url, format!("{}/slow", base_url));
    assert_eq!(result.discovered_count, 2);
}

#[tokio::test]
async fn test_configured_headers_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "page-lexicon-test/1.0"))
        .and(header("accept-language", "de"))
        .respond_with(html_page("<html><body>hallo</body></html>".to_string()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let headers = UserAgentConfig {
        user_agent: "page-lexicon-test/1.0".to_string(),
        accept: "text/html".to_string(),
        accept_language: "de".to_string(),
    };
    let crawler = Crawler::new(test_options(false, 1, 1).with_headers(headers))
        .expect("Failed to create crawler");
    let result = crawler
        .crawl(&[format!("{}/", mock_server.uri())])
        .await
        .expect("Crawl failed");

    assert!(result.outcomes[0].is_usable());
}

#[tokio::test]
async fn test_pipeline_report() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<html><head><title>Ownership</title></head><body>
        <p>ownership borrowing</p>
        <a href="/b">crab</a>
        <a href="/missing">crab</a>
        </body></html>"#,
        1,
    )
    .await;
    mount_page(
        &mock_server,
        "/b",
        "<html><body><p>borrowing lifetimes</p></body></html>",
        1,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let mut config = Config::default();
    config.crawler.follow_links = true;
    config.crawler.timeout_ms = 2000;

    let report = pipeline::run(&[format!("{}/", base_url)], &config)
        .await
        .expect("Pipeline failed");

    let words: Vec<(&str, usize)> = report
        .word_frequencies
        .iter()
        .map(|w| (w.text.as_str(), w.value))
        .collect();
    assert_eq!(words, vec![("ownership", 2), ("borrowing", 2), ("crab", 2)]);
    assert_eq!(report.total_words, 6);
    assert_eq!(report.processed_urls, 2);
    assert_eq!(report.discovered_urls, 3);
    assert_eq!(
        report.errors,
        vec![format!("{}/missing: HTTP 404 Not Found", base_url)]
    );

    let json = report.to_json().expect("JSON rendering failed");
    assert!(json.contains("\"wordFrequencies\""));
    assert!(json.contains("\"processedUrls\": 2"));
}

#[tokio::test]
async fn test_pipeline_no_usable_content() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let entries = [
        format!("{}/one", mock_server.uri()),
        format!("{}/two", mock_server.uri()),
    ];
    let result = pipeline::run(&entries, &Config::default()).await;

    match result {
        Err(LexiconError::NoUsableContent { errors }) => {
            assert_eq!(errors.len(), 2);
            assert!(errors
                .iter()
                .all(|error| error.ends_with("HTTP 500 Internal Server Error")));
        }
        other => panic!("expected NoUsableContent, got {:?}", other),
    }
}
