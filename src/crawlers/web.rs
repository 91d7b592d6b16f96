use crate::config::CrawlConfig;
use crate::error::CrawlError;
use crate::filter::{LinkFilter, normalize_url};
use crate::parsers::{self, PageContent, TextRenderer};
use crate::results::{CrawlReport, PageResult};
use reqwest::Client;
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::timeout;
use url::Url;

/// Crawls a site breadth-first from the configured seed URL and returns
/// the collected per-page report.
///
/// Every call is an independent run with fresh frontier/visited state.
/// Individual page failures are recorded in the report, never raised; the
/// only error is a seed URL that cannot be parsed (or bad configuration).
/// The run ends when the frontier is exhausted, the page budget is
/// reached, or the wall-clock deadline expires — all normal termination.
pub async fn crawl(config: &CrawlConfig) -> Result<CrawlReport, CrawlError> {
    ::log::info!("starting crawl of {}", config.seed_url);

    let seed = parse_seed(&config.seed_url)?;
    let seed_host = seed.host_str().unwrap_or_default().to_string();
    let filter = LinkFilter::new(&seed_host, &config.skip_patterns)?;
    let renderer = Arc::new(TextRenderer::new());

    let client = Client::builder().user_agent(&config.user_agent).build()?;

    let mut visited: HashSet<String> = HashSet::new();
    let mut frontier: VecDeque<String> = VecDeque::new();
    frontier.push_back(normalize_url(&seed));

    let mut report = CrawlReport::default();
    let started = Instant::now();

    // The deadline is checked between batches only; a dispatched batch is
    // allowed to finish.
    while !frontier.is_empty()
        && report.pages.len() < config.page_budget
        && started.elapsed() < config.crawl_deadline()
    {
        let budget_remaining = config.page_budget - report.pages.len();
        let batch_len = config.batch_size.min(budget_remaining).min(frontier.len());

        let mut handles = Vec::with_capacity(batch_len);
        for _ in 0..batch_len {
            let url = frontier.pop_front().expect("batch length bounded by queue");
            let client = client.clone();
            let renderer = Arc::clone(&renderer);
            let page_timeout = config.page_timeout();
            let task_url = url.clone();
            let handle = tokio::spawn(async move {
                fetch_page(&client, &task_url, page_timeout, &renderer).await
            });
            handles.push((url, handle));
        }

        for (url, handle) in handles {
            let (page, html) = match handle.await {
                Ok(outcome) => outcome,
                Err(e) => {
                    ::log::error!("fetch task for {} failed: {}", url, e);
                    (PageResult::failed(&url), None)
                }
            };

            // A URL is marked visited when its fetch attempt completes
            if !visited.insert(page.url.clone()) {
                ::log::debug!("skipping already fetched: {}", page.url);
                continue;
            }

            if let Some(html) = html {
                if let Ok(base) = Url::parse(&page.url) {
                    for link in parsers::extract_links(&html, &base, &filter) {
                        if !visited.contains(&link) && !frontier.contains(&link) {
                            ::log::debug!("queueing discovered link: {}", link);
                            frontier.push_back(link);
                        }
                    }
                }
            }

            if report.pages.len() < config.page_budget {
                report.pages.push(page);
            }
        }
    }

    ::log::info!(
        "crawl of {} finished: {} pages in {:.2}s",
        config.seed_url,
        report.pages_crawled(),
        started.elapsed().as_secs_f64()
    );
    Ok(report)
}

/// Parse and validate the seed URL
fn parse_seed(raw: &str) -> Result<Url, CrawlError> {
    let url = Url::parse(raw).map_err(|_| CrawlError::InvalidSeedUrl {
        url: raw.to_string(),
    })?;
    if url.host_str().is_none() {
        return Err(CrawlError::InvalidSeedUrl {
            url: raw.to_string(),
        });
    }
    Ok(url)
}

/// Outcome of one HTTP exchange, before content parsing
struct FetchedBody {
    status: u16,
    body: Option<String>,
    is_html: bool,
}

/// Fetch a single page and convert it into a `PageResult`.
///
/// Returns the record plus the raw HTML when the response is worth
/// scanning for links. Never fails: timeouts and network errors come back
/// as status-0 records, HTTP errors keep their status with empty content.
async fn fetch_page(
    client: &Client,
    url: &str,
    deadline: Duration,
    renderer: &TextRenderer,
) -> (PageResult, Option<String>) {
    let fetched = match timeout(deadline, fetch_body(client, url)).await {
        Ok(Ok(fetched)) => fetched,
        Ok(Err(e)) => {
            ::log::warn!("failed to fetch {}: {}", url, e);
            return (PageResult::failed(url), None);
        }
        Err(_) => {
            ::log::warn!("fetch of {} timed out", url);
            return (PageResult::failed(url), None);
        }
    };

    let Some(body) = fetched.body else {
        // Broken pages are surfaced by status downstream, not parsed
        return (PageResult::http_error(url, fetched.status), None);
    };

    let content = PageContent::from_html(&body, renderer);
    let page = PageResult {
        url: url.to_string(),
        status: fetched.status,
        markdown: content.markdown,
        title: content.title,
        description: content.description,
        keywords: content.keywords,
    };

    let html = fetched.is_html.then_some(body);
    (page, html)
}

/// Issue the GET and read the body for non-error responses
async fn fetch_body(client: &Client, url: &str) -> Result<FetchedBody, reqwest::Error> {
    let response = client.get(url).send().await?;
    let status = response.status().as_u16();

    if status >= 400 {
        return Ok(FetchedBody {
            status,
            body: None,
            is_html: false,
        });
    }

    let is_html = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.contains("html"))
        .unwrap_or(true);

    let body = response.text().await?;
    Ok(FetchedBody {
        status,
        body: Some(body),
        is_html,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(seed: &str) -> CrawlConfig {
        let mut config = CrawlConfig::new(seed);
        config.page_timeout_ms = 2_000;
        config.crawl_deadline_ms = 10_000;
        config
    }

    #[tokio::test]
    async fn test_single_page_no_links() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html><head><title>Home</title></head><body><h1>Welcome</h1></body></html>")
            .create_async()
            .await;

        let report = crawl(&test_config(&server.url())).await.unwrap();

        assert_eq!(report.pages_crawled(), 1);
        assert_eq!(report.pages[0].status, 200);
        assert_eq!(report.pages[0].title, "Home");
        assert!(report.pages[0].markdown.contains("# Welcome"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_page_budget_truncates_crawl_with_seed_first() {
        let mut server = mockito::Server::new_async().await;

        let links: String = (1..=10)
            .map(|i| format!(r#"<a href="/p{i}">page {i}</a>"#))
            .collect();
        let _seed_mock = server
            .mock("GET", "/")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body(format!("<html><body>{links}</body></html>"))
            .create_async()
            .await;
        let mut _page_mocks = Vec::new();
        for i in 1..=10 {
            _page_mocks.push(
                server
                    .mock("GET", format!("/p{i}").as_str())
                    .with_status(200)
                    .with_header("content-type", "text/html")
                    .with_body(format!("<html><body>content {i}</body></html>"))
                    .create_async()
                    .await,
            );
        }

        let report = crawl(&test_config(&server.url())).await.unwrap();

        assert_eq!(report.pages_crawled(), 6);
        let seed = normalize_url(&Url::parse(&server.url()).unwrap());
        assert_eq!(report.pages[0].url, seed);
        for (i, page) in report.pages[1..].iter().enumerate() {
            assert_eq!(page.url, format!("{}/p{}", seed, i + 1));
        }
    }

    #[tokio::test]
    async fn test_failed_page_recorded_not_dropped() {
        let mut server = mockito::Server::new_async().await;
        let _seed_mock = server
            .mock("GET", "/")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body(r#"<a href="/missing">m</a><a href="/ok">o</a>"#)
            .create_async()
            .await;
        let _missing_mock = server
            .mock("GET", "/missing")
            .with_status(404)
            .with_header("content-type", "text/html")
            .with_body("<html><body>not found</body></html>")
            .create_async()
            .await;
        let _ok_mock = server
            .mock("GET", "/ok")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html><body>fine</body></html>")
            .create_async()
            .await;

        let report = crawl(&test_config(&server.url())).await.unwrap();

        assert_eq!(report.pages_crawled(), 3);
        let missing = report
            .pages
            .iter()
            .find(|p| p.url.ends_with("/missing"))
            .unwrap();
        assert_eq!(missing.status, 404);
        // Error bodies are not parsed
        assert_eq!(missing.markdown, "");
        assert_eq!(missing.title, "");
        assert_eq!(report.broken_pages().count(), 1);
    }

    #[tokio::test]
    async fn test_timed_out_page_does_not_block_its_batch() {
        let mut server = mockito::Server::new_async().await;

        // A socket that accepts connections but never answers
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let slow_port = listener.local_addr().unwrap().port();
        tokio::spawn(async move {
            loop {
                let Ok((socket, _)) = listener.accept().await else {
                    break;
                };
                tokio::spawn(async move {
                    let _socket = socket;
                    tokio::time::sleep(Duration::from_secs(60)).await;
                });
            }
        });

        let _seed_mock = server
            .mock("GET", "/")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body(format!(
                r#"<a href="http://127.0.0.1:{slow_port}/slow">s</a><a href="/fast">f</a>"#
            ))
            .create_async()
            .await;
        let _fast_mock = server
            .mock("GET", "/fast")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html><body>quick</body></html>")
            .create_async()
            .await;

        let mut config = test_config(&server.url());
        config.page_timeout_ms = 300;
        let report = crawl(&config).await.unwrap();

        assert_eq!(report.pages_crawled(), 3);
        let slow = report
            .pages
            .iter()
            .find(|p| p.url.ends_with("/slow"))
            .unwrap();
        assert_eq!(slow.status, 0);
        assert_eq!(slow.markdown, "");
        assert_eq!(slow.title, "");
        let fast = report
            .pages
            .iter()
            .find(|p| p.url.ends_with("/fast"))
            .unwrap();
        assert_eq!(fast.status, 200);
    }

    #[tokio::test]
    async fn test_equivalent_urls_fetched_once() {
        let mut server = mockito::Server::new_async().await;
        let _seed_mock = server
            .mock("GET", "/")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body(r#"<a href="/about">a</a><a href="/about/">b</a>"#)
            .create_async()
            .await;
        let about = server
            .mock("GET", "/about")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html><body>about</body></html>")
            .expect(1)
            .create_async()
            .await;

        let report = crawl(&test_config(&server.url())).await.unwrap();

        assert_eq!(report.pages_crawled(), 2);
        about.assert_async().await;
    }

    #[tokio::test]
    async fn test_unreachable_seed_yields_failed_record() {
        // Grab a free port, then close it again
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let report = crawl(&test_config(&format!("http://127.0.0.1:{port}")))
            .await
            .unwrap();

        assert_eq!(report.pages_crawled(), 1);
        assert_eq!(report.pages[0].status, 0);
        assert_eq!(report.pages[0].markdown, "");
    }

    #[tokio::test]
    async fn test_expired_deadline_yields_empty_report() {
        let mut config = test_config("https://example.com");
        config.crawl_deadline_ms = 0;

        let report = crawl(&config).await.unwrap();
        assert_eq!(report.pages_crawled(), 0);
    }

    #[tokio::test]
    async fn test_invalid_seed_is_fatal() {
        let err = crawl(&test_config("not a url")).await.unwrap_err();
        assert!(matches!(err, CrawlError::InvalidSeedUrl { .. }));
    }
}
