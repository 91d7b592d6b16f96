use serde::{Deserialize, Serialize};

/// Output record for one fetched URL.
///
/// `status` is the HTTP status code, or 0 when the fetch failed at the
/// network level (connection error, timeout, unreadable response). Failed
/// fetches carry empty text fields but are still part of the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResult {
    /// Normalized URL the fetch was issued for
    pub url: String,

    /// HTTP status code, or 0 for a network failure
    pub status: u16,

    /// Page body converted to Markdown-like text
    pub markdown: String,

    /// Contents of the `<title>` element
    pub title: String,

    /// Meta description, if present
    pub description: String,

    /// Meta keywords, if present
    pub keywords: String,
}

impl PageResult {
    /// Record for a page that could not be fetched at all
    pub fn failed(url: &str) -> Self {
        Self {
            url: url.to_string(),
            status: 0,
            markdown: String::new(),
            title: String::new(),
            description: String::new(),
            keywords: String::new(),
        }
    }

    /// Record for an HTTP error response; the body is not parsed
    pub fn http_error(url: &str, status: u16) -> Self {
        Self {
            status,
            ..Self::failed(url)
        }
    }

    /// True when downstream analysis should flag this page as broken
    pub fn is_broken(&self) -> bool {
        self.status == 404 || self.status >= 500
    }
}

/// Ordered collection of per-page results for one crawl run.
///
/// Insertion order reflects breadth-first discovery order; the seed's own
/// result is always first when it completed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrawlReport {
    /// Per-page records in discovery order
    pub pages: Vec<PageResult>,
}

impl CrawlReport {
    /// Number of pages fetched (what the persistence step stores)
    pub fn pages_crawled(&self) -> usize {
        self.pages.len()
    }

    /// Pages the broken-link check should surface
    pub fn broken_pages(&self) -> impl Iterator<Item = &PageResult> {
        self.pages.iter().filter(|p| p.is_broken())
    }
}
