use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// Configuration for a single crawl run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlConfig {
    /// URL to start crawling from
    pub seed_url: String,

    /// Maximum number of pages fetched in one run
    #[serde(default = "default_page_budget")]
    pub page_budget: usize,

    /// Maximum number of concurrent fetches per batch
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Per-page fetch deadline in milliseconds
    #[serde(default = "default_page_timeout_ms")]
    pub page_timeout_ms: u64,

    /// Wall-clock deadline for the whole crawl in milliseconds
    #[serde(default = "default_crawl_deadline_ms")]
    pub crawl_deadline_ms: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Regex patterns matched against a link's path; matches are never
    /// enqueued. Defaults cover static assets, admin/API/build-output
    /// paths and legal boilerplate pages.
    #[serde(default = "default_skip_patterns")]
    pub skip_patterns: Vec<String>,
}

/// Default value for page_budget
fn default_page_budget() -> usize {
    6
}

/// Default value for batch_size
fn default_batch_size() -> usize {
    4
}

/// Default value for page_timeout_ms
fn default_page_timeout_ms() -> u64 {
    5_000
}

/// Default value for crawl_deadline_ms
fn default_crawl_deadline_ms() -> u64 {
    30_000
}

/// Default desktop browser User-Agent
fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
        .to_string()
}

/// Default skip patterns, matched against the resolved path
fn default_skip_patterns() -> Vec<String> {
    vec![
        // Static assets: images, stylesheets, scripts, fonts, archives, media
        r"(?i)\.(jpe?g|png|gif|webp|avif|bmp|svg|ico|css|js|mjs|map|woff2?|ttf|otf|eot|zip|tar|gz|tgz|rar|7z|mp3|wav|ogg|mp4|avi|mov|wmv|webm|pdf)$".to_string(),
        // Admin, API and build-output paths
        r"(?:^|/)(?:wp-admin|wp-json|feed|xmlrpc)(?:/|$)|(?:api|_next|static|assets)/".to_string(),
        // Legal and boilerplate pages
        r"(?:^|/)(?:privacy-policy|terms-of-service|cookie-policy|legal)(?:/|$)|(?:^|/)(?:sitemap\.xml|robots\.txt)$".to_string(),
    ]
}

impl CrawlConfig {
    /// Create a new configuration with default values
    pub fn new(seed_url: &str) -> Self {
        Self {
            seed_url: seed_url.to_string(),
            page_budget: default_page_budget(),
            batch_size: default_batch_size(),
            page_timeout_ms: default_page_timeout_ms(),
            crawl_deadline_ms: default_crawl_deadline_ms(),
            user_agent: default_user_agent(),
            skip_patterns: default_skip_patterns(),
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Per-page fetch deadline as a Duration
    pub fn page_timeout(&self) -> Duration {
        Duration::from_millis(self.page_timeout_ms)
    }

    /// Whole-crawl deadline as a Duration
    pub fn crawl_deadline(&self) -> Duration {
        Duration::from_millis(self.crawl_deadline_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CrawlConfig::new("https://example.com");
        assert_eq!(config.page_budget, 6);
        assert_eq!(config.batch_size, 4);
        assert_eq!(config.page_timeout_ms, 5_000);
        assert_eq!(config.crawl_deadline_ms, 30_000);
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
        assert_eq!(config.skip_patterns.len(), 3);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            CrawlConfig::from_json(r#"{"seed_url": "https://example.com", "page_budget": 2}"#)
                .unwrap();
        assert_eq!(config.seed_url, "https://example.com");
        assert_eq!(config.page_budget, 2);
        assert_eq!(config.batch_size, 4);
        assert_eq!(config.crawl_deadline_ms, 30_000);
    }

    #[test]
    fn test_missing_seed_is_an_error() {
        assert!(CrawlConfig::from_json(r#"{"page_budget": 2}"#).is_err());
    }
}
