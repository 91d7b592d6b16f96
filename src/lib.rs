// Re-export modules
pub mod config;
pub mod crawlers;
pub mod error;
pub mod filter;
pub mod parsers;
pub mod results;

// Re-export commonly used types for convenience
pub use config::CrawlConfig;
pub use error::CrawlError;
pub use results::{CrawlReport, PageResult};

/// Builder for configuring and running one site crawl
///
/// ```no_run
/// use audit_crawler::Crawl;
///
/// # async fn run() -> Result<(), audit_crawler::CrawlError> {
/// let report = Crawl::new("https://example.com")
///     .with_page_budget(6)
///     .with_batch_size(4)
///     .run()
///     .await?;
/// println!("fetched {} pages", report.pages_crawled());
/// # Ok(())
/// # }
/// ```
pub struct Crawl {
    config: CrawlConfig,
}

impl Crawl {
    /// Create a new crawl for the given seed URL with default settings
    pub fn new(seed_url: &str) -> Self {
        Self {
            config: CrawlConfig::new(seed_url),
        }
    }

    /// Replace the whole configuration (the seed URL travels with it)
    pub fn with_config(mut self, config: CrawlConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(
        self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let config = CrawlConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Load configuration from a JSON string
    pub fn with_config_str(self, json: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config = CrawlConfig::from_json(json)?;
        Ok(self.with_config(config))
    }

    /// Set the maximum number of pages to fetch
    pub fn with_page_budget(mut self, page_budget: usize) -> Self {
        self.config.page_budget = page_budget;
        self
    }

    /// Set the number of concurrent fetches per batch
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.config.batch_size = batch_size;
        self
    }

    /// Set the per-page fetch deadline in milliseconds
    pub fn with_page_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.config.page_timeout_ms = timeout_ms;
        self
    }

    /// Set the whole-crawl wall-clock deadline in milliseconds
    pub fn with_deadline_ms(mut self, deadline_ms: u64) -> Self {
        self.config.crawl_deadline_ms = deadline_ms;
        self
    }

    /// Override the User-Agent header
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.config.user_agent = user_agent.to_string();
        self
    }

    /// Override the link skip patterns
    pub fn with_skip_patterns(mut self, patterns: Vec<String>) -> Self {
        self.config.skip_patterns = patterns;
        self
    }

    /// Run the crawl to completion and return the report
    pub async fn run(self) -> Result<CrawlReport, CrawlError> {
        crawlers::web::crawl(&self.config).await
    }
}
