use thiserror::Error;

/// Errors that can abort a crawl before any pages are fetched.
///
/// Individual page failures are never errors: they are recorded in the
/// report as `PageResult` entries with status 0 (network failure or
/// timeout) or the HTTP status code.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// The seed URL could not be parsed, or has no hostname
    #[error("invalid seed URL: {url}")]
    InvalidSeedUrl { url: String },

    /// A configured skip pattern is not a valid regex
    #[error("invalid skip pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
