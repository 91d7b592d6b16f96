use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "audit-crawler")]
#[command(about = "Same-origin crawler that turns a site into an audit-ready page report")]
#[command(version)]
pub struct Args {
    /// Seed URL to crawl
    pub url: String,

    /// Maximum number of pages to fetch
    #[arg(short, long, default_value_t = 6)]
    pub budget: usize,

    /// Number of concurrent fetches per batch
    #[arg(long, default_value_t = 4)]
    pub batch: usize,

    /// Per-page fetch deadline in milliseconds
    #[arg(long, default_value_t = 5_000)]
    pub page_timeout_ms: u64,

    /// Whole-crawl deadline in milliseconds
    #[arg(long, default_value_t = 30_000)]
    pub deadline_ms: u64,

    /// Path to a JSON configuration file (overrides the flags above)
    #[arg(short, long)]
    pub config_file: Option<String>,
}
