use audit_crawler::Crawl;
use clap::Parser;
use std::error::Error;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// URL to crawl
    #[arg(short, long)]
    url: String,

    /// JSON configuration string
    #[arg(short, long)]
    config: Option<String>,

    /// Maximum number of pages to fetch
    #[arg(short, long)]
    budget: Option<usize>,

    /// Number of concurrent fetches per batch
    #[arg(long)]
    batch: Option<usize>,

    /// Per-page fetch deadline in milliseconds
    #[arg(long)]
    page_timeout_ms: Option<u64>,

    /// Whole-crawl deadline in milliseconds
    #[arg(long)]
    deadline_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logger
    env_logger::init();

    // Parse command line arguments
    let args = Args::parse();

    let mut crawl = Crawl::new(&args.url);

    if let Some(json) = &args.config {
        crawl = crawl.with_config_str(json)?;
    }
    if let Some(budget) = args.budget {
        crawl = crawl.with_page_budget(budget);
    }
    if let Some(batch) = args.batch {
        crawl = crawl.with_batch_size(batch);
    }
    if let Some(timeout) = args.page_timeout_ms {
        crawl = crawl.with_page_timeout_ms(timeout);
    }
    if let Some(deadline) = args.deadline_ms {
        crawl = crawl.with_deadline_ms(deadline);
    }

    let start_time = std::time::Instant::now();
    let report = crawl.run().await?;

    for page in &report.pages {
        println!("{} (status {}): {}", page.url, page.status, page.title);
    }

    println!(
        "Crawling complete. Fetched {} pages in {:.2} seconds.",
        report.pages_crawled(),
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
