use audit_crawler::{Crawl, CrawlConfig};
use clap::Parser;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON crawl configuration file
    #[arg(short, long)]
    config: String,

    /// Override the page budget
    #[arg(short, long)]
    budget: Option<usize>,

    /// Override the whole-crawl deadline in milliseconds
    #[arg(long)]
    deadline_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logger
    env_logger::init();

    // Parse command line arguments
    let args = Args::parse();

    // Load configuration from file
    let config_path = PathBuf::from(&args.config);
    let config = CrawlConfig::from_file(config_path)?;

    println!("Loaded crawl configuration:");
    println!("  Seed URL: {}", config.seed_url);
    println!("  Page budget: {}", config.page_budget);
    println!("  Batch size: {}", config.batch_size);
    println!("  Skip patterns: {}", config.skip_patterns.len());

    let mut crawl = Crawl::new(&config.seed_url).with_config(config);

    // Apply overrides if specified
    if let Some(budget) = args.budget {
        println!("Overriding page budget: {}", budget);
        crawl = crawl.with_page_budget(budget);
    }
    if let Some(deadline) = args.deadline_ms {
        println!("Overriding crawl deadline: {}ms", deadline);
        crawl = crawl.with_deadline_ms(deadline);
    }

    let start_time = std::time::Instant::now();
    let report = crawl.run().await?;

    for (i, page) in report.pages.iter().enumerate() {
        println!("Page {}: {} (status {})", i + 1, page.url, page.status);
    }

    println!(
        "Crawling complete. Fetched {} pages in {:.2} seconds.",
        report.pages_crawled(),
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
