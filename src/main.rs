use audit_crawler::{Crawl, CrawlError};
use clap::Parser;

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    ::log::info!("starting crawl for: {}", args.url);

    let crawl = if let Some(path) = &args.config_file {
        match Crawl::new(&args.url).with_config_file(path) {
            Ok(crawl) => crawl,
            Err(e) => {
                eprintln!("failed to load config file {}: {}", path, e);
                std::process::exit(1);
            }
        }
    } else {
        Crawl::new(&args.url)
            .with_page_budget(args.budget)
            .with_batch_size(args.batch)
            .with_page_timeout_ms(args.page_timeout_ms)
            .with_deadline_ms(args.deadline_ms)
    };

    let start_time = std::time::Instant::now();
    let report = match crawl.run().await {
        Ok(report) => report,
        Err(e @ CrawlError::InvalidSeedUrl { .. }) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("crawl failed to start: {}", e);
            std::process::exit(1);
        }
    };

    for (i, page) in report.pages.iter().enumerate() {
        ::log::info!("page {}: {} (status {})", i + 1, page.url, page.status);
    }

    let duration = start_time.elapsed();
    ::log::info!(
        "crawl complete - {} pages in {:.2} seconds, {} broken",
        report.pages_crawled(),
        duration.as_secs_f64(),
        report.broken_pages().count()
    );

    // The report JSON is the interface the rest of the audit pipeline reads
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("failed to serialize report: {}", e);
            std::process::exit(1);
        }
    }
}
