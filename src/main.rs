use anyhow::{Context, Result};
use tracing::Level;
use uni_scrape::config::ScraperConfig;
use uni_scrape::fetch::HttpFetcher;
use uni_scrape::pipeline::Scraper;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let config = ScraperConfig::default();
    let fetcher = HttpFetcher::new(&config.user_agent).context("Failed to build HTTP client")?;

    Scraper::new(config, fetcher)
        .run()
        .context("Failed to export report")?;

    Ok(())
}
