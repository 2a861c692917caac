// Re-export modules
pub mod config;
pub mod crawlers;
pub mod error;
pub mod fetch;
pub mod links;
pub mod output;
pub mod parsers;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::ScraperConfig;
pub use crawlers::KnowledgeBaseCrawler;
pub use error::{Result, ScrapeError};
pub use fetch::{Fetcher, HttpFetcher};
pub use results::{ArticleRecord, RunSummary};

/// Scrape the knowledge base described by `config` over HTTP
pub async fn scrape(config: &ScraperConfig) -> Result<RunSummary> {
    let fetcher = HttpFetcher::new()?;
    let crawler = KnowledgeBaseCrawler::new(config, fetcher)?;
    crawler.run().await
}
