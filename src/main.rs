use clap::Parser;

mod args;
use args::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging, showing progress unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command-line arguments
    let args = Args::parse();

    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Failed to load configuration: {}", e);
            return;
        }
    };

    ::log::info!("Starting to scrape the knowledge base at {}", config.base_url());

    match kb_scrape::scrape(&config).await {
        Ok(summary) => {
            ::log::info!(
                "Scraped {} of {} articles from {} categories",
                summary.articles_scraped,
                summary.articles_found,
                summary.categories
            );
            ::log::info!(
                "All the information has been saved to '{}'",
                config.output_file.display()
            );
        }
        Err(e) => {
            ::log::error!("Scrape aborted: {}", e);
        }
    }
}
