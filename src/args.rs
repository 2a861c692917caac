use clap::Parser;
use kb_scrape::ScraperConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kb-scrape")]
#[command(about = "Scrapes help-center articles into a single text file")]
#[command(version)]
pub struct Args {
    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the site root (e.g. https://support.grip.events)
    #[arg(short, long)]
    pub base_url: Option<String>,

    /// Override the output file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Build the configuration: flags over config file over built-in defaults
    pub fn into_config(self) -> kb_scrape::Result<ScraperConfig> {
        let mut config = match &self.config {
            Some(path) => ScraperConfig::from_file(path)?,
            None => ScraperConfig::default(),
        };

        if let Some(base_url) = self.base_url {
            config = config.with_base_url(base_url);
        }
        if let Some(output) = self.output {
            config = config.with_output_file(output);
        }

        Ok(config)
    }
}
