use crate::error::{Result, ScrapeError};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use url::Url;

/// Configuration for a knowledge base scrape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Site root; relative links are resolved by plain concatenation onto it
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Flat text file that receives one record per scraped article
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,

    /// CSS selectors used to walk the site
    #[serde(default)]
    pub selectors: SelectorConfig,
}

/// CSS selectors for each step of the walk
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Category anchors on the root page
    pub category_link: String,

    /// Container holding article links on a category page
    pub article_container: String,

    /// Article links inside the container
    pub article_link: String,

    /// Article heading
    pub title: String,

    /// Article body container
    pub content: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            category_link: "a.kb-index__category".to_string(),
            article_container: "div.kb-categories".to_string(),
            article_link: "a[href]".to_string(),
            title: "h1".to_string(),
            content: "div.kb-article".to_string(),
        }
    }
}

/// Default site root
fn default_base_url() -> String {
    "https://support.grip.events".to_string()
}

/// Default output file
fn default_output_file() -> PathBuf {
    PathBuf::from("knowledge_base.txt")
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            output_file: default_output_file(),
            selectors: SelectorConfig::default(),
        }
    }
}

impl ScraperConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Override the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the output file
    pub fn with_output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = path.into();
        self
    }

    /// Base URL without a trailing slash, ready for `base + "/path"`
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Check that the base URL is an absolute http(s) URL
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(self.base_url())?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            _ => Err(ScrapeError::UnsupportedScheme(self.base_url.clone())),
        }
    }
}
