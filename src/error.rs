use thiserror::Error;

/// Errors raised while scraping the knowledge base
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{url} returned HTTP status {status}")]
    Status { url: String, status: u16 },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    #[error("Base URL must be an absolute http(s) URL: {0}")]
    UnsupportedScheme(String),
    #[error("Invalid selector for {field}: {selector}")]
    InvalidSelector { field: &'static str, selector: String },
    #[error("No category links found")]
    NoCategories,
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
