use crate::error::{Result, ScrapeError};

/// Retrieves page bodies by URL
///
/// Every fetch resolves to either the body text or the reason it failed;
/// callers decide whether a failure is fatal.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>>;
}

/// Fetcher backed by a plain `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        ::log::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
