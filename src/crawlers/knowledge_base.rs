use crate::config::ScraperConfig;
use crate::error::{Result, ScrapeError};
use crate::fetch::Fetcher;
use crate::links::LinkSet;
use crate::output::OutputFile;
use crate::parsers::html::{self, Selectors};
use crate::results::{ArticleRecord, RunSummary};
use crate::utils::resolve_url;

/// Sequential walk over a help-center site: root page, category pages,
/// then one fetch per article
pub struct KnowledgeBaseCrawler<F> {
    base_url: String,
    selectors: Selectors,
    output: OutputFile,
    fetcher: F,
}

impl<F: Fetcher> KnowledgeBaseCrawler<F> {
    /// Create a crawler from a validated configuration
    pub fn new(config: &ScraperConfig, fetcher: F) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            base_url: config.base_url().to_string(),
            selectors: Selectors::compile(&config.selectors)?,
            output: OutputFile::new(&config.output_file),
            fetcher,
        })
    }

    #[cfg(test)]
    pub(crate) fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetches the root page and returns absolute category URLs in first-seen order
    ///
    /// A failed fetch or an empty result is returned as an error; nothing
    /// downstream can proceed without categories.
    pub async fn discover_categories(&self) -> Result<Vec<String>> {
        ::log::info!("Finding categories on the main page: {}", self.base_url);

        let html = self.fetcher.fetch(&self.base_url).await?;

        let categories = html::category_hrefs(&html, &self.selectors)
            .into_iter()
            .map(|href| format!("{}{}", self.base_url, href))
            .collect::<LinkSet>();

        if categories.is_empty() {
            return Err(ScrapeError::NoCategories);
        }

        Ok(categories.into_vec())
    }

    /// Collects article links from every category page, deduplicated across
    /// the whole run in first-seen order
    ///
    /// A category page that fails to load, or has no article container,
    /// contributes nothing.
    pub async fn discover_articles(&self, categories: &[String]) -> LinkSet {
        let mut articles = LinkSet::new();

        for category_url in categories {
            ::log::info!("Finding articles in category: {}", category_url);

            let html = match self.fetcher.fetch(category_url).await {
                Ok(html) => html,
                Err(e) => {
                    ::log::warn!("Could not fetch category page {}: {}", category_url, e);
                    continue;
                }
            };

            let before = articles.len();
            articles.extend(html::article_hrefs(&html, &self.selectors));
            ::log::debug!(
                "Category {} added {} new article links",
                category_url,
                articles.len() - before
            );
        }

        articles
    }

    /// Fetches and parses one article
    ///
    /// Returns `None` when the page cannot be fetched.
    pub async fn scrape_article(&self, link: &str) -> Option<ArticleRecord> {
        let url = resolve_url(&self.base_url, link);

        let html = match self.fetcher.fetch(&url).await {
            Ok(html) => html,
            Err(e) => {
                ::log::warn!("Could not fetch article {}: {}", url, e);
                return None;
            }
        };

        let parsed = html::parse_article(&html, &self.selectors);
        if parsed.title.is_none() {
            ::log::debug!("No title found in {}", url);
        }
        if parsed.content.is_none() {
            ::log::debug!("No content found in {}", url);
        }

        Some(ArticleRecord::from_parsed(url, &parsed))
    }

    /// Runs the whole scrape, appending one record per article to the output file
    ///
    /// The output file is cleared once categories are known, so a run that
    /// aborts at the root page leaves any previous output untouched.
    pub async fn run(&self) -> Result<RunSummary> {
        let categories = self.discover_categories().await?;
        ::log::info!("Found {} categories", categories.len());

        self.output.reset()?;

        let articles = self.discover_articles(&categories).await;
        ::log::info!("Found a total of {} articles to scrape", articles.len());

        let mut summary = RunSummary {
            categories: categories.len(),
            articles_found: articles.len(),
            articles_scraped: 0,
        };

        for (index, link) in articles.iter().enumerate() {
            ::log::info!("Scraping ({}/{}): {}", index + 1, articles.len(), link);

            if let Some(record) = self.scrape_article(link).await {
                self.output.append(&record.to_string())?;
                summary.articles_scraped += 1;
            }
        }

        ::log::info!(
            "Scraping complete! Successfully scraped {} articles",
            summary.articles_scraped
        );

        Ok(summary)
    }
}
