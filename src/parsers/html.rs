use crate::config::SelectorConfig;
use crate::error::{Result, ScrapeError};
use crate::parsers::ParsedArticle;
use scraper::{ElementRef, Html, Selector};

/// Compiled selectors for each step of the walk
#[derive(Debug, Clone)]
pub struct Selectors {
    pub category_link: Selector,
    pub article_container: Selector,
    pub article_link: Selector,
    pub title: Selector,
    pub content: Selector,
}

impl Selectors {
    /// Compile every selector in the configuration
    pub fn compile(config: &SelectorConfig) -> Result<Self> {
        Ok(Self {
            category_link: compile("category_link", &config.category_link)?,
            article_container: compile("article_container", &config.article_container)?,
            article_link: compile("article_link", &config.article_link)?,
            title: compile("title", &config.title)?,
            content: compile("content", &config.content)?,
        })
    }
}

fn compile(field: &'static str, selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|_| ScrapeError::InvalidSelector {
        field,
        selector: selector.to_string(),
    })
}

/// Extracts category hrefs from the root page, in document order
///
/// Anchors without an `href` (or with an empty one) are skipped. Duplicates
/// are kept; the caller decides how to dedupe.
pub fn category_hrefs(html: &str, selectors: &Selectors) -> Vec<String> {
    let doc = Html::parse_document(html);

    let hrefs = doc
        .select(&selectors.category_link)
        .filter_map(|e| e.value().attr("href"))
        .filter(|href| !href.is_empty())
        .map(|s| s.to_string())
        .collect::<Vec<String>>();

    ::log::debug!("Root page has {} category anchors", hrefs.len());
    hrefs
}

/// Extracts article hrefs from the first article container on a category page
///
/// Returns an empty list when the page has no container. Same-page anchors
/// (`#...`) are skipped.
pub fn article_hrefs(html: &str, selectors: &Selectors) -> Vec<String> {
    let doc = Html::parse_document(html);

    let Some(container) = doc.select(&selectors.article_container).next() else {
        ::log::debug!("Category page has no article container");
        return Vec::new();
    };

    container
        .select(&selectors.article_link)
        .filter_map(|e| e.value().attr("href"))
        .filter(|href| !href.is_empty() && !href.starts_with('#'))
        .map(|s| s.to_string())
        .collect()
}

/// Extracts the heading and body text from an article page
pub fn parse_article(html: &str, selectors: &Selectors) -> ParsedArticle {
    let doc = Html::parse_document(html);

    let title = doc.select(&selectors.title).next().map(stripped_text);
    let content = doc.select(&selectors.content).next().map(stripped_text);

    ParsedArticle { title, content }
}

/// Elements whose text is never part of the readable page
const NON_TEXT_ELEMENTS: [&str; 3] = ["script", "style", "template"];

/// Text of every descendant text node outside `script`, `style` and
/// `template` elements, each trimmed, empty ones dropped, concatenated
/// without a separator
pub fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .descendants()
        .filter(|node| {
            !node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|e| NON_TEXT_ELEMENTS.contains(&e.name()))
            })
        })
        .filter_map(|node| node.value().as_text())
        .map(|text| text.trim())
        .filter(|s| !s.is_empty())
        .collect()
}
