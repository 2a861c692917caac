use crate::parsers::ParsedArticle;
use std::fmt;

/// A scraped article, rendered as one block of the output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRecord {
    /// Heading text, or the placeholder
    pub title: String,

    /// Absolute URL the article was fetched from
    pub url: String,

    /// Body text, or the placeholder
    pub content: String,
}

impl ArticleRecord {
    /// Create a new record
    pub fn new(title: String, url: String, content: String) -> Self {
        Self {
            title,
            url,
            content,
        }
    }

    /// Build a record from a parsed page, filling in placeholders
    pub fn from_parsed(url: String, parsed: &ParsedArticle) -> Self {
        Self::new(
            parsed.title_or_default().to_string(),
            url,
            parsed.content_or_default().to_string(),
        )
    }
}

impl fmt::Display for ArticleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}\n\nURL: {}\n\nContent:\n{}\n\n---\n\n",
            self.title, self.url, self.content
        )
    }
}

/// Counts reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Distinct category pages found on the root page
    pub categories: usize,

    /// Distinct article links found across all categories
    pub articles_found: usize,

    /// Articles fetched and written to the output file
    pub articles_scraped: usize,
}
