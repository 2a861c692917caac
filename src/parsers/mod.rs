pub mod html;


/// Placeholder title for articles without a heading
pub const NO_TITLE: &str = "No Title";

/// Placeholder content for articles without a body container
pub const NO_CONTENT: &str = "No Content";

/// Result of parsing an article page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArticle {
    /// Heading text, if the page has a heading
    pub title: Option<String>,
    /// Body text, if the page has a body container
    pub content: Option<String>,
}

impl ParsedArticle {
    /// Heading text or the placeholder
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or(NO_TITLE)
    }

    /// Body text or the placeholder
    pub fn content_or_default(&self) -> &str {
        self.content.as_deref().unwrap_or(NO_CONTENT)
    }
}
