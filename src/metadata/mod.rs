//! Page metadata extraction.
//!
//! Each field walks a fixed fallback chain and takes the first non-empty
//! source. Nothing here can fail; an exhausted chain yields a default.

pub mod dom_extraction;
pub mod meta_tags;

use crate::page::PageDocument;

/// Title used when no source provides one.
pub const UNTITLED: &str = "Untitled";

/// Metadata fields of an [`ExtractionResult`](crate::ExtractionResult).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    /// Trimmed title, `"Untitled"` when every source is missing.
    pub title: String,
    /// Description, untrimmed, possibly empty.
    pub description: String,
    /// Trimmed author, possibly empty.
    pub author: String,
    /// Publication date as written on the page, possibly empty.
    pub publish_date: String,
}

/// Extracts all metadata fields from a page.
///
/// Chains, in priority order:
/// - title: `og:title`, `twitter:title`, `<title>`, first `<h1>`
/// - description: `og:description`, meta description
/// - author: meta author, `article:author`, `[rel=author]`, `.author-name`, `.byline`
/// - date: `article:published_time`, meta `publish-date`, first `<time datetime>`
#[must_use]
pub fn extract_metadata<P: PageDocument>(page: &P) -> PageMetadata {
    PageMetadata {
        title: extract_title(page),
        description: extract_description(page),
        author: extract_author(page),
        publish_date: extract_publish_date(page),
    }
}

/// Title chain, trimmed after selection.
///
/// A source counts as present when its raw value is non-empty, even if it is
/// only whitespace. So `<h1>   </h1>` ends the chain and yields `""`, and
/// `"Untitled"` is used only when every source is missing or empty.
pub fn extract_title<P: PageDocument>(page: &P) -> String {
    meta_tags::meta_content(page, meta_tags::OG_TITLE)
        .or_else(|| meta_tags::meta_content(page, meta_tags::TWITTER_TITLE))
        .or_else(|| dom_extraction::document_title(page))
        .or_else(|| dom_extraction::element_text(page, dom_extraction::HEADING))
        .map_or_else(|| UNTITLED.to_string(), |title| title.trim().to_string())
}

/// Description chain.
pub fn extract_description<P: PageDocument>(page: &P) -> String {
    meta_tags::meta_content(page, meta_tags::OG_DESCRIPTION)
        .or_else(|| meta_tags::meta_content(page, meta_tags::DESCRIPTION))
        .unwrap_or_default()
}

/// Author chain, trimmed after selection.
pub fn extract_author<P: PageDocument>(page: &P) -> String {
    meta_tags::meta_content(page, meta_tags::AUTHOR)
        .or_else(|| meta_tags::meta_content(page, meta_tags::ARTICLE_AUTHOR))
        .or_else(|| dom_extraction::element_text(page, dom_extraction::REL_AUTHOR))
        .or_else(|| dom_extraction::element_text(page, dom_extraction::AUTHOR_NAME))
        .or_else(|| dom_extraction::element_text(page, dom_extraction::BYLINE))
        .map(|author| author.trim().to_string())
        .unwrap_or_default()
}

/// Publication date chain. The value is not parsed or validated.
pub fn extract_publish_date<P: PageDocument>(page: &P) -> String {
    meta_tags::meta_content(page, meta_tags::ARTICLE_PUBLISHED_TIME)
        .or_else(|| meta_tags::meta_content(page, meta_tags::PUBLISH_DATE))
        .or_else(|| dom_extraction::element_attribute(page, dom_extraction::TIME, "datetime"))
        .unwrap_or_default()
}
