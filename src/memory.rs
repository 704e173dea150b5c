//! Memory records built from captured pages.
//!
//! A saved page becomes a markdown memory: a short preamble with the source
//! link and available metadata, a rule, then the extracted content.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::{Error, Result};
use crate::extractor::extract_document;
use crate::options::ExtractOptions;
use crate::page::PageDocument;
use crate::result::ExtractionResult;

/// Title used when a captured page has none.
pub const FALLBACK_MEMORY_TITLE: &str = "Saved Page";

/// Tag attached to every memory created from a captured page.
pub const CAPTURE_TAG: &str = "saved-from-extension";

/// Body of a create-memory request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateMemoryRequest {
    /// Organization that owns the memory.
    pub org_id: String,
    /// Memory title.
    pub title: String,
    /// Markdown body.
    pub content: String,
    /// Same text as `content`; the service renders it.
    pub content_html: String,
    /// Tags, `["saved-from-extension"]` for captures.
    pub tags: Vec<String>,
    /// Display color.
    pub color: String,
    /// Publication status.
    pub status: String,
}

impl CreateMemoryRequest {
    /// Builds a published, default-colored request for `content`.
    #[must_use]
    pub fn new(org_id: &str, title: &str, content: String) -> Self {
        Self {
            org_id: org_id.to_string(),
            title: title.to_string(),
            content_html: content.clone(),
            content,
            tags: vec![CAPTURE_TAG.to_string()],
            color: "default".to_string(),
            status: "published".to_string(),
        }
    }
}

/// Renders an extraction as a markdown memory body.
///
/// Empty metadata fields are left out of the preamble.
///
/// # Example
///
/// ```rust
/// use palace_capture::{memory::format_memory_content, ExtractionResult};
///
/// let page = ExtractionResult {
///     url: "https://example.com/".into(),
///     author: "Ann".into(),
///     content: "Body".into(),
///     ..ExtractionResult::default()
/// };
/// assert_eq!(
///     format_memory_content(&page),
///     "**Source:** [https://example.com/](https://example.com/)\n\n**Author:** Ann\n\n---\n\nBody"
/// );
/// ```
#[must_use]
pub fn format_memory_content(page: &ExtractionResult) -> String {
    let mut markdown = String::new();

    if !page.url.is_empty() {
        markdown.push_str(&format!("**Source:** [{0}]({0})\n\n", page.url));
    }
    if !page.description.is_empty() {
        markdown.push_str(&format!("> {}\n\n", page.description));
    }
    if !page.author.is_empty() {
        markdown.push_str(&format!("**Author:** {}\n\n", page.author));
    }
    if !page.publish_date.is_empty() {
        markdown.push_str(&format!("**Published:** {}\n\n", page.publish_date));
    }

    markdown.push_str("---\n\n");
    markdown.push_str(&page.content);
    markdown
}

/// Turns an extraction into a create-memory request.
///
/// # Errors
///
/// Returns [`Error::EmptyContent`] when the page yielded no content.
pub fn memory_request(page: &ExtractionResult, org_id: &str) -> Result<CreateMemoryRequest> {
    if page.content.is_empty() {
        return Err(Error::EmptyContent);
    }

    let title = if page.title.is_empty() {
        FALLBACK_MEMORY_TITLE
    } else {
        page.title.as_str()
    };

    Ok(CreateMemoryRequest::new(org_id, title, format_memory_content(page)))
}

/// Extracts a page and builds the request that saves it.
///
/// # Errors
///
/// Returns [`Error::EmptyContent`] when the page yielded no content.
#[instrument(skip_all, fields(org_id = %org_id))]
pub fn capture_page<P: PageDocument>(
    page: &P,
    options: &ExtractOptions,
    org_id: &str,
) -> Result<CreateMemoryRequest> {
    let extracted = extract_document(page, options);
    let request = memory_request(&extracted, org_id)?;
    info!(title = %request.title, content_len = request.content.len(), "captured page");
    Ok(request)
}
