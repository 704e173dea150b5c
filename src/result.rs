//! Result type for extraction output.

use serde::{Deserialize, Serialize};

/// Readable content and metadata captured from one page.
///
/// Every field is always present; missing sources degrade to an empty string
/// (or `"Untitled"` for the title). Serializes with the camelCase field
/// names the memory service expects (`publishDate`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Best-effort page title, trimmed.
    pub title: String,

    /// Page URL at extraction time.
    pub url: String,

    /// Short summary from Open Graph or meta description, possibly empty.
    pub description: String,

    /// Author name, trimmed, possibly empty.
    pub author: String,

    /// Publication date exactly as the page states it, possibly empty.
    pub publish_date: String,

    /// Normalized multi-line text of the main content.
    pub content: String,
}
