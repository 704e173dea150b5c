//! # palace-capture
//!
//! Page capture for a personal memory service.
//!
//! This library turns a web page into a clean text extraction: it picks the
//! main content element, strips navigation and other noise, flattens the
//! result to lightly marked-up text, and collects title, description, author
//! and publication date. Around that core it builds the records a capture
//! client sends to the memory service: create-memory requests, chat requests,
//! and a decoder for the streamed chat answer.
//!
//! ## Quick Start
//!
//! ```rust
//! use palace_capture::extract_page;
//!
//! let html = r#"<html><head><title>My Article</title></head>
//! <body><nav>Menu</nav><p>Main content here.</p></body></html>"#;
//!
//! let result = extract_page(html, "https://example.com/post");
//! assert_eq!(result.title, "My Article");
//! assert_eq!(result.content, "Main content here.");
//! ```
//!
//! ## Features
//!
//! - **Content Extraction**: First long-enough candidate selector wins, `<body>` otherwise
//! - **Metadata Extraction**: Open Graph, Twitter, meta tags and DOM fallbacks
//! - **Noise Removal**: Operates on a detached copy; the page is never mutated
//! - **Memory Capture**: Markdown memory bodies and create-memory requests
//! - **Chat Streaming**: Incremental decoding of server-sent chat events

mod error;
mod options;
mod patterns;
mod result;

/// Page access abstraction and its HTML implementation.
pub mod page;

/// Candidate and noise selector sets.
pub mod selectors;

/// Main content extraction pipeline.
pub mod extractor;

/// Metadata extraction (Open Graph, meta tags, DOM fallbacks).
pub mod metadata;

/// URL canonicalization and endpoint building.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Memory records built from captured pages.
pub mod memory;

/// Save-page intent detection for chat messages.
pub mod intent;

/// Streaming chat requests and events.
pub mod chat;

/// Memory service configuration.
pub mod service;

/// Identity-provider session bookkeeping.
pub mod session;

// Public API - re-exports
pub use error::{Error, Result};
pub use extractor::extract_document;
pub use options::{ExtractOptions, DEFAULT_MIN_CANDIDATE_LEN};
pub use page::{HtmlPage, PageDocument};
pub use result::ExtractionResult;
pub use selectors::SelectorSet;

/// Extracts a page from an HTML string using default options.
///
/// `url` is the page location; it is canonicalized into the result.
///
/// # Example
///
/// ```rust
/// use palace_capture::extract_page;
///
/// let result = extract_page("<html><body><p>Hello</p></body></html>", "https://example.com");
/// assert_eq!(result.url, "https://example.com/");
/// assert_eq!(result.title, "Untitled");
/// ```
#[must_use]
pub fn extract_page(html: &str, url: &str) -> ExtractionResult {
    extract_page_with_options(html, url, &ExtractOptions::default())
}

/// Extracts a page from an HTML string with custom options.
///
/// # Example
///
/// ```rust
/// use palace_capture::{extract_page_with_options, ExtractOptions, SelectorSet};
///
/// let options = ExtractOptions {
///     selectors: SelectorSet::compact(),
///     min_candidate_len: 10,
/// };
/// let html = "<html><body><nav>Menu</nav><article>Long enough article text</article></body></html>";
/// let result = extract_page_with_options(html, "https://example.com", &options);
/// assert_eq!(result.content, "Long enough article text");
/// ```
#[must_use]
pub fn extract_page_with_options(html: &str, url: &str, options: &ExtractOptions) -> ExtractionResult {
    let page = HtmlPage::parse(html, url);
    extract_document(&page, options)
}

/// Extracts a page from raw HTML bytes with automatic encoding detection.
///
/// The charset is taken from a `<meta>` declaration near the top of the
/// document, defaulting to UTF-8. Invalid sequences become U+FFFD.
///
/// # Example
///
/// ```rust
/// use palace_capture::{extract_page_bytes, ExtractOptions};
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>Caf\xE9</p></body></html>";
/// let result = extract_page_bytes(html, "https://example.com", &ExtractOptions::default());
/// assert_eq!(result.content, "Café");
/// ```
#[must_use]
pub fn extract_page_bytes(html: &[u8], url: &str, options: &ExtractOptions) -> ExtractionResult {
    let html_str = encoding::transcode_to_utf8(html);
    extract_page_with_options(&html_str, url, options)
}
