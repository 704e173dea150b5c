//! Selector priority lists.
//!
//! Two ordered lists drive extraction: content candidates (order is the
//! tie-break for equal lengths) and noise selectors (every match is removed,
//! so order is irrelevant). Both are plain data so they can be tuned or
//! loaded from JSON without touching the traversal code.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Candidate selectors of the compact (version 1) set.
pub const COMPACT_CANDIDATES: &[&str] = &[
    // Medium
    "article[data-testid='post']",
    ".meteredContent",
    ".postArticle-content",
    "section[data-testid='post-body']",
    // Substack
    ".post-content",
    ".body.markup",
    ".available-content",
    // WordPress
    ".entry-content",
    ".post-content",
    ".post-body",
    ".article-content",
    ".article-body",
    ".blog-post-content",
    // News sites
    ".story-body",
    ".article__body",
    ".article-text",
    ".story-content",
    // Dev/tech blogs
    ".markdown-body",
    ".prose",
    ".content-body",
    // Generic article structure
    "article",
    "main",
    "[role='main']",
    "[role='article']",
    "#content",
    "#main-content",
    ".content",
];

/// Noise selectors of the compact (version 1) set.
pub const COMPACT_NOISE: &[&str] = &[
    "script",
    "style",
    "noscript",
    "iframe",
    "nav",
    "header",
    "footer",
    "aside",
    ".sidebar",
    ".navigation",
    ".menu",
    ".nav",
    ".comments",
    ".comment",
    ".advertisement",
    ".ad",
    ".ads",
    ".social-share",
    ".share-buttons",
    ".related-posts",
    ".related-articles",
    ".newsletter",
    ".subscribe",
    "[role='navigation']",
    "[role='banner']",
    "[role='contentinfo']",
    "[aria-hidden='true']",
    ".cookie-notice",
    ".popup",
    ".modal",
    ".author-bio",
    ".tags",
    ".meta",
    "button",
    "form",
    "input",
];

/// Candidate selectors of the extended (version 2) set.
pub const EXTENDED_CANDIDATES: &[&str] = &[
    // Medium
    "article[data-testid='post']",
    ".meteredContent",
    ".postArticle-content",
    "section[data-testid='post-body']",
    // Substack
    ".post-content",
    ".body.markup",
    ".available-content",
    // WordPress
    ".entry-content",
    ".post-content",
    ".post-body",
    ".article-content",
    ".article-body",
    ".blog-post-content",
    ".single-post-content",
    // News sites
    ".story-body",
    ".article__body",
    ".article-text",
    ".story-content",
    ".news-article",
    "[data-component='text-block']",
    // Dev/tech blogs
    ".markdown-body",
    ".prose",
    ".content-body",
    ".documentation-content",
    ".doc-content",
    // Generic article structure
    "article",
    "main",
    "[role='main']",
    "[role='article']",
    "#content",
    "#main-content",
    ".main-content",
    ".content",
    ".post",
    ".article",
];

/// Noise selectors of the extended (version 2) set.
pub const EXTENDED_NOISE: &[&str] = &[
    "script",
    "style",
    "noscript",
    "iframe",
    "nav",
    "header",
    "footer",
    "aside",
    ".sidebar",
    ".navigation",
    ".menu",
    ".nav",
    ".comments",
    ".comment",
    ".advertisement",
    ".ad",
    ".ads",
    ".advert",
    ".social-share",
    ".share-buttons",
    ".sharing",
    ".related-posts",
    ".related-articles",
    ".recommended",
    ".newsletter",
    ".subscribe",
    ".subscription",
    "[role='navigation']",
    "[role='banner']",
    "[role='contentinfo']",
    "[aria-hidden='true']",
    ".cookie-notice",
    ".cookie-banner",
    ".popup",
    ".modal",
    ".overlay",
    ".author-bio",
    ".author-card",
    ".tags",
    ".tag-list",
    ".meta",
    ".metadata",
    ".byline-info",
    ".follow-button",
    ".clap-button",
    "button",
    "form",
    "input",
    "select",
];

/// A versioned pair of selector lists.
///
/// # Example
///
/// ```rust
/// use palace_capture::SelectorSet;
///
/// let set = SelectorSet::from_json(
///     r#"{"version": 3, "candidates": [".story"], "noise": ["script", ".promo"]}"#,
/// )?;
/// assert_eq!(set.version, 3);
/// assert_eq!(set.candidates, vec![".story".to_string()]);
/// # Ok::<(), palace_capture::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorSet {
    /// Configuration version, bumped whenever either list changes.
    pub version: u32,

    /// Content candidate selectors, highest priority first.
    pub candidates: Vec<String>,

    /// Boilerplate selectors removed from the chosen subtree.
    #[serde(default)]
    pub noise: Vec<String>,
}

impl SelectorSet {
    /// The shorter version 1 lists.
    #[must_use]
    pub fn compact() -> Self {
        Self::from_static(1, COMPACT_CANDIDATES, COMPACT_NOISE)
    }

    /// The version 2 lists, covering more site families. This is the default.
    #[must_use]
    pub fn extended() -> Self {
        Self::from_static(2, EXTENDED_CANDIDATES, EXTENDED_NOISE)
    }

    fn from_static(version: u32, candidates: &[&str], noise: &[&str]) -> Self {
        Self {
            version,
            candidates: candidates.iter().map(ToString::to_string).collect(),
            noise: noise.iter().map(ToString::to_string).collect(),
        }
    }

    /// Parses a selector set from JSON and validates every selector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] for malformed JSON and
    /// [`Error::InvalidSelector`] for a selector the CSS parser rejects.
    pub fn from_json(json: &str) -> Result<Self> {
        let set: Self = serde_json::from_str(json)?;
        set.validate()?;
        Ok(set)
    }

    /// Reads and validates a selector set from any reader (file, stdin).
    ///
    /// # Errors
    ///
    /// Same as [`SelectorSet::from_json`], plus [`Error::Io`].
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json(&json)
    }

    /// Checks that every selector in both lists parses.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSelector`] naming the first bad selector, or
    /// [`Error::Config`] for a blank entry.
    pub fn validate(&self) -> Result<()> {
        for selector in self.candidates.iter().chain(&self.noise) {
            if selector.trim().is_empty() {
                return Err(Error::Config(format!(
                    "selector set version {} contains an empty selector",
                    self.version
                )));
            }
            if let Err(err) = dom_query::Matcher::new(selector) {
                return Err(Error::InvalidSelector {
                    selector: selector.clone(),
                    reason: format!("{err:?}"),
                });
            }
        }
        Ok(())
    }
}

impl Default for SelectorSet {
    fn default() -> Self {
        Self::extended()
    }
}
