//! Main content extraction.
//!
//! Two stages run in sequence on a page:
//!
//! 1. [`candidate`]: pick the content root among the candidate selectors,
//!    falling back to `<body>`.
//! 2. [`sanitize`], [`linearize`], [`normalize`]: copy the root, strip noise,
//!    flatten it to marked-up text and clean the whitespace.
//!
//! The whole pipeline is total and side-effect free with respect to the
//! page. Running it twice on an unchanged page gives the same result.

pub mod candidate;
pub mod linearize;
pub mod normalize;
pub mod sanitize;

use tracing::{debug, instrument};

use crate::metadata;
use crate::options::ExtractOptions;
use crate::page::PageDocument;
use crate::result::ExtractionResult;
use crate::url_utils;

pub use candidate::{select_candidate, Candidate, CandidateSource};
pub use linearize::linearize;
pub use normalize::normalize_whitespace;
pub use sanitize::sanitize;

/// Extracts metadata and main content from any [`PageDocument`].
#[instrument(skip_all)]
pub fn extract_document<P: PageDocument>(page: &P, options: &ExtractOptions) -> ExtractionResult {
    let meta = metadata::extract_metadata(page);
    let content = extract_content(page, options);

    debug!(
        location = page.location(),
        title_len = meta.title.len(),
        content_len = content.len(),
        "extraction complete"
    );

    ExtractionResult {
        title: meta.title,
        url: url_utils::canonical_page_url(page.location()),
        description: meta.description,
        author: meta.author,
        publish_date: meta.publish_date,
        content,
    }
}

/// Runs candidate selection, sanitization, linearization and normalization.
#[must_use]
pub fn extract_content<P: PageDocument>(page: &P, options: &ExtractOptions) -> String {
    let selectors = &options.selectors;
    let candidate = select_candidate(page, &selectors.candidates, options.min_candidate_len);
    let tree = sanitize(page, candidate.element, &selectors.noise);

    normalize_whitespace(&linearize(&tree))
}
