//! Whitespace normalization of linearized text.

use crate::patterns::{BLANK_LINE_RUN, LEADING_LINE_WHITESPACE, SPACE_RUN};

/// Collapses the linearizer's redundant whitespace.
///
/// Steps run in a fixed order, each on the previous output: tabs become
/// spaces, space runs collapse, blank-line runs are capped, every line loses
/// its leading whitespace, and the whole string is trimmed. No length limit
/// is applied.
///
/// # Example
///
/// ```rust
/// use palace_capture::extractor::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("\n\n## Hi\n\n\tHello   world\n"), "## Hi\nHello world");
/// ```
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    let text = text.replace('\t', " ");
    let text = SPACE_RUN.replace_all(&text, " ");
    let text = BLANK_LINE_RUN.replace_all(&text, "\n\n");
    let text = LEADING_LINE_WHITESPACE.replace_all(&text, "");
    text.trim().to_string()
}
