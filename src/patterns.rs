//! Compiled regex patterns.
//!
//! All patterns are compiled once on first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Whitespace Normalization Patterns
// =============================================================================

/// Matches runs of two or more space characters (not other whitespace).
pub static SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r" {2,}").expect("SPACE_RUN regex")
});

/// Matches three or more newlines, with any whitespace between them.
pub static BLANK_LINE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n\s*\n\s*\n+").expect("BLANK_LINE_RUN regex")
});

/// Matches whitespace at the start of every line.
///
/// `\s` also matches `\n`, so a match starting at a line start swallows any
/// blank lines that follow it.
pub static LEADING_LINE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s+").expect("LEADING_LINE_WHITESPACE regex")
});

// =============================================================================
// Chat Intent Patterns
// =============================================================================

/// Matches chat messages asking to save the current page.
pub static SAVE_PAGE_INTENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(save\s*(this)?\s*page|save\s*(this)?\s*(web)?page|remember\s*(this)?\s*page|store\s*(this)?\s*page|add\s*(this)?\s*page|save\s*(this)?\s*article|save\s*(this)?\s*site)",
    )
    .expect("SAVE_PAGE_INTENT regex")
});

// =============================================================================
// Charset Detection Patterns
// =============================================================================

/// Matches `<meta charset="...">`.
pub static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s/>]+)"#).expect("META_CHARSET regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_run_ignores_single_spaces_and_newlines() {
        assert_eq!(SPACE_RUN.replace_all("a  b c\n\nd", " "), "a b c\n\nd");
    }

    #[test]
    fn blank_line_run_spans_interleaved_spaces() {
        assert_eq!(BLANK_LINE_RUN.replace_all("a\n \n\t\n\nb", "\n\n"), "a\n\nb");
        assert_eq!(BLANK_LINE_RUN.replace_all("a\n\nb", "\n\n"), "a\n\nb");
    }

    #[test]
    fn leading_line_whitespace_is_multiline() {
        assert_eq!(LEADING_LINE_WHITESPACE.replace_all("  a\n   b\n\nc", ""), "a\nb\nc");
    }

    #[test]
    fn meta_charset_captures_label() {
        let caps = META_CHARSET.captures(r#"<meta charset="ISO-8859-1">"#);
        assert_eq!(caps.and_then(|c| c.get(1)).map(|m| m.as_str()), Some("ISO-8859-1"));

        let caps = META_CHARSET.captures(
            r#"<meta http-equiv="Content-Type" content="text/html; charset=windows-1252">"#,
        );
        assert_eq!(caps.and_then(|c| c.get(1)).map(|m| m.as_str()), Some("windows-1252"));
    }
}
