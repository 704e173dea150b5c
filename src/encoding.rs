//! Character encoding detection and transcoding.
//!
//! Pages saved or piped as raw bytes carry their charset in a meta tag. The
//! declaration is looked up in the first 1024 bytes and the bytes are decoded
//! to UTF-8, replacing invalid sequences rather than failing.

use encoding_rs::{Encoding, UTF_8};

use crate::patterns::META_CHARSET;

/// Number of leading bytes searched for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// Detects the declared character encoding of an HTML byte buffer.
///
/// Handles both `<meta charset="...">` and the `http-equiv="Content-Type"`
/// form. Falls back to UTF-8 when nothing usable is declared.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);

    META_CHARSET
        .captures(&head)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decodes HTML bytes to a UTF-8 string using the declared encoding.
///
/// A byte-order mark overrides the declaration.
///
/// # Examples
///
/// ```rust
/// use palace_capture::encoding::transcode_to_utf8;
///
/// let html = b"<meta charset=\"ISO-8859-1\"><p>Caf\xE9</p>";
/// assert!(transcode_to_utf8(html).contains("Café"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let (text, _, _) = detect_encoding(html).decode(html);
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_utf8() {
        assert_eq!(detect_encoding(b"<html><body>x</body></html>"), UTF_8);
    }

    #[test]
    fn test_detects_meta_charset() {
        let html = br#"<html><head><meta charset="windows-1252"></head></html>"#;
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn test_detects_http_equiv_charset() {
        let html = br#"<meta http-equiv="Content-Type" content="text/html; charset=Shift_JIS">"#;
        assert_eq!(detect_encoding(html).name(), "Shift_JIS");
    }

    #[test]
    fn test_unknown_label_falls_back() {
        let html = br#"<meta charset="klingon">"#;
        assert_eq!(detect_encoding(html), UTF_8);
    }

    #[test]
    fn test_declaration_after_sniff_window_is_ignored() {
        let mut html = vec![b' '; SNIFF_LEN];
        html.extend_from_slice(br#"<meta charset="windows-1252">"#);
        assert_eq!(detect_encoding(&html), UTF_8);
    }

    #[test]
    fn test_transcodes_latin1() {
        let html = b"<meta charset=\"ISO-8859-1\"><p>na\xEFve</p>";
        assert!(transcode_to_utf8(html).contains("naïve"));
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let html = b"<p>bad \xFF byte</p>";
        assert!(transcode_to_utf8(html).contains('\u{FFFD}'));
    }
}
