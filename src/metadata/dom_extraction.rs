//! Metadata read from page elements rather than meta tags.

use crate::page::PageDocument;

/// First top-level heading.
pub const HEADING: &str = "h1";

/// Author link (`rel="author"`).
pub const REL_AUTHOR: &str = "[rel='author']";

/// Common author-name class.
pub const AUTHOR_NAME: &str = ".author-name";

/// Common byline class.
pub const BYLINE: &str = ".byline";

/// First `<time>` element.
pub const TIME: &str = "time";

/// Non-empty text content of the first element matching `selector`.
///
/// The text is returned untrimmed; a whitespace-only element still counts as
/// present.
pub fn element_text<P: PageDocument>(page: &P, selector: &str) -> Option<String> {
    page.query_first(selector)
        .map(|el| page.text_content(el))
        .filter(|text| !text.is_empty())
}

/// Non-empty attribute of the first element matching `selector`.
pub fn element_attribute<P: PageDocument>(page: &P, selector: &str, name: &str) -> Option<String> {
    page.query_first(selector)
        .and_then(|el| page.attribute(el, name))
        .filter(|value| !value.is_empty())
}

/// The document `<title>`, if non-empty.
pub fn document_title<P: PageDocument>(page: &P) -> Option<String> {
    Some(page.document_title()).filter(|title| !title.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::HtmlPage;

    #[test]
    fn test_element_text() {
        let page = HtmlPage::parse(r#"<p class="byline">By <b>Ann</b></p>"#, "");
        assert_eq!(element_text(&page, BYLINE).as_deref(), Some("By Ann"));
        assert_eq!(element_text(&page, AUTHOR_NAME), None);
    }

    #[test]
    fn test_whitespace_text_counts_as_present() {
        let page = HtmlPage::parse(r#"<h1>   </h1>"#, "");
        assert_eq!(element_text(&page, HEADING).as_deref(), Some("   "));
    }

    #[test]
    fn test_first_time_element_only() {
        let page = HtmlPage::parse(
            r#"<time>no attribute</time><time datetime="2024-01-01">later</time>"#,
            "",
        );
        assert_eq!(element_attribute(&page, TIME, "datetime"), None);
    }

    #[test]
    fn test_time_datetime() {
        let page = HtmlPage::parse(r#"<time datetime="2024-03-09T10:00:00Z">March 9</time>"#, "");
        assert_eq!(
            element_attribute(&page, TIME, "datetime").as_deref(),
            Some("2024-03-09T10:00:00Z")
        );
    }
}
