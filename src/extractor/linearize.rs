//! Tree-to-text linearization.
//!
//! Text is copied verbatim. Block elements are bracketed by line breaks,
//! headings get a `## ` marker (one marker for every level) and list items a
//! bullet. The output is deliberately redundant in whitespace; the
//! normalizer cleans it up.

use crate::page::{DetachedTree, TreeVisitor};

/// Tags that start and end on their own line.
pub const BLOCK_TAGS: &[&str] = &[
    "p", "div", "h1", "h2", "h3", "h4", "h5", "h6", "li", "br", "hr", "blockquote", "pre", "tr",
];

/// Marker emitted before every heading.
pub const HEADING_MARKER: &str = "\n## ";

/// Marker emitted before every list item.
pub const BULLET_MARKER: &str = "• ";

/// Flattens a detached tree into marked-up plain text.
#[must_use]
pub fn linearize<T: DetachedTree>(tree: &T) -> String {
    let mut out = Linearizer::default();
    tree.walk(&mut out);
    out.text
}

fn is_block(tag: &str) -> bool {
    BLOCK_TAGS.contains(&tag)
}

fn is_heading(tag: &str) -> bool {
    matches!(tag, "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
}

#[derive(Default)]
struct Linearizer {
    text: String,
}

impl TreeVisitor for Linearizer {
    fn text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn open(&mut self, tag: &str) {
        if is_block(tag) {
            self.text.push('\n');
        }
        if is_heading(tag) {
            self.text.push_str(HEADING_MARKER);
        }
        if tag == "li" {
            self.text.push_str(BULLET_MARKER);
        }
    }

    fn close(&mut self, tag: &str) {
        if is_block(tag) {
            self.text.push('\n');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{HtmlPage, PageDocument};

    fn linearize_html(html: &str) -> String {
        let page = HtmlPage::parse(html, "");
        let Some(root) = page.query_first("section") else {
            panic!("fixture needs a <section> root");
        };
        linearize(&page.clone_subtree(root))
    }

    #[test]
    fn test_paragraphs_are_bracketed() {
        assert_eq!(linearize_html("<section><p>A</p><p>B</p></section>"), "\nA\n\nB\n");
    }

    #[test]
    fn test_heading_marker_ignores_level() {
        assert_eq!(linearize_html("<section><h2>Title</h2></section>"), "\n\n## Title\n");
        assert_eq!(linearize_html("<section><h6>Deep</h6></section>"), "\n\n## Deep\n");
    }

    #[test]
    fn test_list_items_get_bullets() {
        assert_eq!(
            linearize_html("<section><ul><li>One</li><li>Two</li></ul></section>"),
            "\n• One\n\n• Two\n"
        );
    }

    #[test]
    fn test_inline_elements_add_nothing() {
        assert_eq!(
            linearize_html("<section>a <b>bold</b> and <a href='#'>link</a></section>"),
            "a bold and link"
        );
    }

    #[test]
    fn test_text_is_verbatim() {
        assert_eq!(linearize_html("<section>  spaced\t out  </section>"), "  spaced\t out  ");
    }

    #[test]
    fn test_br_and_hr_are_blocks() {
        assert_eq!(linearize_html("<section>a<br>b<hr>c</section>"), "a\n\nb\n\nc");
    }

    #[test]
    fn test_table_rows_are_blocks() {
        assert_eq!(
            linearize_html("<section><table><tr><td>a</td><td>b</td></tr><tr><td>c</td></tr></table></section>"),
            "\nab\n\nc\n"
        );
    }

    #[test]
    fn test_blockquote_and_pre_are_blocks() {
        assert_eq!(
            linearize_html("<section>said<blockquote>quoted</blockquote>after</section>"),
            "said\nquoted\nafter"
        );
        assert_eq!(
            linearize_html("<section><pre>  fn main() {}\n  done</pre></section>"),
            "\n  fn main() {}\n  done\n"
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        assert_eq!(linearize_html("<section>x<!-- hidden -->y</section>"), "xy");
    }

    #[test]
    fn test_root_block_is_bracketed() {
        let page = HtmlPage::parse("<div id='r'>text</div>", "");
        let Some(root) = page.query_first("#r") else {
            panic!("root missing");
        };
        assert_eq!(linearize(&page.clone_subtree(root)), "\ntext\n");
    }
}
