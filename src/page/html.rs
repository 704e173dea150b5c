//! [`PageDocument`] over a parsed HTML string, backed by `dom_query`.

use dom_query::{Document, NodeRef, Selection};

use super::{DetachedTree, PageDocument, TreeVisitor};
use crate::extractor::linearize::BLOCK_TAGS;

/// Elements whose contents are never rendered as text.
const NON_RENDERED_TAGS: &[&str] = &["script", "style", "noscript", "template", "head"];

/// A parsed page plus the URL it was loaded from.
pub struct HtmlPage {
    doc: Document,
    location: String,
}

impl HtmlPage {
    /// Parses `html` as a full document located at `location`.
    #[must_use]
    pub fn parse(html: &str, location: &str) -> Self {
        Self {
            doc: Document::from(html),
            location: location.to_string(),
        }
    }

    /// The underlying parsed document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.doc
    }
}

impl PageDocument for HtmlPage {
    type Element<'a> = NodeRef<'a>;
    type Tree = HtmlFragment;

    fn location(&self) -> &str {
        &self.location
    }

    fn document_title(&self) -> String {
        first_node(&self.doc, "title")
            .map(|title| title.text().split_ascii_whitespace().collect::<Vec<_>>().join(" "))
            .unwrap_or_default()
    }

    fn body(&self) -> NodeRef<'_> {
        first_node(&self.doc, "body").unwrap_or_else(|| self.doc.root())
    }

    fn query_first(&self, selector: &str) -> Option<NodeRef<'_>> {
        first_node(&self.doc, selector)
    }

    fn visible_text_len(&self, element: NodeRef<'_>) -> usize {
        visible_text_len(element)
    }

    fn text_content(&self, element: NodeRef<'_>) -> String {
        element.text().to_string()
    }

    fn attribute(&self, element: NodeRef<'_>, name: &str) -> Option<String> {
        Selection::from(element).attr(name).map(|v| v.to_string())
    }

    fn clone_subtree(&self, element: NodeRef<'_>) -> HtmlFragment {
        HtmlFragment::from_node(element)
    }
}

fn first_node<'a>(doc: &'a Document, selector: &str) -> Option<NodeRef<'a>> {
    doc.try_select(selector)
        .and_then(|sel| sel.nodes().first().copied())
}

/// Block-level elements outside the linearizer's table that still start a
/// new line when rendered.
const LAYOUT_BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "dd", "details", "dl", "dt", "fieldset", "figcaption", "figure",
    "footer", "form", "header", "main", "nav", "ol", "section", "summary", "table", "ul",
];

/// Line breaks a rendered element requires before and after its content.
fn required_line_breaks(tag: &str) -> usize {
    match tag {
        "p" => 2,
        _ if BLOCK_TAGS.contains(&tag) || LAYOUT_BLOCK_TAGS.contains(&tag) => 1,
        _ => 0,
    }
}

/// Running `innerText` length.
///
/// Whitespace collapses to one space, pending line breaks replace that space,
/// and nothing is counted before the first or after the last visible char.
#[derive(Default)]
struct TextMeter {
    len: usize,
    space: bool,
    breaks: usize,
}

impl TextMeter {
    fn text(&mut self, text: &str) {
        for ch in text.chars() {
            if ch.is_whitespace() {
                self.space = true;
                continue;
            }
            if self.len > 0 {
                if self.breaks > 0 {
                    self.len += self.breaks;
                } else if self.space {
                    self.len += 1;
                }
            }
            self.breaks = 0;
            self.space = false;
            self.len += 1;
        }
    }

    fn boundary(&mut self, breaks: usize) {
        self.breaks = self.breaks.max(breaks);
    }
}

/// Approximates `innerText.length` without a layout engine.
///
/// Skips non-rendered and hidden elements. Whitespace runs count as one
/// character; block boundaries count as their required line breaks (two
/// around `<p>`, one around other blocks, one per `<br>`), table cells are
/// separated by one character. Leading and trailing breaks are not counted.
fn visible_text_len(root: NodeRef<'_>) -> usize {
    enum Visit<'a> {
        Enter(NodeRef<'a>),
        Leave(usize),
    }

    let mut meter = TextMeter::default();
    let mut stack = vec![Visit::Enter(root)];

    while let Some(visit) = stack.pop() {
        match visit {
            Visit::Enter(node) if node.is_text() => meter.text(&node.text()),
            Visit::Enter(node) if node.is_element() && !is_hidden(node) => {
                let tag = node
                    .node_name()
                    .map(|t| t.to_ascii_lowercase())
                    .unwrap_or_default();
                match tag.as_str() {
                    "br" => meter.breaks += 1,
                    "td" | "th" => meter.space = true,
                    _ => {}
                }

                let breaks = required_line_breaks(&tag);
                meter.boundary(breaks);
                stack.push(Visit::Leave(breaks));
                // Reverse so the stack pops children in document order.
                stack.extend(node.children().into_iter().rev().map(Visit::Enter));
            }
            Visit::Enter(_) => {}
            Visit::Leave(breaks) => meter.boundary(breaks),
        }
    }

    meter.len
}

fn is_hidden(node: NodeRef<'_>) -> bool {
    if let Some(tag) = node.node_name() {
        if NON_RENDERED_TAGS.iter().any(|t| tag.eq_ignore_ascii_case(t)) {
            return true;
        }
    }

    let sel = Selection::from(node);
    if sel.has_attr("hidden") {
        return true;
    }

    sel.attr("style").is_some_and(|style| {
        let style: String = style
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();
        style.contains("display:none") || style.contains("visibility:hidden")
    })
}

/// Detached copy of an element, re-parsed into its own document.
///
/// Table parts are re-parsed inside the table scaffolding they need, so a
/// `<td>` or `<tr>` root keeps its own element and all of its children.
/// Changes to the fragment never reach the page it was cloned from.
pub struct HtmlFragment {
    doc: Document,
    root_tag: String,
}

impl HtmlFragment {
    fn from_node(node: NodeRef<'_>) -> Self {
        let root_tag = node
            .node_name()
            .map(|tag| tag.to_ascii_lowercase())
            .unwrap_or_default();
        let html = Selection::from(node).html();

        Self {
            doc: Document::from(in_parsing_context(&root_tag, &html)),
            root_tag,
        }
    }

    /// Serialized HTML of the fragment root.
    #[must_use]
    pub fn html(&self) -> String {
        self.root()
            .map(|root| Selection::from(root).html().to_string())
            .unwrap_or_default()
    }

    /// The cloned element: the first element in document order carrying the
    /// root's tag. Scaffolding only precedes it and its descendants follow it.
    fn root(&self) -> Option<NodeRef<'_>> {
        let body = first_node(&self.doc, "body")?;
        if self.root_tag == "body" {
            return Some(body);
        }

        let mut stack: Vec<NodeRef<'_>> = body.children().into_iter().rev().collect();
        while let Some(node) = stack.pop() {
            if !node.is_element() {
                continue;
            }
            if node
                .node_name()
                .is_some_and(|tag| tag.eq_ignore_ascii_case(&self.root_tag))
            {
                return Some(node);
            }
            stack.extend(node.children().into_iter().rev());
        }

        Some(body)
    }
}

/// Wraps serialized table parts in the ancestors the HTML parser requires;
/// outside a table it drops their tags and keeps only the text.
fn in_parsing_context(tag: &str, html: &str) -> String {
    match tag {
        "td" | "th" => format!("<table><tbody><tr>{html}</tr></tbody></table>"),
        "tr" => format!("<table><tbody>{html}</tbody></table>"),
        "thead" | "tbody" | "tfoot" | "caption" | "colgroup" => format!("<table>{html}</table>"),
        "col" => format!("<table><colgroup>{html}</colgroup></table>"),
        _ => html.to_string(),
    }
}

impl DetachedTree for HtmlFragment {
    fn remove_all(&mut self, selector: &str) -> usize {
        let Some(root) = self.root() else {
            return 0;
        };
        let Some(matches) = Selection::from(root).try_select(selector) else {
            return 0;
        };

        let count = matches.length();
        matches.remove();
        count
    }

    fn walk<V: TreeVisitor>(&self, visitor: &mut V) {
        enum Step<'a> {
            Enter(NodeRef<'a>),
            Leave(String),
        }

        let Some(root) = self.root() else {
            return;
        };
        let mut stack = vec![Step::Enter(root)];

        while let Some(step) = stack.pop() {
            match step {
                Step::Enter(node) if node.is_text() => visitor.text(&node.text()),
                Step::Enter(node) if node.is_element() => {
                    let tag = node
                        .node_name()
                        .map(|t| t.to_ascii_lowercase())
                        .unwrap_or_default();
                    visitor.open(&tag);
                    stack.push(Step::Leave(tag));
                    stack.extend(node.children().into_iter().rev().map(Step::Enter));
                }
                Step::Enter(_) => {}
                Step::Leave(tag) => visitor.close(&tag),
            }
        }
    }
}
