//! Extraction over a hand-built tree, with no HTML parser involved.
//!
//! Visible lengths are stated explicitly, standing in for a real renderer.

use palace_capture::page::{DetachedTree, PageDocument, TreeVisitor};
use palace_capture::{extract_document, ExtractOptions, SelectorSet};

#[derive(Clone)]
enum Node {
    Text(String),
    Element {
        tag: &'static str,
        class: &'static str,
        visible_len: usize,
        children: Vec<Node>,
    },
}

impl Node {
    fn matches(&self, selector: &str) -> bool {
        match self {
            Node::Element { tag, class, .. } => {
                selector == *tag || selector.strip_prefix('.').is_some_and(|c| c == *class)
            }
            Node::Text(_) => false,
        }
    }

    fn find(&self, selector: &str) -> Option<&Node> {
        if self.matches(selector) {
            return Some(self);
        }
        match self {
            Node::Element { children, .. } => children.iter().find_map(|c| c.find(selector)),
            Node::Text(_) => None,
        }
    }

    fn text(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element { children, .. } => children.iter().map(Node::text).collect(),
        }
    }
}

fn el(tag: &'static str, class: &'static str, visible_len: usize, children: Vec<Node>) -> Node {
    Node::Element {
        tag,
        class,
        visible_len,
        children,
    }
}

fn text(value: &str) -> Node {
    Node::Text(value.to_string())
}

struct MockPage {
    body: Node,
}

struct MockTree(Node);

impl DetachedTree for MockTree {
    fn remove_all(&mut self, selector: &str) -> usize {
        fn prune(node: &mut Node, selector: &str) -> usize {
            let Node::Element { children, .. } = node else {
                return 0;
            };
            let before = children.len();
            children.retain(|c| !c.matches(selector));
            let removed = before - children.len();
            removed + children.iter_mut().map(|c| prune(c, selector)).sum::<usize>()
        }
        prune(&mut self.0, selector)
    }

    fn walk<V: TreeVisitor>(&self, visitor: &mut V) {
        fn visit<V: TreeVisitor>(node: &Node, visitor: &mut V) {
            match node {
                Node::Text(text) => visitor.text(text),
                Node::Element { tag, children, .. } => {
                    visitor.open(tag);
                    for child in children {
                        visit(child, visitor);
                    }
                    visitor.close(tag);
                }
            }
        }
        visit(&self.0, visitor);
    }
}

impl PageDocument for MockPage {
    type Element<'a> = &'a Node;
    type Tree = MockTree;

    fn location(&self) -> &str {
        "mock://page"
    }

    fn document_title(&self) -> String {
        String::new()
    }

    fn body(&self) -> &Node {
        &self.body
    }

    fn query_first(&self, selector: &str) -> Option<&Node> {
        self.body.find(selector)
    }

    fn visible_text_len(&self, element: &Node) -> usize {
        match element {
            Node::Element { visible_len, .. } => *visible_len,
            Node::Text(_) => 0,
        }
    }

    fn text_content(&self, element: &Node) -> String {
        element.text()
    }

    fn attribute(&self, _element: &Node, _name: &str) -> Option<String> {
        None
    }

    fn clone_subtree(&self, element: &Node) -> MockTree {
        MockTree(element.clone())
    }
}

fn options(candidates: &[&str], noise: &[&str]) -> ExtractOptions {
    ExtractOptions {
        selectors: SelectorSet {
            version: 1,
            candidates: candidates.iter().map(ToString::to_string).collect(),
            noise: noise.iter().map(ToString::to_string).collect(),
        },
        ..ExtractOptions::default()
    }
}

fn sample_page() -> MockPage {
    MockPage {
        body: el(
            "body",
            "",
            900,
            vec![
                el("div", "teaser", 250, vec![text("Teaser")]),
                el(
                    "article",
                    "",
                    600,
                    vec![
                        el("h1", "", 5, vec![text("Title")]),
                        el("p", "", 500, vec![text("Body text")]),
                        el("div", "ad", 20, vec![text("Buy now")]),
                    ],
                ),
            ],
        ),
    }
}

#[test]
fn reported_lengths_drive_candidate_choice() {
    let page = sample_page();

    let result = extract_document(&page, &options(&[".teaser", "article"], &[".ad"]));

    assert_eq!(result.content, "## Title\nBody text");
    assert_eq!(result.title, "Title");
    assert_eq!(result.url, "mock://page");
}

#[test]
fn no_qualifying_candidate_uses_body() {
    let page = sample_page();
    let opts = ExtractOptions {
        min_candidate_len: 1_000,
        ..options(&[".teaser", "article"], &[".ad"])
    };

    let result = extract_document(&page, &opts);

    assert_eq!(result.content, "Teaser\n## Title\nBody text");
}

#[test]
fn mock_page_is_not_mutated_by_noise_removal() {
    let page = sample_page();

    let _ = extract_document(&page, &options(&["article"], &[".ad", "p"]));

    assert!(page.body.text().contains("Buy now"));
    assert!(page.body.text().contains("Body text"));
}
