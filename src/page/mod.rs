//! Document capability.
//!
//! Extraction only needs a handful of things from a page: query by selector,
//! read text and attributes, measure visible text, and take a detached copy
//! of a subtree that can be pruned and walked. [`PageDocument`] and
//! [`DetachedTree`] name exactly that surface, so the algorithm runs the same
//! against a parsed HTML string ([`HtmlPage`]) or any other tree.

mod html;

pub use html::{HtmlFragment, HtmlPage};

/// Read-only access to a live page.
///
/// Implementations must never mutate the page through these methods.
pub trait PageDocument {
    /// Handle to an element of this page.
    type Element<'a>: Copy
    where
        Self: 'a;

    /// Owned, detached copy of a subtree.
    type Tree: DetachedTree;

    /// Current page URL.
    fn location(&self) -> &str;

    /// Text of the first `<title>`, whitespace-collapsed and trimmed; empty
    /// when there is none.
    fn document_title(&self) -> String;

    /// The body element. Never absent.
    fn body(&self) -> Self::Element<'_>;

    /// First element in document order matching `selector`.
    fn query_first(&self, selector: &str) -> Option<Self::Element<'_>>;

    /// Length of the element's rendered text.
    fn visible_text_len(&self, element: Self::Element<'_>) -> usize;

    /// Concatenated text of the element and its descendants.
    fn text_content(&self, element: Self::Element<'_>) -> String;

    /// Attribute value, if present.
    fn attribute(&self, element: Self::Element<'_>, name: &str) -> Option<String>;

    /// Deep copy of the element's subtree, detached from the page.
    fn clone_subtree(&self, element: Self::Element<'_>) -> Self::Tree;
}

/// A detached subtree that can be pruned and walked.
pub trait DetachedTree {
    /// Removes every descendant of the root matching `selector`.
    ///
    /// Returns the number of matched elements. The root itself is never
    /// removed, and zero matches is not an error.
    fn remove_all(&mut self, selector: &str) -> usize;

    /// Depth-first walk in document order, root included.
    ///
    /// Only text and element nodes are reported.
    fn walk<V: TreeVisitor>(&self, visitor: &mut V);
}

/// Receives events from [`DetachedTree::walk`].
pub trait TreeVisitor {
    /// A text node, verbatim.
    fn text(&mut self, text: &str);

    /// Entering an element. `tag` is lowercase.
    fn open(&mut self, tag: &str);

    /// Leaving an element, after all its children.
    fn close(&mut self, tag: &str);
}
