//! Main content candidate selection.
//!
//! Every candidate selector contributes at most one element (its first match).
//! The longest visible text wins, but only strictly above the threshold and
//! only when strictly longer than the current best, so equal lengths keep the
//! element from the earlier selector. Without a qualifying candidate the
//! body is used.

use tracing::{debug, trace};

use crate::page::PageDocument;

/// Where the chosen content root came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateSource<'s> {
    /// Matched a candidate selector.
    Selector {
        /// The selector that matched.
        selector: &'s str,
        /// Its visible text length.
        visible_len: usize,
    },
    /// No candidate qualified.
    BodyFallback,
}

/// The element chosen as content root.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'s, E> {
    /// Element to sanitize and linearize.
    pub element: E,
    /// How it was chosen.
    pub source: CandidateSource<'s>,
}

/// Picks the content root among `selectors`, falling back to the body.
///
/// Deterministic and total: the same page always yields the same element.
pub fn select_candidate<'p, 's, P: PageDocument>(
    page: &'p P,
    selectors: &'s [String],
    min_len: usize,
) -> Candidate<'s, P::Element<'p>> {
    let mut best: Option<(P::Element<'p>, &'s str)> = None;
    let mut best_len = 0;

    for selector in selectors {
        let Some(element) = page.query_first(selector) else {
            continue;
        };
        let text_len = page.visible_text_len(element);
        trace!(selector = %selector, text_len, "candidate");

        if text_len > min_len && text_len > best_len {
            best = Some((element, selector.as_str()));
            best_len = text_len;
        }
    }

    if let Some((element, selector)) = best {
        debug!(selector, visible_len = best_len, "selected content candidate");
        Candidate {
            element,
            source: CandidateSource::Selector {
                selector,
                visible_len: best_len,
            },
        }
    } else {
        debug!("no candidate above {min_len} chars; using body");
        Candidate {
            element: page.body(),
            source: CandidateSource::BodyFallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{DetachedTree, TreeVisitor};

    /// Page whose elements carry explicit rendered lengths, as a browser
    /// would report them.
    struct MockPage {
        elements: Vec<(&'static str, usize)>,
    }

    const BODY: usize = usize::MAX;

    struct EmptyTree;

    impl DetachedTree for EmptyTree {
        fn remove_all(&mut self, _selector: &str) -> usize {
            0
        }
        fn walk<V: TreeVisitor>(&self, _visitor: &mut V) {}
    }

    impl PageDocument for MockPage {
        type Element<'a> = usize;
        type Tree = EmptyTree;

        fn location(&self) -> &str {
            "https://example.com/"
        }
        fn document_title(&self) -> String {
            String::new()
        }
        fn body(&self) -> usize {
            BODY
        }
        fn query_first(&self, selector: &str) -> Option<usize> {
            self.elements.iter().position(|(s, _)| *s == selector)
        }
        fn visible_text_len(&self, element: usize) -> usize {
            self.elements.get(element).map_or(0, |(_, len)| *len)
        }
        fn text_content(&self, _element: usize) -> String {
            String::new()
        }
        fn attribute(&self, _element: usize, _name: &str) -> Option<String> {
            None
        }
        fn clone_subtree(&self, _element: usize) -> EmptyTree {
            EmptyTree
        }
    }

    fn selectors(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_longest_candidate_wins() {
        let page = MockPage {
            elements: vec![(".a", 300), (".b", 900), (".c", 500)],
        };
        let sels = selectors(&[".a", ".b", ".c"]);

        let picked = select_candidate(&page, &sels, 200);
        assert_eq!(picked.element, 1);
        assert_eq!(
            picked.source,
            CandidateSource::Selector { selector: ".b", visible_len: 900 }
        );
    }

    #[test]
    fn test_equal_lengths_keep_earlier_selector() {
        let page = MockPage {
            elements: vec![("article", 450), ("main", 450)],
        };

        let sel = selectors(&["main", "article"]);
        let picked = select_candidate(&page, &sel, 200);
        assert_eq!(picked.element, 1);

        let sel = selectors(&["article", "main"]);
        let picked = select_candidate(&page, &sel, 200);
        assert_eq!(picked.element, 0);
    }

    #[test]
    fn test_threshold_is_strict() {
        let page = MockPage {
            elements: vec![(".exact", 200), (".short", 150)],
        };

        let sel = selectors(&[".exact", ".short"]);
        let picked = select_candidate(&page, &sel, 200);
        assert_eq!(picked.element, BODY);
        assert_eq!(picked.source, CandidateSource::BodyFallback);
    }

    #[test]
    fn test_missing_selectors_are_skipped() {
        let page = MockPage {
            elements: vec![(".late", 201)],
        };

        let sel = selectors(&[".absent", ".late"]);
        let picked = select_candidate(&page, &sel, 200);
        assert_eq!(picked.element, 0);
    }

    #[test]
    fn test_empty_selector_list_uses_body() {
        let page = MockPage { elements: vec![] };

        let picked = select_candidate(&page, &[], 200);
        assert_eq!(picked.element, BODY);
    }

    #[test]
    fn test_custom_threshold() {
        let page = MockPage {
            elements: vec![(".small", 40)],
        };

        let sel = selectors(&[".small"]);
        let picked = select_candidate(&page, &sel, 10);
        assert_eq!(picked.element, 0);
    }
}
