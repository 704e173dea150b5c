//! Noise removal on a detached copy of the content root.

use tracing::debug;

use crate::page::{DetachedTree, PageDocument};

/// Deep-copies `root` and strips every descendant matching a noise selector.
///
/// The page itself is left untouched. Overlapping matches are harmless:
/// removing a parent also takes its already-matched descendants along.
pub fn sanitize<P: PageDocument>(page: &P, root: P::Element<'_>, noise: &[String]) -> P::Tree {
    let mut tree = page.clone_subtree(root);

    let removed: usize = noise.iter().map(|selector| tree.remove_all(selector)).sum();
    debug!(removed, selectors = noise.len(), "stripped noise");

    tree
}
