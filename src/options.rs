//! Configuration options for content extraction.
//!
//! The `ExtractOptions` struct carries the selector configuration and the
//! candidate length threshold.

use crate::selectors::SelectorSet;

/// Default minimum visible text length for a content candidate.
pub const DEFAULT_MIN_CANDIDATE_LEN: usize = 200;

/// Configuration options for content extraction.
///
/// # Example
///
/// ```rust
/// use palace_capture::{ExtractOptions, SelectorSet};
///
/// // Use defaults
/// let options = ExtractOptions::default();
///
/// // Customize specific fields
/// let options = ExtractOptions {
///     selectors: SelectorSet::compact(),
///     ..ExtractOptions::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Candidate and noise selector lists.
    ///
    /// Default: [`SelectorSet::extended`]
    pub selectors: SelectorSet,

    /// A candidate must have strictly more visible characters than this to
    /// be chosen over the `<body>` fallback.
    ///
    /// Default: `200`
    pub min_candidate_len: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            selectors: SelectorSet::extended(),
            min_candidate_len: DEFAULT_MIN_CANDIDATE_LEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = ExtractOptions::default();

        assert_eq!(opts.min_candidate_len, 200);
        assert_eq!(opts.selectors.version, 2);
    }

    #[test]
    fn test_custom_threshold() {
        let opts = ExtractOptions {
            min_candidate_len: 50,
            ..ExtractOptions::default()
        };

        assert_eq!(opts.min_candidate_len, 50);
        assert_eq!(opts.selectors, SelectorSet::extended());
    }
}
