//! HTML meta tag lookups.
//!
//! Open Graph, Twitter card, and standard `name=` meta tags. Only the first
//! tag matching each selector is consulted, and an empty `content` counts as
//! absent.

use crate::page::PageDocument;

/// `<meta property="og:title">`
pub const OG_TITLE: &str = "meta[property='og:title']";

/// `<meta name="twitter:title">`
pub const TWITTER_TITLE: &str = "meta[name='twitter:title']";

/// `<meta property="og:description">`
pub const OG_DESCRIPTION: &str = "meta[property='og:description']";

/// `<meta name="description">`
pub const DESCRIPTION: &str = "meta[name='description']";

/// `<meta name="author">`
pub const AUTHOR: &str = "meta[name='author']";

/// `<meta property="article:author">`
pub const ARTICLE_AUTHOR: &str = "meta[property='article:author']";

/// `<meta property="article:published_time">`
pub const ARTICLE_PUBLISHED_TIME: &str = "meta[property='article:published_time']";

/// `<meta name="publish-date">`
pub const PUBLISH_DATE: &str = "meta[name='publish-date']";

/// Non-empty `content` of the first meta tag matching `selector`.
pub fn meta_content<P: PageDocument>(page: &P, selector: &str) -> Option<String> {
    page.query_first(selector)
        .and_then(|meta| page.attribute(meta, "content"))
        .filter(|content| !content.is_empty())
}
