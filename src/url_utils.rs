//! URL utilities for page locations and service endpoints.

use url::Url;

use crate::error::{Error, Result};

/// Canonical form of a page location.
///
/// Absolute URLs are re-serialized (lowercased scheme and host, default port
/// dropped, path normalized). Anything unparsable is passed through as-is.
#[must_use]
pub fn canonical_page_url(location: &str) -> String {
    Url::parse(location).map_or_else(|_| location.to_string(), |url| url.to_string())
}

/// Parses a service base URL, requiring an http(s) scheme.
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`] for unparsable or non-http(s) URLs.
pub fn parse_base_url(base: &str) -> Result<Url> {
    let url = Url::parse(base).map_err(|err| Error::InvalidUrl {
        url: base.to_string(),
        reason: err.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::InvalidUrl {
            url: base.to_string(),
            reason: format!("unsupported scheme {:?}", url.scheme()),
        });
    }

    Ok(url)
}

/// Appends `path` (which may carry a query) to `base`.
///
/// Unlike [`Url::join`] this never drops the last segment of the base path:
/// `https://host/api` + `memories` gives `https://host/api/memories`.
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`] if the result does not parse.
pub fn join_endpoint(base: &str, path: &str) -> Result<Url> {
    let joined = format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    parse_base_url(&joined)
}
