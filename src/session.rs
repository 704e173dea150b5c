//! Stored identity-provider session.
//!
//! Only the bookkeeping lives here: what a session holds and when it must be
//! refreshed. Obtaining and refreshing tokens is the caller's job.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sessions are treated as expired this long before their stated expiry.
pub const EXPIRY_MARGIN_SECS: i64 = 60;

/// Tokens returned by a password or refresh-token grant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token for API calls.
    pub access_token: String,
    /// Token used to obtain a new session.
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Expiry as Unix seconds.
    #[serde(default)]
    pub expires_at: Option<i64>,
    /// User record as sent by the identity provider.
    #[serde(default)]
    pub user: Option<Value>,
}

impl Session {
    /// Expiry as a timestamp, if known and representable.
    #[must_use]
    pub fn expires_at_utc(&self) -> Option<DateTime<Utc>> {
        self.expires_at.and_then(|secs| DateTime::from_timestamp(secs, 0))
    }

    /// Whether the session must be refreshed at `now`.
    ///
    /// A session without a known expiry is always expired.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at_utc() {
            Some(expires_at) => now > expires_at - Duration::seconds(EXPIRY_MARGIN_SECS),
            None => true,
        }
    }

    /// Whether the session must be refreshed now.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }

    /// The user's email, when the user record carries one.
    #[must_use]
    pub fn user_email(&self) -> Option<&str> {
        self.user.as_ref()?.get("email")?.as_str()
    }
}
