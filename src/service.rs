//! Memory service endpoints.
//!
//! Base URLs come from configuration; every endpoint is derived from them so
//! callers never assemble paths by hand.

use std::io::Read;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Result;
use crate::url_utils::{join_endpoint, parse_base_url};

/// Base URLs of the services a capture client talks to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Memory and chat API.
    pub api_url: String,
    /// Identity provider.
    pub auth_url: String,
    /// Web app, opened for account management.
    pub app_url: String,
}

impl ServiceConfig {
    /// Builds a config, validating all three base URLs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`](crate::Error::InvalidUrl) for any base
    /// URL that is not absolute http(s).
    pub fn new(api_url: &str, auth_url: &str, app_url: &str) -> Result<Self> {
        let config = Self {
            api_url: api_url.to_string(),
            auth_url: auth_url.to_string(),
            app_url: app_url.to_string(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a JSON config.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) or
    /// [`Error::InvalidUrl`](crate::Error::InvalidUrl).
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON config from any reader.
    ///
    /// # Errors
    ///
    /// Same as [`ServiceConfig::from_json`], plus [`Error::Io`](crate::Error::Io).
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json(&json)
    }

    /// Checks that every base URL is absolute http(s).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`](crate::Error::InvalidUrl) naming the
    /// first bad URL.
    pub fn validate(&self) -> Result<()> {
        parse_base_url(&self.api_url)?;
        parse_base_url(&self.auth_url)?;
        parse_base_url(&self.app_url)?;
        Ok(())
    }

    /// Organizations of the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`](crate::Error::InvalidUrl) if the base URL is invalid.
    pub fn orgs(&self) -> Result<Url> {
        join_endpoint(&self.api_url, "orgs")
    }

    /// Create-memory endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`](crate::Error::InvalidUrl) if the base URL is invalid.
    pub fn memories(&self) -> Result<Url> {
        join_endpoint(&self.api_url, "memories")
    }

    /// Streaming ask endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`](crate::Error::InvalidUrl) if the base URL is invalid.
    pub fn chat_stream(&self) -> Result<Url> {
        join_endpoint(&self.api_url, "general-chat/ask/stream")
    }

    /// Conversation list endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`](crate::Error::InvalidUrl) if the base URL is invalid.
    pub fn conversations(&self) -> Result<Url> {
        join_endpoint(&self.api_url, "general-chat/conversations")
    }

    /// Password sign-in grant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`](crate::Error::InvalidUrl) if the base URL is invalid.
    pub fn password_grant(&self) -> Result<Url> {
        join_endpoint(&self.auth_url, "auth/v1/token?grant_type=password")
    }

    /// Refresh-token grant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`](crate::Error::InvalidUrl) if the base URL is invalid.
    pub fn refresh_grant(&self) -> Result<Url> {
        join_endpoint(&self.auth_url, "auth/v1/token?grant_type=refresh_token")
    }
}
