//! Per-request overrides for GraphQL calls.

use std::collections::HashMap;

use crate::clients::http_client::{CHANNEL_TOKEN_HEADER, LANGUAGE_CODE_PARAM};
use crate::config::{ChannelToken, LanguageCode};

/// Headers and query parameters applied to a single GraphQL request.
///
/// Values set here override the client's configured defaults for that
/// request only.
///
/// # Example
///
/// ```rust
/// use vendure_api::clients::graphql::RequestOptions;
/// use vendure_api::{ChannelToken, LanguageCode};
///
/// let options = RequestOptions::new()
///     .with_channel(&ChannelToken::new("us-channel").unwrap())
///     .with_language(&LanguageCode::new("en_US").unwrap())
///     .header("x-request-source", "checkout");
///
/// assert_eq!(options.headers().get("vendure-token"), Some(&"us-channel".to_string()));
/// assert_eq!(options.query().get("languageCode"), Some(&"en_US".to_string()));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    headers: HashMap<String, String>,
    query: HashMap<String, String>,
}

impl RequestOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Targets another channel for this request.
    #[must_use]
    pub fn with_channel(mut self, token: &ChannelToken) -> Self {
        self.headers
            .insert(CHANNEL_TOKEN_HEADER.to_string(), token.as_ref().to_string());
        self
    }

    /// Requests translated fields in another language for this request.
    #[must_use]
    pub fn with_language(mut self, code: &LanguageCode) -> Self {
        self.query
            .insert(LANGUAGE_CODE_PARAM.to_string(), code.as_ref().to_string());
        self
    }

    /// Adds an arbitrary header. Names are stored lowercased, so a later
    /// `Vendure-Token` replaces an earlier [`with_channel`](Self::with_channel).
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .insert(key.into().to_ascii_lowercase(), value.into());
        self
    }

    /// Returns the header overrides.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Returns the query parameter overrides.
    #[must_use]
    pub const fn query(&self) -> &HashMap<String, String> {
        &self.query
    }

    pub(crate) fn into_parts(self) -> (HashMap<String, String>, HashMap<String, String>) {
        (self.headers, self.query)
    }
}
