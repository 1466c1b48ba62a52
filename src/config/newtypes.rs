//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Vendure GraphQL endpoint URL.
///
/// This newtype validates that the URL has a scheme and a host. Trailing
/// slashes are removed so the URL can be used directly as the request target.
///
/// # Example
///
/// ```rust
/// use vendure_api::ApiUrl;
///
/// let url = ApiUrl::new("https://demo.vendure.io/shop-api/").unwrap();
/// assert_eq!(url.as_ref(), "https://demo.vendure.io/shop-api");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), Some("demo.vendure.io"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl ApiUrl {
    /// Creates a new validated API URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidApiUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidApiUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidApiUrl { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidApiUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl Serialize for ApiUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for ApiUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated Vendure channel token.
///
/// Sent as the `vendure-token` header to select a non-default channel. The
/// `Debug` implementation masks the value so tokens do not leak into logs.
///
/// # Example
///
/// ```rust
/// use vendure_api::ChannelToken;
///
/// let token = ChannelToken::new("eu-channel").unwrap();
/// assert_eq!(token.as_ref(), "eu-channel");
/// assert_eq!(format!("{:?}", token), "ChannelToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ChannelToken(String);

impl ChannelToken {
    /// Creates a new validated channel token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyChannelToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyChannelToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for ChannelToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ChannelToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ChannelToken(*****)")
    }
}

/// A validated Vendure language code.
///
/// Vendure language codes are ISO 639 codes with an optional region or
/// script suffix joined by an underscore (`en`, `de`, `pt_BR`, `zh_Hans`).
///
/// # Example
///
/// ```rust
/// use vendure_api::LanguageCode;
///
/// let code = LanguageCode::new("pt_BR").unwrap();
/// assert_eq!(code.as_ref(), "pt_BR");
/// assert!(LanguageCode::new("english").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Creates a new validated language code.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLanguageCode`] if the code is malformed.
    pub fn new(code: impl Into<String>) -> Result<Self, ConfigError> {
        let code = code.into();
        let code = code.trim().to_string();

        if !Self::is_valid(&code) {
            return Err(ConfigError::InvalidLanguageCode { code });
        }
        Ok(Self(code))
    }

    fn is_valid(code: &str) -> bool {
        let (language, region) = match code.split_once('_') {
            Some((language, region)) => (language, Some(region)),
            None => (code, None),
        };

        let language_ok =
            (2..=3).contains(&language.len()) && language.chars().all(|c| c.is_ascii_lowercase());
        let region_ok = region.map_or(true, |r| {
            (2..=4).contains(&r.len()) && r.chars().all(|c| c.is_ascii_alphanumeric())
        });

        language_ok && region_ok
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
