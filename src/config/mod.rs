//! Configuration types for the Vendure API SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for communication with a Vendure server.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`VendureConfig`]: The main configuration struct holding all SDK settings
//! - [`VendureConfigBuilder`]: A builder for constructing [`VendureConfig`] instances
//! - [`ApiUrl`]: A validated GraphQL endpoint URL
//! - [`ChannelToken`]: A channel token with masked debug output
//! - [`LanguageCode`]: A validated Vendure language code
//!
//! # Example
//!
//! ```rust
//! use vendure_api::{VendureConfig, ApiUrl, ChannelToken, LanguageCode};
//!
//! let config = VendureConfig::builder()
//!     .api_url(ApiUrl::new("https://demo.vendure.io/shop-api").unwrap())
//!     .channel_token(ChannelToken::new("eu-channel").unwrap())
//!     .language_code(LanguageCode::new("de").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiUrl, ChannelToken, LanguageCode};

use crate::error::ConfigError;

/// Default name of the response header carrying bearer session tokens.
pub const DEFAULT_AUTH_TOKEN_HEADER: &str = "vendure-auth-token";

/// Configuration for the Vendure API SDK.
///
/// This struct holds everything the transport needs to talk to a Vendure
/// server: the endpoint, channel selection, language negotiation and the
/// name of the header used for bearer session tokens.
///
/// # Thread Safety
///
/// `VendureConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use vendure_api::{VendureConfig, ApiUrl};
///
/// let config = VendureConfig::builder()
///     .api_url(ApiUrl::new("http://localhost:3000/shop-api").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.auth_token_header(), "vendure-auth-token");
/// assert!(config.channel_token().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct VendureConfig {
    api_url: ApiUrl,
    channel_token: Option<ChannelToken>,
    language_code: Option<LanguageCode>,
    auth_token_header: String,
    user_agent_prefix: Option<String>,
}

impl VendureConfig {
    /// Creates a new builder for constructing a `VendureConfig`.
    #[must_use]
    pub fn builder() -> VendureConfigBuilder {
        VendureConfigBuilder::new()
    }

    /// Returns the GraphQL endpoint URL.
    #[must_use]
    pub const fn api_url(&self) -> &ApiUrl {
        &self.api_url
    }

    /// Returns the channel token, if configured.
    #[must_use]
    pub const fn channel_token(&self) -> Option<&ChannelToken> {
        self.channel_token.as_ref()
    }

    /// Returns the language code, if configured.
    #[must_use]
    pub const fn language_code(&self) -> Option<&LanguageCode> {
        self.language_code.as_ref()
    }

    /// Returns the name of the header carrying bearer session tokens.
    #[must_use]
    pub fn auth_token_header(&self) -> &str {
        &self.auth_token_header
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify VendureConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<VendureConfig>();
};

/// Builder for constructing [`VendureConfig`] instances.
///
/// `api_url` is required. All other fields have sensible defaults.
///
/// # Defaults
///
/// - `channel_token`: `None` (default channel)
/// - `language_code`: `None` (channel default language)
/// - `auth_token_header`: `vendure-auth-token`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct VendureConfigBuilder {
    api_url: Option<ApiUrl>,
    channel_token: Option<ChannelToken>,
    language_code: Option<LanguageCode>,
    auth_token_header: Option<String>,
    user_agent_prefix: Option<String>,
}

impl VendureConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the GraphQL endpoint URL (required).
    #[must_use]
    pub fn api_url(mut self, url: ApiUrl) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Sets the channel token sent as the `vendure-token` header.
    #[must_use]
    pub fn channel_token(mut self, token: ChannelToken) -> Self {
        self.channel_token = Some(token);
        self
    }

    /// Sets the language code sent as the `languageCode` query parameter.
    #[must_use]
    pub fn language_code(mut self, code: LanguageCode) -> Self {
        self.language_code = Some(code);
        self
    }

    /// Overrides the name of the bearer token header.
    ///
    /// This must match the `authOptions.authTokenHeaderKey` setting of the
    /// Vendure server.
    #[must_use]
    pub fn auth_token_header(mut self, header: impl Into<String>) -> Self {
        self.auth_token_header = Some(header.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`VendureConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_url` is not set.
    pub fn build(self) -> Result<VendureConfig, ConfigError> {
        let api_url = self
            .api_url
            .ok_or(ConfigError::MissingRequiredField { field: "api_url" })?;

        Ok(VendureConfig {
            api_url,
            channel_token: self.channel_token,
            language_code: self.language_code,
            auth_token_header: self
                .auth_token_header
                .unwrap_or_else(|| DEFAULT_AUTH_TOKEN_HEADER.to_string()),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shop_api() -> ApiUrl {
        ApiUrl::new("http://localhost:3000/shop-api").unwrap()
    }

    #[test]
    fn test_builder_requires_api_url() {
        let result = VendureConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_url" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = VendureConfig::builder().api_url(shop_api()).build().unwrap();

        assert_eq!(config.api_url().as_ref(), "http://localhost:3000/shop-api");
        assert!(config.channel_token().is_none());
        assert!(config.language_code().is_none());
        assert_eq!(config.auth_token_header(), DEFAULT_AUTH_TOKEN_HEADER);
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = VendureConfig::builder()
            .api_url(shop_api())
            .channel_token(ChannelToken::new("eu-channel").unwrap())
            .language_code(LanguageCode::new("de").unwrap())
            .auth_token_header("x-session-token")
            .user_agent_prefix("MyStorefront/1.0")
            .build()
            .unwrap();

        assert_eq!(config.channel_token().unwrap().as_ref(), "eu-channel");
        assert_eq!(config.language_code().unwrap().as_ref(), "de");
        assert_eq!(config.auth_token_header(), "x-session-token");
        assert_eq!(config.user_agent_prefix(), Some("MyStorefront/1.0"));
    }

    #[test]
    fn test_config_debug_masks_channel_token() {
        let config = VendureConfig::builder()
            .api_url(shop_api())
            .channel_token(ChannelToken::new("secret-channel").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("VendureConfig"));
        assert!(!debug_str.contains("secret-channel"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<VendureConfig>();
    }
}
