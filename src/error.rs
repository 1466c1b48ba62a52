//! Error types for the Vendure API SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use vendure_api::{ChannelToken, ConfigError};
//!
//! let result = ChannelToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyChannelToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API URL is invalid.
    #[error("Invalid API URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://shop.example.com/shop-api').")]
    InvalidApiUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Channel token cannot be empty.
    #[error("Channel token cannot be empty. Omit the channel token to use the default channel.")]
    EmptyChannelToken,

    /// Language code is invalid.
    #[error("Invalid language code '{code}'. Expected an ISO 639 code such as 'en' or 'pt_BR'.")]
    InvalidLanguageCode {
        /// The invalid language code that was provided.
        code: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_channel_token_error_message() {
        let error = ConfigError::EmptyChannelToken;
        let message = error.to_string();
        assert!(message.contains("Channel token cannot be empty"));
        assert!(message.contains("default channel"));
    }

    #[test]
    fn test_invalid_api_url_error_message() {
        let error = ConfigError::InvalidApiUrl {
            url: "not a url".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not a url"));
        assert!(message.contains("shop-api"));
    }

    #[test]
    fn test_invalid_language_code_error_message() {
        let error = ConfigError::InvalidLanguageCode {
            code: "english".to_string(),
        };
        assert!(error.to_string().contains("'english'"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "api_url" };
        let message = error.to_string();
        assert!(message.contains("api_url"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyChannelToken;
        let _: &dyn std::error::Error = &error;
    }
}
