//! GraphQL-specific error types for the Vendure API SDK.
//!
//! Only transport and decoding failures are SDK errors. GraphQL-level errors
//! (validation failures, `FORBIDDEN`, unknown fields) arrive with HTTP 200
//! and are returned inside [`GraphqlResponse::errors`](super::GraphqlResponse::errors).
//! Union error results such as `ORDER_MODIFICATION_ERROR` are ordinary data.
//!
//! - [`GraphqlError::Http`]: Wraps underlying HTTP errors
//! - [`GraphqlError::Decode`]: The body or its `data` could not be decoded

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for GraphQL API operations.
///
/// # Example
///
/// ```rust
/// use vendure_api::clients::graphql::GraphqlError;
/// use vendure_api::clients::{HttpError, HttpResponseError};
///
/// let http_error = HttpError::Response(HttpResponseError {
///     code: 401,
///     message: r#"{"error":"Unauthorized"}"#.to_string(),
///     error_reference: None,
/// });
/// let graphql_error: GraphqlError = http_error.into();
/// assert!(graphql_error.to_string().contains("Unauthorized"));
/// ```
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// An HTTP-level error occurred: network errors, non-2xx responses or
    /// an invalid request.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response could not be decoded into the expected shape.
    #[error("Failed to decode GraphQL response: {message}")]
    Decode {
        /// What went wrong.
        message: String,
    },
}

impl From<serde_json::Error> for GraphqlError {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode {
            message: error.to_string(),
        }
    }
}
