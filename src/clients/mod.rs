//! HTTP client types for Vendure API communication.
//!
//! This module provides the transport layer that executes documents built
//! by [`QueryBuilder`](crate::query::QueryBuilder).
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST)
//! - [`graphql::GraphqlClient`]: Higher-level GraphQL client
//! - [`graphql::GraphqlError`]: GraphQL-specific error types
//!
//! # Example
//!
//! ```rust,ignore
//! use vendure_api::{ApiUrl, VendureConfig};
//! use vendure_api::clients::{HttpClient, HttpMethod, HttpRequest};
//! use serde_json::json;
//!
//! let config = VendureConfig::builder()
//!     .api_url(ApiUrl::new("https://demo.vendure.io/shop-api").unwrap())
//!     .build()
//!     .unwrap();
//! let client = HttpClient::new(&config);
//!
//! let request = HttpRequest::builder(HttpMethod::Post, "")
//!     .body(json!({"query": "query { activeChannel { code } }"}))
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! Requests are sent once. Non-2xx responses are returned as
//! [`HttpError::Response`] without retrying.

mod errors;
pub mod graphql;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, CHANNEL_TOKEN_HEADER, LANGUAGE_CODE_PARAM, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

// Re-export GraphQL client types at the clients module level
pub use graphql::{GraphqlClient, GraphqlError, GraphqlResponse, RequestOptions};
