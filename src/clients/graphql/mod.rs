//! GraphQL client for the Vendure Shop and Admin APIs.
//!
//! This module provides a higher-level client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) that sends GraphQL documents and
//! decodes the response envelope.
//!
//! # Overview
//!
//! - [`GraphqlClient`]: Executes queries, mutations and built operations
//! - [`GraphqlResponse`]: The `{ data, errors }` envelope
//! - [`GraphqlErrorMessage`]: One entry of the `errors` array
//! - [`RequestOptions`]: Per-request channel, language and header overrides
//! - [`GraphqlError`]: Error type for GraphQL API operations
//!
//! # Response Structure
//!
//! Vendure answers with HTTP 200 even when the document fails validation or
//! a resolver throws; those failures are listed in `errors` and logged with
//! `tracing::warn!`. Union error results returned by mutations
//! (`... on ErrorResult { errorCode message }`) are ordinary `data`.
//!
//! # Sessions
//!
//! When the server hands out a session token in the auth token header (after
//! `login`, or on the first cart mutation for anonymous sessions), the client
//! stores it and sends it back as a bearer token on every later request.

mod client;
mod errors;
mod options;
mod response;

pub use client::GraphqlClient;
pub use errors::GraphqlError;
pub use options::RequestOptions;
pub use response::{GraphqlErrorMessage, GraphqlResponse};
