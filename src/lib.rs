//! # Vendure API Rust SDK
//!
//! A Rust SDK for the Vendure e-commerce GraphQL API, providing GraphQL
//! document assembly with runtime-registered custom fields, type-safe
//! configuration, and an async transport with session handling.
//!
//! ## Overview
//!
//! This SDK provides:
//! - A custom-field registry ([`FieldRegistry`]) for fields added to the
//!   Vendure schema, either natively under `customFields` or by schema extension
//! - A document builder ([`QueryBuilder`]) for catalog, order, customer and
//!   auth operations that splices registered fields in at the right places
//! - Type-safe configuration via [`VendureConfig`] and [`VendureConfigBuilder`]
//! - An async GraphQL client ([`GraphqlClient`]) with channel, language and
//!   bearer session token handling
//!
//! ## Quick Start
//!
//! ```rust
//! use vendure_api::{FieldDeclaration, FieldRegistry, QueryBuilder};
//! use vendure_api::query::{Lookup, ProductQueryOptions};
//!
//! // Register the fields your server adds, once at startup
//! let registry = FieldRegistry::new();
//! registry
//!     .add(FieldDeclaration::asset("mainUsdzAsset", ["Product"]))
//!     .add(FieldDeclaration::custom_fields_block(["warranty"], ["ProductVariant"]));
//!
//! // Every document built from the registry picks them up
//! let document = QueryBuilder::new(&registry)
//!     .product(Lookup::Slug, &ProductQueryOptions::default());
//!
//! assert!(document.starts_with("query product($slug: String!)"));
//! assert!(document.contains("mainUsdzAsset { id name source preview }"));
//! assert!(document.contains("customFields { warranty }"));
//! ```
//!
//! ## Executing Documents
//!
//! ```rust,ignore
//! use vendure_api::{ApiUrl, ChannelToken, GraphqlClient, LanguageCode, VendureConfig};
//! use serde_json::json;
//!
//! let config = VendureConfig::builder()
//!     .api_url(ApiUrl::new("https://demo.vendure.io/shop-api")?)
//!     .channel_token(ChannelToken::new("uk-channel")?)
//!     .language_code(LanguageCode::new("en")?)
//!     .build()?;
//!
//! let client = GraphqlClient::new(&config);
//! let response = client
//!     .execute_mutation(
//!         &builder.add_item_to_order(&Default::default()),
//!         Some(json!({ "productVariantId": "42", "quantity": 1 })),
//!         None,
//!     )
//!     .await?;
//! ```
//!
//! ## Design Principles
//!
//! - **Documents are always well-formed**: builders assemble a selection tree
//!   and render it once, so braces balance whatever options are toggled
//! - **Bad registrations never crash**: invalid fragments are dropped with a
//!   `tracing` warning
//! - **Thread-safe**: the registry, builder and clients are `Send + Sync`
//! - **Fail-fast configuration**: validated newtypes reject bad input at construction

pub mod clients;
pub mod config;
pub mod custom_fields;
pub mod error;
pub mod query;

// Re-export public types at crate root for convenience
pub use config::{ApiUrl, ChannelToken, LanguageCode, VendureConfig, VendureConfigBuilder};
pub use error::ConfigError;

// Re-export the registry and builder
pub use custom_fields::{CustomFields, FieldDeclaration, FieldRegistry, FragmentError};
pub use query::{Operation, QueryBuilder};

// Re-export HTTP and GraphQL client types
pub use clients::{
    GraphqlClient, GraphqlError, GraphqlResponse, HttpClient, HttpError, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponse, HttpResponseError, InvalidHttpRequestError, RequestOptions,
};
