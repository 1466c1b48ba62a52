//! GraphQL document assembly.
//!
//! [`QueryBuilder`] produces complete query and mutation documents for the
//! Vendure Shop API. Each document has a fixed operation header, a base
//! selection that callers can narrow, and splice points where fragments from
//! a [`FieldRegistry`](crate::custom_fields::FieldRegistry) are added.
//!
//! # Splice Points
//!
//! | Document | Types spliced |
//! |----------|---------------|
//! | products, product | `Product`, `ProductVariant` (inside `variants`) |
//! | collections, collection | `Collection`, `ProductVariant` (inside `productVariants.items`) |
//! | facets, facet | `Facet` |
//! | search | none |
//! | order queries and cart mutations | `Customer`, `ProductVariant`, `Product`, then `Order` last |
//! | customer documents | `customFields` always, then each extended `Customer` fragment |
//! | login, logout, registerCustomerAccount | none |
//!
//! # Example
//!
//! ```rust
//! use vendure_api::custom_fields::{FieldDeclaration, FieldRegistry};
//! use vendure_api::query::{Operation, OrderQueryOptions, QueryBuilder};
//!
//! let registry = FieldRegistry::new();
//! registry.add(FieldDeclaration::custom_fields_block(["giftMessage"], ["Order"]));
//!
//! let document = QueryBuilder::new(&registry)
//!     .build(&Operation::ActiveOrder(OrderQueryOptions::default()));
//!
//! assert!(document.starts_with("query activeOrder {"));
//! assert!(document.contains("customFields { giftMessage }"));
//! ```

mod auth;
mod builder;
mod catalog;
mod customer;
mod document;
mod operation;
mod options;
mod order;
mod selection;

pub use builder::QueryBuilder;
pub use document::{Document, OperationType};
pub use operation::Operation;
pub use options::{
    CollectionQueryOptions, CustomerQueryOptions, FacetQueryOptions, Lookup, OrderQueryOptions,
    ProductQueryOptions, SearchQueryOptions, DEFAULT_COLLECTION_FIELDS, DEFAULT_CUSTOMER_FIELDS,
    DEFAULT_FACET_FIELDS, DEFAULT_ORDER_FIELDS, DEFAULT_PRODUCT_FIELDS,
};
pub use selection::{Selection, SelectionSet, INDENT};
