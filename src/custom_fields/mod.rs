//! Runtime-extensible custom-field registry.
//!
//! Vendure servers are commonly extended with custom fields, either through
//! the native `customFields` configuration or through GraphQL schema
//! extensions. This module lets integrators declare the extra selections
//! once, at startup, and have every generated query pick them up.
//!
//! # Overview
//!
//! - [`FieldDeclaration`]: A fragment plus the GraphQL types it applies to
//! - [`FieldRegistry`]: Thread-safe, ordered store of declarations
//! - [`validate_fragment`]: The coarse validation applied on registration
//! - [`CustomFields`]: Typed access to decoded custom-field payloads
//!
//! # Extended vs Native Fields
//!
//! - **Extended** declarations (`is_extended = true`) are fields added via
//!   schema extension and are spliced directly into the selection set.
//! - **Native** declarations (`is_extended = false`) live inside Vendure's
//!   `customFields { ... }` object. Declare the whole block with
//!   [`FieldDeclaration::custom_fields_block`] or [`FieldDeclaration::native`].
//!
//! # Example
//!
//! ```rust
//! use vendure_api::custom_fields::{FieldDeclaration, FieldRegistry};
//! use vendure_api::query::{QueryBuilder, Lookup, ProductQueryOptions};
//!
//! let registry = FieldRegistry::new();
//! registry.add(FieldDeclaration::new(
//!     "mainUsdzAsset",
//!     "mainUsdzAsset { id name source }",
//!     ["Product"],
//!     true,
//! ));
//!
//! let builder = QueryBuilder::new(&registry);
//! let document = builder.product(Lookup::Id, &ProductQueryOptions::default());
//! assert!(document.contains("mainUsdzAsset { id name source }"));
//! ```
//!
//! # Unknown Type Names
//!
//! Type names are not checked against any schema. A misspelled type simply
//! never matches a splice point; [`FieldRegistry::summary`] lists every
//! declaration by type to make such mistakes visible.

mod declaration;
mod registry;
mod validation;
mod value;

pub use declaration::{FieldDeclaration, CUSTOM_FIELDS};
pub use registry::{FieldRegistry, FRAGMENT_SEPARATOR};
pub use validation::{is_valid_fragment, validate_fragment, FragmentError};
pub use value::CustomFields;
