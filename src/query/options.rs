//! Options accepted by the query builders.
//!
//! Every builder takes a caller-overridable list of base leaf fields. The
//! defaults are deliberately minimal; nested selections that a storefront
//! almost always needs (assets, variants, lines) are fixed by the builders.
//!
//! `include_custom_fields` follows
//! [`FieldRegistry::should_include`](crate::custom_fields::FieldRegistry::should_include):
//! `None` injects registered fragments when any exist, `Some(false)` never
//! injects, and `Some(true)` always asks the registry.

/// Default leaf fields selected on `Product`.
pub const DEFAULT_PRODUCT_FIELDS: &[&str] = &["id", "name", "slug", "description", "enabled"];

/// Default leaf fields selected on `Collection`.
pub const DEFAULT_COLLECTION_FIELDS: &[&str] = &["id", "name", "slug", "description"];

/// Default leaf fields selected on `Facet`.
pub const DEFAULT_FACET_FIELDS: &[&str] = &["id", "name", "code"];

/// Default leaf fields selected on `Order`.
pub const DEFAULT_ORDER_FIELDS: &[&str] = &[
    "id",
    "code",
    "state",
    "active",
    "createdAt",
    "updatedAt",
    "orderPlacedAt",
    "couponCodes",
    "totalQuantity",
    "subTotal",
    "subTotalWithTax",
    "shipping",
    "shippingWithTax",
    "total",
    "totalWithTax",
    "currencyCode",
];

/// Default leaf fields selected on `Customer`.
pub const DEFAULT_CUSTOMER_FIELDS: &[&str] = &[
    "id",
    "title",
    "firstName",
    "lastName",
    "emailAddress",
    "phoneNumber",
];

fn owned(fields: &[&str]) -> Vec<String> {
    fields.iter().map(ToString::to_string).collect()
}

/// How a single entity is looked up.
///
/// Using an enum makes "both id and slug" unrepresentable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Lookup {
    /// `($id: ID!)`.
    #[default]
    Id,
    /// `($slug: String!)`.
    Slug,
}

impl Lookup {
    /// Returns the variable name.
    #[must_use]
    pub const fn variable_name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Slug => "slug",
        }
    }

    /// Returns the GraphQL type of the variable.
    #[must_use]
    pub const fn variable_type(self) -> &'static str {
        match self {
            Self::Id => "ID!",
            Self::Slug => "String!",
        }
    }

    /// Returns the field argument, e.g. `id: $id`.
    #[must_use]
    pub const fn argument(self) -> &'static str {
        match self {
            Self::Id => "id: $id",
            Self::Slug => "slug: $slug",
        }
    }
}

/// Options for `products` and `product`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductQueryOptions {
    /// Leaf fields selected on each product.
    pub fields: Vec<String>,
    /// Select `variants { ... }`.
    pub include_variants: bool,
    /// See the module documentation.
    pub include_custom_fields: Option<bool>,
}

impl Default for ProductQueryOptions {
    fn default() -> Self {
        Self {
            fields: owned(DEFAULT_PRODUCT_FIELDS),
            include_variants: true,
            include_custom_fields: None,
        }
    }
}

/// Options for `collections` and `collection`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectionQueryOptions {
    /// Leaf fields selected on each collection.
    pub fields: Vec<String>,
    /// Select `productVariants(options: $variantOptions) { items { ... } }`.
    ///
    /// Adds the `$variantOptions: ProductVariantListOptions` variable.
    pub include_product_variants: bool,
    /// See the module documentation.
    pub include_custom_fields: Option<bool>,
}

impl Default for CollectionQueryOptions {
    fn default() -> Self {
        Self {
            fields: owned(DEFAULT_COLLECTION_FIELDS),
            include_product_variants: false,
            include_custom_fields: None,
        }
    }
}

/// Options for `facets` and `facet`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FacetQueryOptions {
    /// Leaf fields selected on each facet.
    pub fields: Vec<String>,
    /// Select `values { id name code }`.
    pub include_values: bool,
    /// See the module documentation.
    pub include_custom_fields: Option<bool>,
}

impl Default for FacetQueryOptions {
    fn default() -> Self {
        Self {
            fields: owned(DEFAULT_FACET_FIELDS),
            include_values: true,
            include_custom_fields: None,
        }
    }
}

/// Options for `search`. Search results never carry custom fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchQueryOptions {
    /// Select the `facetValues { count facetValue { ... } }` aggregation.
    pub include_facet_values: bool,
    /// Select the `collections { count collection { ... } }` aggregation.
    pub include_collections: bool,
}

impl Default for SearchQueryOptions {
    fn default() -> Self {
        Self {
            include_facet_values: true,
            include_collections: false,
        }
    }
}

/// Options for every order query and mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderQueryOptions {
    /// Leaf fields selected on the order.
    pub fields: Vec<String>,
    /// See the module documentation.
    pub include_custom_fields: Option<bool>,
}

impl Default for OrderQueryOptions {
    fn default() -> Self {
        Self {
            fields: owned(DEFAULT_ORDER_FIELDS),
            include_custom_fields: None,
        }
    }
}

/// Options for every customer query and mutation.
///
/// Customer documents always select `customFields` and every extended
/// `Customer` declaration, so there is no custom-field toggle here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomerQueryOptions {
    /// Leaf fields selected on the customer.
    pub fields: Vec<String>,
    /// Select `addresses { ... }`.
    pub include_addresses: bool,
}

impl Default for CustomerQueryOptions {
    fn default() -> Self {
        Self {
            fields: owned(DEFAULT_CUSTOMER_FIELDS),
            include_addresses: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_signatures() {
        assert_eq!(Lookup::Id.variable_name(), "id");
        assert_eq!(Lookup::Id.variable_type(), "ID!");
        assert_eq!(Lookup::Id.argument(), "id: $id");
        assert_eq!(Lookup::Slug.variable_type(), "String!");
        assert_eq!(Lookup::Slug.argument(), "slug: $slug");
        assert_eq!(Lookup::default(), Lookup::Id);
    }

    #[test]
    fn test_defaults() {
        let product = ProductQueryOptions::default();
        assert_eq!(product.fields, ["id", "name", "slug", "description", "enabled"]);
        assert!(product.include_variants);
        assert_eq!(product.include_custom_fields, None);

        assert!(!CollectionQueryOptions::default().include_product_variants);
        assert!(FacetQueryOptions::default().include_values);
        assert!(SearchQueryOptions::default().include_facet_values);
        assert!(!CustomerQueryOptions::default().include_addresses);
        assert_eq!(OrderQueryOptions::default().fields[1], "code");
    }
}
