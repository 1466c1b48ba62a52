//! Named operations understood by [`QueryBuilder::build`](super::QueryBuilder::build).

use super::document::OperationType;
use super::options::{
    CollectionQueryOptions, CustomerQueryOptions, FacetQueryOptions, Lookup, OrderQueryOptions,
    ProductQueryOptions, SearchQueryOptions,
};

/// Every operation the SDK can build, with its options.
///
/// # Example
///
/// ```rust
/// use vendure_api::custom_fields::FieldRegistry;
/// use vendure_api::query::{Operation, OperationType, QueryBuilder, SearchQueryOptions};
///
/// let registry = FieldRegistry::new();
/// let operation = Operation::Search(SearchQueryOptions::default());
///
/// assert_eq!(operation.name(), "search");
/// assert_eq!(operation.operation_type(), OperationType::Query);
///
/// let document = QueryBuilder::new(&registry).build(&operation);
/// assert!(document.starts_with("query search($input: SearchInput!)"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    /// `products(options: $options)`.
    Products(ProductQueryOptions),
    /// `product(id: $id)` or `product(slug: $slug)`.
    Product {
        /// Lookup key.
        lookup: Lookup,
        /// Selection options.
        options: ProductQueryOptions,
    },
    /// `collections(options: $options)`.
    Collections(CollectionQueryOptions),
    /// `collection(id: $id)` or `collection(slug: $slug)`.
    Collection {
        /// Lookup key.
        lookup: Lookup,
        /// Selection options.
        options: CollectionQueryOptions,
    },
    /// `facets(options: $options)`.
    Facets(FacetQueryOptions),
    /// `facet(id: $id)`.
    Facet(FacetQueryOptions),
    /// `search(input: $input)`.
    Search(SearchQueryOptions),
    /// `activeOrder`.
    ActiveOrder(OrderQueryOptions),
    /// `orderByCode(code: $code)`.
    OrderByCode(OrderQueryOptions),
    /// `order(id: $id)`.
    Order(OrderQueryOptions),
    /// `activeCustomer { orders(options: $options) }`.
    Orders(OrderQueryOptions),
    /// `addItemToOrder` mutation.
    AddItemToOrder(OrderQueryOptions),
    /// `adjustOrderLine` mutation.
    AdjustOrderLine(OrderQueryOptions),
    /// `removeOrderLine` mutation.
    RemoveOrderLine(OrderQueryOptions),
    /// `setOrderShippingAddress` mutation.
    SetOrderShippingAddress(OrderQueryOptions),
    /// `setOrderBillingAddress` mutation.
    SetOrderBillingAddress(OrderQueryOptions),
    /// `setOrderShippingMethod` mutation.
    SetOrderShippingMethod(OrderQueryOptions),
    /// `applyCouponCode` mutation.
    ApplyCouponCode(OrderQueryOptions),
    /// `transitionOrderToState` mutation.
    TransitionOrderToState(OrderQueryOptions),
    /// `addPaymentToOrder` mutation.
    AddPaymentToOrder(OrderQueryOptions),
    /// `activeCustomer`.
    ActiveCustomer(CustomerQueryOptions),
    /// `customer(id: $id)`.
    Customer(CustomerQueryOptions),
    /// `customers(options: $options)`.
    Customers(CustomerQueryOptions),
    /// `updateCustomer` mutation.
    UpdateCustomer(CustomerQueryOptions),
    /// `login` mutation.
    Login,
    /// `logout` mutation.
    Logout,
    /// `registerCustomerAccount` mutation.
    RegisterCustomerAccount,
}

impl Operation {
    /// Returns the GraphQL operation name used in the document header.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Products(_) => "products",
            Self::Product { .. } => "product",
            Self::Collections(_) => "collections",
            Self::Collection { .. } => "collection",
            Self::Facets(_) => "facets",
            Self::Facet(_) => "facet",
            Self::Search(_) => "search",
            Self::ActiveOrder(_) => "activeOrder",
            Self::OrderByCode(_) => "orderByCode",
            Self::Order(_) => "order",
            Self::Orders(_) => "orders",
            Self::AddItemToOrder(_) => "addItemToOrder",
            Self::AdjustOrderLine(_) => "adjustOrderLine",
            Self::RemoveOrderLine(_) => "removeOrderLine",
            Self::SetOrderShippingAddress(_) => "setOrderShippingAddress",
            Self::SetOrderBillingAddress(_) => "setOrderBillingAddress",
            Self::SetOrderShippingMethod(_) => "setOrderShippingMethod",
            Self::ApplyCouponCode(_) => "applyCouponCode",
            Self::TransitionOrderToState(_) => "transitionOrderToState",
            Self::AddPaymentToOrder(_) => "addPaymentToOrder",
            Self::ActiveCustomer(_) => "activeCustomer",
            Self::Customer(_) => "customer",
            Self::Customers(_) => "customers",
            Self::UpdateCustomer(_) => "updateCustomer",
            Self::Login => "login",
            Self::Logout => "logout",
            Self::RegisterCustomerAccount => "registerCustomerAccount",
        }
    }

    /// Returns whether the operation is a query or a mutation.
    #[must_use]
    pub const fn operation_type(&self) -> OperationType {
        match self {
            Self::Products(_)
            | Self::Product { .. }
            | Self::Collections(_)
            | Self::Collection { .. }
            | Self::Facets(_)
            | Self::Facet(_)
            | Self::Search(_)
            | Self::ActiveOrder(_)
            | Self::OrderByCode(_)
            | Self::Order(_)
            | Self::Orders(_)
            | Self::ActiveCustomer(_)
            | Self::Customer(_)
            | Self::Customers(_) => OperationType::Query,
            Self::AddItemToOrder(_)
            | Self::AdjustOrderLine(_)
            | Self::RemoveOrderLine(_)
            | Self::SetOrderShippingAddress(_)
            | Self::SetOrderBillingAddress(_)
            | Self::SetOrderShippingMethod(_)
            | Self::ApplyCouponCode(_)
            | Self::TransitionOrderToState(_)
            | Self::AddPaymentToOrder(_)
            | Self::UpdateCustomer(_)
            | Self::Login
            | Self::Logout
            | Self::RegisterCustomerAccount => OperationType::Mutation,
        }
    }

    /// Returns `true` for mutations.
    #[must_use]
    pub const fn is_mutation(&self) -> bool {
        matches!(self.operation_type(), OperationType::Mutation)
    }
}
