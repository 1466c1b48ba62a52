//! The [`QueryBuilder`] entry point.

use crate::custom_fields::FieldRegistry;

use super::operation::Operation;
use super::selection::SelectionSet;

/// Assembles GraphQL documents, splicing in fragments from a [`FieldRegistry`].
///
/// A builder borrows its registry and holds no other state, so it is cheap to
/// copy and can be created wherever a document is needed. The registry is read
/// at every splice point, which means registrations made after the builder was
/// created are still picked up.
///
/// Each operation has a dedicated method returning the rendered document.
/// [`build`](Self::build) dispatches on an [`Operation`] value for callers that
/// choose the operation at runtime.
///
/// # Thread Safety
///
/// `QueryBuilder` is `Send + Sync`. Building is synchronous and never blocks
/// for longer than a single registry read.
///
/// # Example
///
/// ```rust
/// use vendure_api::custom_fields::{FieldDeclaration, FieldRegistry};
/// use vendure_api::query::{Lookup, ProductQueryOptions, QueryBuilder};
///
/// let registry = FieldRegistry::new();
/// registry.add(FieldDeclaration::asset("heroImage", ["Product"]));
///
/// let builder = QueryBuilder::new(&registry);
///
/// let with_fields = builder.product(Lookup::Slug, &ProductQueryOptions::default());
/// assert!(with_fields.starts_with("query product($slug: String!)"));
/// assert!(with_fields.contains("heroImage { id name source preview }"));
///
/// let options = ProductQueryOptions {
///     include_custom_fields: Some(false),
///     ..ProductQueryOptions::default()
/// };
/// let without_fields = builder.product(Lookup::Slug, &options);
/// assert!(!without_fields.contains("heroImage"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct QueryBuilder<'r> {
    registry: &'r FieldRegistry,
}

// Verify QueryBuilder is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<QueryBuilder<'static>>();
};

impl<'r> QueryBuilder<'r> {
    /// Creates a builder reading from `registry`.
    #[must_use]
    pub const fn new(registry: &'r FieldRegistry) -> Self {
        Self { registry }
    }

    /// Returns the registry this builder reads from.
    #[must_use]
    pub const fn registry(&self) -> &'r FieldRegistry {
        self.registry
    }

    /// Builds the document for `operation`.
    #[must_use]
    pub fn build(&self, operation: &Operation) -> String {
        let document = match operation {
            Operation::Products(options) => self.products(options),
            Operation::Product { lookup, options } => self.product(*lookup, options),
            Operation::Collections(options) => self.collections(options),
            Operation::Collection { lookup, options } => self.collection(*lookup, options),
            Operation::Facets(options) => self.facets(options),
            Operation::Facet(options) => self.facet(options),
            Operation::Search(options) => self.search(*options),
            Operation::ActiveOrder(options) => self.active_order(options),
            Operation::OrderByCode(options) => self.order_by_code(options),
            Operation::Order(options) => self.order(options),
            Operation::Orders(options) => self.orders(options),
            Operation::AddItemToOrder(options) => self.add_item_to_order(options),
            Operation::AdjustOrderLine(options) => self.adjust_order_line(options),
            Operation::RemoveOrderLine(options) => self.remove_order_line(options),
            Operation::SetOrderShippingAddress(options) => {
                self.set_order_shipping_address(options)
            }
            Operation::SetOrderBillingAddress(options) => self.set_order_billing_address(options),
            Operation::SetOrderShippingMethod(options) => self.set_order_shipping_method(options),
            Operation::ApplyCouponCode(options) => self.apply_coupon_code(options),
            Operation::TransitionOrderToState(options) => self.transition_order_to_state(options),
            Operation::AddPaymentToOrder(options) => self.add_payment_to_order(options),
            Operation::ActiveCustomer(options) => self.active_customer(options),
            Operation::Customer(options) => self.customer(options),
            Operation::Customers(options) => self.customers(options),
            Operation::UpdateCustomer(options) => self.update_customer(options),
            Operation::Login => self.login(),
            Operation::Logout => self.logout(),
            Operation::RegisterCustomerAccount => self.register_customer_account(),
        };

        tracing::debug!(
            operation = operation.name(),
            length = document.len(),
            "Built GraphQL document"
        );

        document
    }

    /// Splices every fragment registered for `type_name` into `set` when the
    /// registry says it should be included.
    pub(super) fn splice(&self, set: &mut SelectionSet, type_name: &str, include: Option<bool>) {
        if self.registry.should_include(type_name, include) {
            set.raw(self.registry.inject_fragment(type_name));
        }
    }
}

/// Selects the error branch shared by every union-returning mutation.
pub(super) fn error_result(set: &mut SelectionSet) {
    set.on("ErrorResult", |error| {
        error.fields(["errorCode", "message"]);
    });
}
