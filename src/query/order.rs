//! Order documents: active order, order lookups and the cart mutations.
//!
//! Every order document selects the same order shape. Registered fragments
//! are spliced for `Customer` inside `customer`, for `ProductVariant` and
//! `Product` inside each line, and for `Order` last, just before the order's
//! closing brace.

use super::builder::{error_result, QueryBuilder};
use super::document::Document;
use super::options::OrderQueryOptions;
use super::selection::SelectionSet;

const ADDRESS_FIELDS: &[&str] = &[
    "fullName",
    "company",
    "streetLine1",
    "streetLine2",
    "city",
    "province",
    "postalCode",
    "country",
    "countryCode",
    "phoneNumber",
];

const LINE_FIELDS: &[&str] = &[
    "id",
    "quantity",
    "unitPrice",
    "unitPriceWithTax",
    "linePrice",
    "linePriceWithTax",
];

fn address(set: &mut SelectionSet) {
    set.fields(ADDRESS_FIELDS.iter().copied());
}

impl QueryBuilder<'_> {
    /// Builds `query activeOrder`.
    #[must_use]
    pub fn active_order(&self, options: &OrderQueryOptions) -> String {
        let mut root = SelectionSet::new();
        root.object("activeOrder", |order| self.order_selection(order, options));
        Document::query("activeOrder").selection(root).to_string()
    }

    /// Builds `query orderByCode($code: String!)`.
    #[must_use]
    pub fn order_by_code(&self, options: &OrderQueryOptions) -> String {
        let mut root = SelectionSet::new();
        root.object_with_args("orderByCode", "code: $code", |order| {
            self.order_selection(order, options);
        });
        Document::query("orderByCode")
            .variable("code", "String!")
            .selection(root)
            .to_string()
    }

    /// Builds `query order($id: ID!)`.
    #[must_use]
    pub fn order(&self, options: &OrderQueryOptions) -> String {
        let mut root = SelectionSet::new();
        root.object_with_args("order", "id: $id", |order| {
            self.order_selection(order, options);
        });
        Document::query("order")
            .variable("id", "ID!")
            .selection(root)
            .to_string()
    }

    /// Builds `query orders($options: OrderListOptions)`.
    ///
    /// The Shop API exposes order history through the active customer, so
    /// the list is selected as `activeCustomer { orders(options: $options) }`.
    #[must_use]
    pub fn orders(&self, options: &OrderQueryOptions) -> String {
        let mut root = SelectionSet::new();
        root.object("activeCustomer", |customer| {
            customer.field("id").object_with_args(
                "orders",
                "options: $options",
                |orders| {
                    orders.object("items", |items| self.order_selection(items, options));
                    orders.field("totalItems");
                },
            );
        });
        Document::query("orders")
            .variable("options", "OrderListOptions")
            .selection(root)
            .to_string()
    }

    /// Builds `mutation addItemToOrder($productVariantId: ID!, $quantity: Int!)`.
    #[must_use]
    pub fn add_item_to_order(&self, options: &OrderQueryOptions) -> String {
        self.order_mutation(
            "addItemToOrder",
            &[("productVariantId", "ID!"), ("quantity", "Int!")],
            "productVariantId: $productVariantId, quantity: $quantity",
            options,
        )
    }

    /// Builds `mutation adjustOrderLine($orderLineId: ID!, $quantity: Int!)`.
    #[must_use]
    pub fn adjust_order_line(&self, options: &OrderQueryOptions) -> String {
        self.order_mutation(
            "adjustOrderLine",
            &[("orderLineId", "ID!"), ("quantity", "Int!")],
            "orderLineId: $orderLineId, quantity: $quantity",
            options,
        )
    }

    /// Builds `mutation removeOrderLine($orderLineId: ID!)`.
    #[must_use]
    pub fn remove_order_line(&self, options: &OrderQueryOptions) -> String {
        self.order_mutation(
            "removeOrderLine",
            &[("orderLineId", "ID!")],
            "orderLineId: $orderLineId",
            options,
        )
    }

    /// Builds `mutation setOrderShippingAddress($input: CreateAddressInput!)`.
    #[must_use]
    pub fn set_order_shipping_address(&self, options: &OrderQueryOptions) -> String {
        self.order_mutation(
            "setOrderShippingAddress",
            &[("input", "CreateAddressInput!")],
            "input: $input",
            options,
        )
    }

    /// Builds `mutation setOrderBillingAddress($input: CreateAddressInput!)`.
    #[must_use]
    pub fn set_order_billing_address(&self, options: &OrderQueryOptions) -> String {
        self.order_mutation(
            "setOrderBillingAddress",
            &[("input", "CreateAddressInput!")],
            "input: $input",
            options,
        )
    }

    /// Builds `mutation setOrderShippingMethod($shippingMethodId: [ID!]!)`.
    #[must_use]
    pub fn set_order_shipping_method(&self, options: &OrderQueryOptions) -> String {
        self.order_mutation(
            "setOrderShippingMethod",
            &[("shippingMethodId", "[ID!]!")],
            "shippingMethodId: $shippingMethodId",
            options,
        )
    }

    /// Builds `mutation applyCouponCode($couponCode: String!)`.
    #[must_use]
    pub fn apply_coupon_code(&self, options: &OrderQueryOptions) -> String {
        self.order_mutation(
            "applyCouponCode",
            &[("couponCode", "String!")],
            "couponCode: $couponCode",
            options,
        )
    }

    /// Builds `mutation transitionOrderToState($state: String!)`.
    #[must_use]
    pub fn transition_order_to_state(&self, options: &OrderQueryOptions) -> String {
        self.order_mutation(
            "transitionOrderToState",
            &[("state", "String!")],
            "state: $state",
            options,
        )
    }

    /// Builds `mutation addPaymentToOrder($input: PaymentInput!)`.
    #[must_use]
    pub fn add_payment_to_order(&self, options: &OrderQueryOptions) -> String {
        self.order_mutation(
            "addPaymentToOrder",
            &[("input", "PaymentInput!")],
            "input: $input",
            options,
        )
    }

    /// Builds a mutation whose result is either an `Order` or an `ErrorResult`.
    fn order_mutation(
        &self,
        name: &str,
        variables: &[(&str, &str)],
        arguments: &str,
        options: &OrderQueryOptions,
    ) -> String {
        let mut root = SelectionSet::new();
        root.object_with_args(name, arguments, |result| {
            result.on("Order", |order| self.order_selection(order, options));
            error_result(result);
        });

        variables
            .iter()
            .fold(Document::mutation(name), |document, (variable, type_name)| {
                document.variable(*variable, *type_name)
            })
            .selection(root)
            .to_string()
    }

    fn order_selection(&self, set: &mut SelectionSet, options: &OrderQueryOptions) {
        let include = options.include_custom_fields;

        set.fields(options.fields.iter().cloned());
        set.object("customer", |customer| {
            customer.fields(["id", "firstName", "lastName", "emailAddress"]);
            self.splice(customer, "Customer", include);
        });
        set.object("shippingAddress", address)
            .object("billingAddress", address);
        set.object("lines", |lines| {
            lines
                .fields(LINE_FIELDS.iter().copied())
                .object("featuredAsset", |asset| {
                    asset.fields(["id", "preview"]);
                })
                .object("productVariant", |variant| {
                    variant.fields(["id", "name", "sku", "price", "priceWithTax"]);
                    self.splice(variant, "ProductVariant", include);
                    variant.object("product", |product| {
                        product.fields(["id", "name", "slug"]);
                        self.splice(product, "Product", include);
                    });
                });
        });
        set.object("shippingLines", |shipping| {
            shipping
                .object("shippingMethod", |method| {
                    method.fields(["id", "code", "name"]);
                })
                .field("priceWithTax");
        });
        self.splice(set, "Order", include);
    }
}

#[cfg(test)]
mod tests {
    use crate::custom_fields::{FieldDeclaration, FieldRegistry};
    use crate::query::{OrderQueryOptions, QueryBuilder};

    fn registry() -> FieldRegistry {
        let registry = FieldRegistry::new();
        registry
            .add(FieldDeclaration::scalar("vipTier", ["Customer"]))
            .add(FieldDeclaration::relation_ids("bundleItems", ["ProductVariant"]))
            .add(FieldDeclaration::asset("arModel", ["Product"]))
            .add(FieldDeclaration::custom_fields_block(
                ["giftMessage", "deliveryDate"],
                ["Order"],
            ));
        registry
    }

    #[test]
    fn test_active_order_splice_points() {
        let registry = registry();
        let document = QueryBuilder::new(&registry).active_order(&OrderQueryOptions::default());

        assert!(document.starts_with("query activeOrder {\n  activeOrder {\n"));

        let customer = document.find("customer {").unwrap();
        let vip = document.find("vipTier").unwrap();
        let variant = document.find("productVariant {").unwrap();
        let bundle = document.find("bundleItems { id }").unwrap();
        let product = document.find("product {").unwrap();
        let ar_model = document.find("arModel { id name source preview }").unwrap();
        let shipping_lines = document.find("shippingLines {").unwrap();
        let order_block = document
            .find("customFields { giftMessage deliveryDate }")
            .unwrap();

        assert!(customer < vip && vip < variant);
        assert!(variant < bundle && bundle < product);
        assert!(product < ar_model && ar_model < shipping_lines);
        assert!(shipping_lines < order_block);
    }

    #[test]
    fn test_order_fragment_is_emitted_last() {
        let registry = registry();
        let document = QueryBuilder::new(&registry).order(&OrderQueryOptions::default());

        assert!(document.starts_with("query order($id: ID!) {\n"));
        assert!(document.ends_with(
            "    customFields { giftMessage deliveryDate }\n  }\n}\n"
        ));
    }

    #[test]
    fn test_excluding_custom_fields_removes_every_splice() {
        let registry = registry();
        let options = OrderQueryOptions {
            include_custom_fields: Some(false),
            ..OrderQueryOptions::default()
        };
        let document = QueryBuilder::new(&registry).order_by_code(&options);

        assert!(document.starts_with("query orderByCode($code: String!) {\n"));
        for fragment in ["vipTier", "bundleItems", "arModel", "giftMessage"] {
            assert!(!document.contains(fragment), "{fragment} leaked");
        }
    }

    #[test]
    fn test_orders_are_listed_through_active_customer() {
        let registry = FieldRegistry::new();
        let document = QueryBuilder::new(&registry).orders(&OrderQueryOptions::default());

        assert!(document.starts_with("query orders($options: OrderListOptions) {\n"));
        assert!(document.contains("  activeCustomer {\n    id\n    orders(options: $options) {\n"));
        assert!(document.contains("      totalItems\n"));
    }

    #[test]
    fn test_add_item_selects_union_branches() {
        let registry = registry();
        let document =
            QueryBuilder::new(&registry).add_item_to_order(&OrderQueryOptions::default());

        assert!(document.starts_with(
            "mutation addItemToOrder($productVariantId: ID!, $quantity: Int!) {\n"
        ));
        assert!(document.contains(
            "  addItemToOrder(productVariantId: $productVariantId, quantity: $quantity) {\n    ... on Order {\n"
        ));
        assert!(document.contains("    ... on ErrorResult {\n      errorCode\n      message\n    }\n"));
        assert!(document.contains("giftMessage"));
    }

    #[test]
    fn test_cart_mutation_headers() {
        let registry = FieldRegistry::new();
        let builder = QueryBuilder::new(&registry);
        let options = OrderQueryOptions::default();

        let cases = [
            (
                builder.adjust_order_line(&options),
                "mutation adjustOrderLine($orderLineId: ID!, $quantity: Int!) {",
            ),
            (
                builder.remove_order_line(&options),
                "mutation removeOrderLine($orderLineId: ID!) {",
            ),
            (
                builder.set_order_shipping_address(&options),
                "mutation setOrderShippingAddress($input: CreateAddressInput!) {",
            ),
            (
                builder.set_order_billing_address(&options),
                "mutation setOrderBillingAddress($input: CreateAddressInput!) {",
            ),
            (
                builder.set_order_shipping_method(&options),
                "mutation setOrderShippingMethod($shippingMethodId: [ID!]!) {",
            ),
            (
                builder.apply_coupon_code(&options),
                "mutation applyCouponCode($couponCode: String!) {",
            ),
            (
                builder.transition_order_to_state(&options),
                "mutation transitionOrderToState($state: String!) {",
            ),
            (
                builder.add_payment_to_order(&options),
                "mutation addPaymentToOrder($input: PaymentInput!) {",
            ),
        ];

        for (document, header) in cases {
            assert!(document.starts_with(header), "expected {header}");
            assert!(document.contains("... on Order {"));
            assert!(document.contains("... on ErrorResult {"));
        }
    }
}
