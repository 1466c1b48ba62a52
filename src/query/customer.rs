//! Customer documents.
//!
//! Customer documents do not use the generic splice. They always select
//! `customFields`, using the registered native `Customer` block when there
//! is one, and then add every extended `Customer` fragment as its own
//! sibling field. Extended fields therefore stay opt-in by registration
//! while native custom fields are always requested.

use crate::custom_fields::CUSTOM_FIELDS;

use super::builder::QueryBuilder;
use super::document::Document;
use super::options::CustomerQueryOptions;
use super::selection::SelectionSet;

const CUSTOMER: &str = "Customer";

const ADDRESS_FIELDS: &[&str] = &[
    "id",
    "fullName",
    "company",
    "streetLine1",
    "streetLine2",
    "city",
    "province",
    "postalCode",
];

impl QueryBuilder<'_> {
    /// Builds `query activeCustomer`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vendure_api::custom_fields::FieldRegistry;
    /// use vendure_api::query::{CustomerQueryOptions, QueryBuilder};
    ///
    /// let registry = FieldRegistry::new();
    /// let document = QueryBuilder::new(&registry).active_customer(&CustomerQueryOptions::default());
    ///
    /// // Selected even with an empty registry
    /// assert!(document.contains("customFields"));
    /// ```
    #[must_use]
    pub fn active_customer(&self, options: &CustomerQueryOptions) -> String {
        let mut root = SelectionSet::new();
        root.object("activeCustomer", |customer| {
            self.customer_selection(customer, options);
        });
        Document::query("activeCustomer").selection(root).to_string()
    }

    /// Builds `query customer($id: ID!)`.
    #[must_use]
    pub fn customer(&self, options: &CustomerQueryOptions) -> String {
        let mut root = SelectionSet::new();
        root.object_with_args("customer", "id: $id", |customer| {
            self.customer_selection(customer, options);
        });
        Document::query("customer")
            .variable("id", "ID!")
            .selection(root)
            .to_string()
    }

    /// Builds `query customers($options: CustomerListOptions)`.
    #[must_use]
    pub fn customers(&self, options: &CustomerQueryOptions) -> String {
        let mut root = SelectionSet::new();
        root.object_with_args("customers", "options: $options", |customers| {
            customers.object("items", |items| self.customer_selection(items, options));
            customers.field("totalItems");
        });
        Document::query("customers")
            .variable("options", "CustomerListOptions")
            .selection(root)
            .to_string()
    }

    /// Builds `mutation updateCustomer($input: UpdateCustomerInput!)`.
    #[must_use]
    pub fn update_customer(&self, options: &CustomerQueryOptions) -> String {
        let mut root = SelectionSet::new();
        root.object_with_args("updateCustomer", "input: $input", |customer| {
            self.customer_selection(customer, options);
        });
        Document::mutation("updateCustomer")
            .variable("input", "UpdateCustomerInput!")
            .selection(root)
            .to_string()
    }

    fn customer_selection(&self, set: &mut SelectionSet, options: &CustomerQueryOptions) {
        set.fields(options.fields.iter().cloned());
        if options.include_addresses {
            set.object("addresses", |addresses| {
                addresses
                    .fields(ADDRESS_FIELDS.iter().copied())
                    .object("country", |country| {
                        country.fields(["code", "name"]);
                    })
                    .fields(["phoneNumber", "defaultShippingAddress", "defaultBillingAddress"]);
            });
        }

        let registry = self.registry();
        match registry.query_native_custom_fields_for(CUSTOMER) {
            Some(native) => set.raw(native.selection_text().into_owned()),
            None => set.field(CUSTOM_FIELDS),
        };
        for extended in registry.query_extended_for(CUSTOMER) {
            set.raw(extended.fragment);
        }
    }
}
