//! Catalog documents: products, collections, facets and search.

use super::builder::QueryBuilder;
use super::document::Document;
use super::options::{
    CollectionQueryOptions, FacetQueryOptions, Lookup, ProductQueryOptions, SearchQueryOptions,
};
use super::selection::SelectionSet;

const VARIANT_FIELDS: &[&str] = &[
    "id",
    "name",
    "sku",
    "price",
    "priceWithTax",
    "currencyCode",
    "stockLevel",
];

const SEARCH_ITEM_FIELDS: &[&str] = &[
    "productId",
    "productName",
    "slug",
    "description",
    "sku",
    "productVariantId",
    "productVariantName",
    "currencyCode",
    "score",
];

fn asset(set: &mut SelectionSet) {
    set.fields(["id", "preview", "source"]);
}

fn asset_preview(set: &mut SelectionSet) {
    set.fields(["id", "preview"]);
}

fn summary(set: &mut SelectionSet) {
    set.fields(["id", "name", "slug"]);
}

fn price(set: &mut SelectionSet) {
    set.on("PriceRange", |range| {
        range.fields(["min", "max"]);
    })
    .on("SinglePrice", |single| {
        single.field("value");
    });
}

impl QueryBuilder<'_> {
    /// Builds `query products($options: ProductListOptions)`.
    ///
    /// Injects `Product` fragments on every item and `ProductVariant`
    /// fragments inside `variants`.
    #[must_use]
    pub fn products(&self, options: &ProductQueryOptions) -> String {
        let mut root = SelectionSet::new();
        root.object_with_args("products", "options: $options", |products| {
            products.object("items", |items| self.product_selection(items, options));
            products.field("totalItems");
        });

        Document::query("products")
            .variable("options", "ProductListOptions")
            .selection(root)
            .to_string()
    }

    /// Builds `query product($id: ID!)` or `query product($slug: String!)`.
    ///
    /// Registered `Product` fragments are spliced after the base fields,
    /// just before the closing brace of `product`.
    #[must_use]
    pub fn product(&self, lookup: Lookup, options: &ProductQueryOptions) -> String {
        let mut root = SelectionSet::new();
        root.object_with_args("product", lookup.argument(), |product| {
            self.product_selection(product, options);
        });

        Document::query("product")
            .variable(lookup.variable_name(), lookup.variable_type())
            .selection(root)
            .to_string()
    }

    /// Builds `query collections($options: CollectionListOptions)`.
    ///
    /// With `include_product_variants` the header also declares
    /// `$variantOptions: ProductVariantListOptions`.
    #[must_use]
    pub fn collections(&self, options: &CollectionQueryOptions) -> String {
        let mut root = SelectionSet::new();
        root.object_with_args("collections", "options: $options", |collections| {
            collections.object("items", |items| self.collection_selection(items, options));
            collections.field("totalItems");
        });

        let mut document = Document::query("collections").variable("options", "CollectionListOptions");
        if options.include_product_variants {
            document = document.variable("variantOptions", "ProductVariantListOptions");
        }
        document.selection(root).to_string()
    }

    /// Builds `query collection($id: ID!)` or `query collection($slug: String!)`.
    #[must_use]
    pub fn collection(&self, lookup: Lookup, options: &CollectionQueryOptions) -> String {
        let mut root = SelectionSet::new();
        root.object_with_args("collection", lookup.argument(), |collection| {
            self.collection_selection(collection, options);
        });

        let mut document =
            Document::query("collection").variable(lookup.variable_name(), lookup.variable_type());
        if options.include_product_variants {
            document = document.variable("variantOptions", "ProductVariantListOptions");
        }
        document.selection(root).to_string()
    }

    /// Builds `query facets($options: FacetListOptions)`.
    #[must_use]
    pub fn facets(&self, options: &FacetQueryOptions) -> String {
        let mut root = SelectionSet::new();
        root.object_with_args("facets", "options: $options", |facets| {
            facets.object("items", |items| self.facet_selection(items, options));
            facets.field("totalItems");
        });

        Document::query("facets")
            .variable("options", "FacetListOptions")
            .selection(root)
            .to_string()
    }

    /// Builds `query facet($id: ID!)`.
    #[must_use]
    pub fn facet(&self, options: &FacetQueryOptions) -> String {
        let mut root = SelectionSet::new();
        root.object_with_args("facet", "id: $id", |facet| {
            self.facet_selection(facet, options);
        });

        Document::query("facet")
            .variable("id", "ID!")
            .selection(root)
            .to_string()
    }

    /// Builds `query search($input: SearchInput!)`.
    ///
    /// Search results never receive registry fragments. When the registry's
    /// cache backend flag is set, `cacheIdentifier { collectionSlug }` is
    /// selected so the edge cache can key responses by collection.
    #[must_use]
    pub fn search(&self, options: SearchQueryOptions) -> String {
        let cache_identifier = self.registry().cache_backend_enabled();

        let mut root = SelectionSet::new();
        root.object_with_args("search", "input: $input", |search| {
            search.field("totalItems");
            search.object("items", |items| {
                items
                    .fields(SEARCH_ITEM_FIELDS.iter().copied())
                    .object("productAsset", asset_preview)
                    .object("price", price)
                    .object("priceWithTax", price)
                    .fields(["facetValueIds", "collectionIds"]);
            });
            if options.include_facet_values {
                search.object("facetValues", |facet_values| {
                    facet_values.field("count").object("facetValue", |value| {
                        value.fields(["id", "name"]).object("facet", |facet| {
                            facet.fields(["id", "name"]);
                        });
                    });
                });
            }
            if options.include_collections {
                search.object("collections", |collections| {
                    collections.field("count").object("collection", summary);
                });
            }
            if cache_identifier {
                search.object("cacheIdentifier", |identifier| {
                    identifier.field("collectionSlug");
                });
            }
        });

        Document::query("search")
            .variable("input", "SearchInput!")
            .selection(root)
            .to_string()
    }

    fn product_selection(&self, set: &mut SelectionSet, options: &ProductQueryOptions) {
        set.fields(options.fields.iter().cloned())
            .object("featuredAsset", asset)
            .object("assets", asset);
        if options.include_variants {
            set.object("variants", |variants| {
                variants
                    .fields(VARIANT_FIELDS.iter().copied())
                    .object("featuredAsset", asset_preview);
                self.splice(variants, "ProductVariant", options.include_custom_fields);
            });
        }
        self.splice(set, "Product", options.include_custom_fields);
    }

    fn collection_selection(&self, set: &mut SelectionSet, options: &CollectionQueryOptions) {
        set.fields(options.fields.iter().cloned())
            .object("featuredAsset", asset)
            .object("breadcrumbs", summary)
            .object("parent", summary)
            .object("children", summary);
        if options.include_product_variants {
            set.object_with_args("productVariants", "options: $variantOptions", |variants| {
                variants.object("items", |items| {
                    items
                        .fields(VARIANT_FIELDS.iter().copied())
                        .object("featuredAsset", asset_preview)
                        .object("product", summary);
                    self.splice(items, "ProductVariant", options.include_custom_fields);
                });
                variants.field("totalItems");
            });
        }
        self.splice(set, "Collection", options.include_custom_fields);
    }

    fn facet_selection(&self, set: &mut SelectionSet, options: &FacetQueryOptions) {
        set.fields(options.fields.iter().cloned());
        if options.include_values {
            set.object("values", |values| {
                values.fields(["id", "name", "code"]);
            });
        }
        self.splice(set, "Facet", options.include_custom_fields);
    }
}
