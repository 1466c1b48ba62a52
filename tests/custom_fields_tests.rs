//! Integration tests for the custom-field registry.
//!
//! These tests exercise the registry through the public API only, the way
//! an application registers its fields at startup and reads them back.

use std::sync::Arc;
use std::thread;

use serde_json::json;
use vendure_api::custom_fields::{
    is_valid_fragment, validate_fragment, FieldDeclaration, FragmentError, FRAGMENT_SEPARATOR,
};
use vendure_api::{CustomFields, FieldRegistry};

// ============================================================================
// Registration
// ============================================================================

#[test]
fn test_registering_twice_keeps_one_entry_with_latest_fragment() {
    let registry = FieldRegistry::new();
    registry.add(FieldDeclaration::new("badge", "badge", ["Product"], true));
    registry.add(FieldDeclaration::new(
        "badge",
        "badge { label color }",
        ["Product"],
        true,
    ));

    let declarations = registry.query_for("Product");
    assert_eq!(declarations.len(), 1);
    assert_eq!(declarations[0].fragment, "badge { label color }");
}

#[test]
fn test_insertion_order_is_preserved() {
    let registry = FieldRegistry::new();
    registry.add_all([
        FieldDeclaration::scalar("a", ["Product"]),
        FieldDeclaration::scalar("b", ["Product"]),
        FieldDeclaration::scalar("c", ["Product"]),
    ]);

    let names: Vec<_> = registry
        .query_for("Product")
        .into_iter()
        .map(|declaration| declaration.field_name)
        .collect();
    assert_eq!(names, ["a", "b", "c"]);
    assert_eq!(
        registry.inject_fragment("Product"),
        ["a", "b", "c"].join(FRAGMENT_SEPARATOR)
    );
}

#[test]
fn test_operation_keywords_are_rejected() {
    let registry = FieldRegistry::new();
    registry
        .add(FieldDeclaration::scalar(
            "x mutation { deleteProduct }",
            ["Product"],
        ))
        .add(FieldDeclaration::extended(
            "feed",
            "feed { Subscription }",
            ["Product"],
        ));

    assert!(registry.query_for("Product").is_empty());
    assert!(!registry.has_any("Product"));
}

#[test]
fn test_unbalanced_fragment_is_rejected() {
    let registry = FieldRegistry::new();
    registry.add(FieldDeclaration::new(
        "x",
        "x { a { b }",
        ["Product"],
        true,
    ));

    assert!(registry.query_for("Product").is_empty());
    assert_eq!(
        validate_fragment("x { a { b }"),
        Err(FragmentError::UnbalancedBraces { open: 2, close: 1 })
    );
    assert!(!is_valid_fragment("   "));
    assert!(is_valid_fragment("x { a { b } }"));
}

#[test]
fn test_declarations_are_isolated_by_type() {
    let registry = FieldRegistry::new();
    registry.add(FieldDeclaration::scalar("onlyProduct", ["Product"]));

    assert!(registry.query_for("ProductVariant").is_empty());
    assert_eq!(registry.inject_fragment("ProductVariant"), "");
    assert!(registry.has_any("Product"));
}

#[test]
fn test_extended_and_native_lookups_are_split() {
    let registry = FieldRegistry::new();
    let extended = FieldDeclaration::scalar("loyaltyPoints", ["Customer"]);
    let native = FieldDeclaration::custom_fields_block(["newsletter"], ["Customer"]);
    registry.add(extended.clone()).add(native.clone());

    assert_eq!(registry.query_extended_for("Customer"), vec![extended]);
    assert_eq!(registry.query_native_custom_fields_for("Customer"), Some(native));
}

#[test]
fn test_remove_and_clear() {
    let registry = FieldRegistry::new();
    registry
        .add(FieldDeclaration::scalar("a", ["Product", "Collection"]))
        .add(FieldDeclaration::scalar("b", ["Product"]));

    registry.remove("a", ["Product"]);
    assert_eq!(registry.len(), 2);

    registry.remove("a", ["Collection", "Product"]);
    assert_eq!(registry.len(), 1);

    registry.clear();
    assert!(registry.is_empty());
}

#[test]
fn test_summary_makes_misspelled_types_visible() {
    let registry = FieldRegistry::new();
    registry.add(FieldDeclaration::scalar("giftWrap", ["Prodcut"]));

    let summary = registry.summary();
    assert!(summary.contains("Prodcut:"));
    assert!(summary.contains("giftWrap"));
    assert!(!registry.has_any("Product"));
}

#[test]
fn test_shared_registry_across_threads() {
    let registry = Arc::new(FieldRegistry::new());

    let writers: Vec<_> = (0..8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                registry.add(FieldDeclaration::scalar(&format!("field{i}"), ["Order"]));
                registry.inject_fragment("Order")
            })
        })
        .collect();

    for writer in writers {
        let fragment = writer.join().unwrap();
        assert!(is_valid_fragment(&fragment));
    }
    assert_eq!(registry.query_for("Order").len(), 8);
}

// ============================================================================
// Decoded values
// ============================================================================

#[test]
fn test_custom_fields_from_decoded_entity() {
    let product = json!({
        "id": "1",
        "customFields": {
            "warrantyYears": 2,
            "eco": true,
            "tagline": "Built to last",
            "dimensions": {"width": 12.5},
            "legacyCode": null
        }
    });

    let fields = CustomFields::from_entity(&product).unwrap();
    assert_eq!(fields.get_i64("warrantyYears"), Some(2));
    assert_eq!(fields.get_bool("eco"), Some(true));
    assert_eq!(fields.get_str("tagline"), Some("Built to last"));
    assert!(fields.get_object("dimensions").is_some());
    assert!(fields.get("legacyCode").is_none());
    assert!(CustomFields::from_entity(&json!({"id": "2"})).is_none());
}
