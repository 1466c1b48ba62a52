//! Custom-field declarations and factory helpers.

use std::borrow::Cow;
use std::collections::BTreeSet;

/// Field name used by native Vendure custom-field blocks.
pub const CUSTOM_FIELDS: &str = "customFields";

/// A single registered custom-field extension.
///
/// A declaration carries a verbatim GraphQL selection (`fragment`) and the
/// set of GraphQL types it applies to. Extended declarations describe fields
/// added through schema extensions and are selected like any other field.
/// Native declarations describe entries of Vendure's built-in
/// `customFields { ... }` object.
///
/// # Example
///
/// ```rust
/// use vendure_api::custom_fields::FieldDeclaration;
///
/// let decl = FieldDeclaration::new(
///     "mainUsdzAsset",
///     "mainUsdzAsset { id name source }",
///     ["Product"],
///     true,
/// );
/// assert!(decl.applies_to("Product"));
/// assert!(!decl.applies_to("ProductVariant"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDeclaration {
    /// The GraphQL field this declaration governs, or `customFields`.
    pub field_name: String,
    /// Selection text spliced verbatim into generated documents.
    pub fragment: String,
    /// GraphQL type names this declaration is injected into.
    pub applicable_types: BTreeSet<String>,
    /// `true` for schema-extension fields, `false` for native custom fields.
    pub is_extended: bool,
}

impl FieldDeclaration {
    /// Creates a declaration from its raw parts.
    #[must_use]
    pub fn new<I, S>(
        field_name: impl Into<String>,
        fragment: impl Into<String>,
        applicable_types: I,
        is_extended: bool,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            field_name: field_name.into(),
            fragment: fragment.into(),
            applicable_types: applicable_types.into_iter().map(Into::into).collect(),
            is_extended,
        }
    }

    /// Creates an extended (schema-extension) declaration.
    #[must_use]
    pub fn extended<I, S>(
        field_name: impl Into<String>,
        fragment: impl Into<String>,
        applicable_types: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(field_name, fragment, applicable_types, true)
    }

    /// Creates a native `customFields` declaration.
    ///
    /// The fragment should be the whole `customFields { ... }` selection.
    #[must_use]
    pub fn native<I, S>(fragment: impl Into<String>, applicable_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(CUSTOM_FIELDS, fragment, applicable_types, false)
    }

    /// An asset relation: `name { id name source preview }`.
    #[must_use]
    pub fn asset<I, S>(name: &str, applicable_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::extended(
            name,
            format!("{name} {{ id name source preview }}"),
            applicable_types,
        )
    }

    /// An asset relation with its file metadata and focal point.
    #[must_use]
    pub fn asset_with_metadata<I, S>(name: &str, applicable_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::extended(
            name,
            format!(
                "{name} {{ id name source preview mimeType width height fileSize focalPoint {{ x y }} }}"
            ),
            applicable_types,
        )
    }

    /// A relation (single or list) selected by id only: `name { id }`.
    #[must_use]
    pub fn relation_ids<I, S>(name: &str, applicable_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::extended(name, format!("{name} {{ id }}"), applicable_types)
    }

    /// A scalar field: `name`.
    #[must_use]
    pub fn scalar<I, S>(name: &str, applicable_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::extended(name, name, applicable_types)
    }

    /// A native block selecting several custom fields at once:
    /// `customFields { a b c }`.
    ///
    /// With no field names the bare `customFields` field is selected.
    #[must_use]
    pub fn custom_fields_block<F, T, I, S>(fields: F, applicable_types: I) -> Self
    where
        F: IntoIterator<Item = T>,
        T: AsRef<str>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields
            .into_iter()
            .map(|field| field.as_ref().trim().to_string())
            .filter(|field| !field.is_empty())
            .collect();

        let fragment = if fields.is_empty() {
            CUSTOM_FIELDS.to_string()
        } else {
            format!("{CUSTOM_FIELDS} {{ {} }}", fields.join(" "))
        };

        Self::native(fragment, applicable_types)
    }

    /// A relation with an arbitrary nested selection: `name { selection }`.
    ///
    /// ```rust
    /// use vendure_api::custom_fields::FieldDeclaration;
    ///
    /// let decl = FieldDeclaration::nested_relation(
    ///     "reviews",
    ///     "items { id rating author { name } }",
    ///     ["Product"],
    /// );
    /// assert_eq!(decl.fragment, "reviews { items { id rating author { name } } }");
    /// ```
    #[must_use]
    pub fn nested_relation<I, S>(name: &str, selection: &str, applicable_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::extended(
            name,
            format!("{name} {{ {} }}", selection.trim()),
            applicable_types,
        )
    }

    /// Returns `true` if this declaration applies to `type_name`.
    #[must_use]
    pub fn applies_to(&self, type_name: &str) -> bool {
        self.applicable_types.contains(type_name)
    }

    /// Returns `true` if this is the native `customFields` block.
    #[must_use]
    pub fn is_native_custom_fields(&self) -> bool {
        !self.is_extended && self.field_name == CUSTOM_FIELDS
    }

    /// Returns `true` if `other` occupies the same registry slot.
    ///
    /// Two declarations share a slot when they agree on `is_extended`,
    /// `field_name` and the applicable type set.
    #[must_use]
    pub fn same_slot(&self, other: &Self) -> bool {
        self.is_extended == other.is_extended
            && self.field_name == other.field_name
            && self.applicable_types == other.applicable_types
    }

    /// Returns the text spliced into a selection set.
    ///
    /// Native entries declared under their own field name are wrapped in
    /// `customFields { ... }`; everything else is returned verbatim.
    #[must_use]
    pub fn selection_text(&self) -> Cow<'_, str> {
        let fragment = self.fragment.trim();
        if self.is_extended || opens_custom_fields(fragment) {
            Cow::Borrowed(fragment)
        } else {
            Cow::Owned(format!("{CUSTOM_FIELDS} {{ {fragment} }}"))
        }
    }
}

/// Returns `true` if `fragment` starts with the `customFields` field itself.
fn opens_custom_fields(fragment: &str) -> bool {
    match fragment.strip_prefix(CUSTOM_FIELDS) {
        Some(rest) => rest
            .chars()
            .next()
            .map_or(true, |next| next == '{' || next.is_whitespace()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_collects_types_as_set() {
        let decl = FieldDeclaration::new(
            "badge",
            "badge",
            ["Product", "ProductVariant", "Product"],
            true,
        );
        assert_eq!(decl.applicable_types.len(), 2);
        assert!(decl.applies_to("Product"));
        assert!(decl.applies_to("ProductVariant"));
    }

    #[test]
    fn test_asset_factories() {
        let decl = FieldDeclaration::asset("mainUsdzAsset", ["Product"]);
        assert_eq!(decl.field_name, "mainUsdzAsset");
        assert_eq!(decl.fragment, "mainUsdzAsset { id name source preview }");
        assert!(decl.is_extended);

        let decl = FieldDeclaration::asset_with_metadata("hero", ["Collection"]);
        assert!(decl.fragment.starts_with("hero { id name source preview mimeType"));
        assert!(decl.fragment.contains("focalPoint { x y }"));
        assert!(crate::custom_fields::is_valid_fragment(&decl.fragment));
    }

    #[test]
    fn test_relation_and_scalar_factories() {
        let decl = FieldDeclaration::relation_ids("relatedProducts", ["Product"]);
        assert_eq!(decl.fragment, "relatedProducts { id }");

        let decl = FieldDeclaration::scalar("loyaltyPoints", ["Customer"]);
        assert_eq!(decl.fragment, "loyaltyPoints");
        assert!(decl.is_extended);
    }

    #[test]
    fn test_custom_fields_block_factory() {
        let decl = FieldDeclaration::custom_fields_block(["color", " size "], ["Product"]);
        assert_eq!(decl.field_name, CUSTOM_FIELDS);
        assert_eq!(decl.fragment, "customFields { color size }");
        assert!(decl.is_native_custom_fields());

        let empty: [&str; 0] = [];
        let decl = FieldDeclaration::custom_fields_block(empty, ["Product"]);
        assert_eq!(decl.fragment, "customFields");
    }

    #[test]
    fn test_same_slot_ignores_fragment() {
        let a = FieldDeclaration::extended("badge", "badge", ["Product"]);
        let b = FieldDeclaration::extended("badge", "badge { label }", ["Product"]);
        let c = FieldDeclaration::extended("badge", "badge", ["Product", "ProductVariant"]);
        let d = FieldDeclaration::new("badge", "badge", ["Product"], false);

        assert!(a.same_slot(&b));
        assert!(!a.same_slot(&c));
        assert!(!a.same_slot(&d));
    }

    #[test]
    fn test_selection_text_wraps_named_native_entries() {
        let named = FieldDeclaration::new("color", "color", ["Product"], false);
        assert_eq!(named.selection_text(), "customFields { color }");

        let block = FieldDeclaration::native("customFields { color }", ["Product"]);
        assert_eq!(block.selection_text(), "customFields { color }");

        let extended = FieldDeclaration::scalar("badge", ["Product"]);
        assert_eq!(extended.selection_text(), "badge");
    }

    #[test]
    fn test_selection_text_wraps_fields_sharing_the_prefix() {
        let version = FieldDeclaration::new(
            "customFieldsVersion",
            "customFieldsVersion",
            ["Product"],
            false,
        );
        assert_eq!(
            version.selection_text(),
            "customFields { customFieldsVersion }"
        );

        let compact = FieldDeclaration::native("customFields{ color }", ["Product"]);
        assert_eq!(compact.selection_text(), "customFields{ color }");

        let bare = FieldDeclaration::native("customFields", ["Product"]);
        assert_eq!(bare.selection_text(), "customFields");
    }
}
