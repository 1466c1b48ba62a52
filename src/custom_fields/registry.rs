//! Thread-safe registry of custom-field declarations.
//!
//! This module provides the [`FieldRegistry`] type that integrators populate
//! at startup and the [`QueryBuilder`](crate::query::QueryBuilder) reads at
//! each splice point.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;

use parking_lot::Mutex;

use super::declaration::{FieldDeclaration, CUSTOM_FIELDS};
use super::validation::validate_fragment;

/// Separator placed between fragments joined by [`FieldRegistry::inject_fragment`].
pub const FRAGMENT_SEPARATOR: &str = "\n    ";

/// Registry of custom-field declarations.
///
/// The registry owns an ordered list of [`FieldDeclaration`]s. At most one
/// declaration exists per `(is_extended, field_name, applicable_types)`
/// slot; registering into an occupied slot replaces the previous entry in
/// place, so output order follows first registration.
///
/// # Thread Safety
///
/// `FieldRegistry` is `Send + Sync`. All state sits behind a single mutex
/// and every method takes it exactly once, so readers never observe a
/// partially applied mutation. Methods take `&self`; share the registry
/// with `Arc` when several components need it.
///
/// # Invalid Fragments
///
/// [`add`](Self::add) never fails. A declaration whose fragment fails
/// [`validate_fragment`] is dropped and a warning is logged through
/// `tracing`.
///
/// # Example
///
/// ```rust
/// use vendure_api::custom_fields::{FieldDeclaration, FieldRegistry};
///
/// let registry = FieldRegistry::new();
/// registry
///     .add(FieldDeclaration::asset("mainUsdzAsset", ["Product"]))
///     .add(FieldDeclaration::scalar("loyaltyPoints", ["Customer"]));
///
/// assert!(registry.has_any("Product"));
/// assert_eq!(
///     registry.inject_fragment("Product"),
///     "mainUsdzAsset { id name source preview }"
/// );
/// assert_eq!(registry.inject_fragment("Facet"), "");
/// ```
#[derive(Debug, Default)]
pub struct FieldRegistry {
    state: Mutex<RegistryState>,
}

#[derive(Debug, Default)]
struct RegistryState {
    declarations: Vec<FieldDeclaration>,
    cache_backend_enabled: bool,
}

// Verify FieldRegistry is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FieldRegistry>();
};

impl FieldRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a declaration.
    ///
    /// Replaces the declaration occupying the same slot, keeping its
    /// position, or appends otherwise. Declarations with an invalid fragment
    /// are dropped with a warning. Returns `&Self` to allow chaining.
    pub fn add(&self, declaration: FieldDeclaration) -> &Self {
        if let Err(reason) = validate_fragment(&declaration.fragment) {
            tracing::warn!(
                field = %declaration.field_name,
                types = ?declaration.applicable_types,
                "Ignoring custom field declaration: {}",
                reason
            );
            return self;
        }

        let mut state = self.state.lock();
        if let Some(existing) = state
            .declarations
            .iter_mut()
            .find(|existing| existing.same_slot(&declaration))
        {
            tracing::debug!(
                field = %declaration.field_name,
                "Replacing existing custom field declaration"
            );
            *existing = declaration;
        } else {
            state.declarations.push(declaration);
        }
        self
    }

    /// Registers each declaration in order, as if by [`add`](Self::add).
    pub fn add_all<I>(&self, declarations: I) -> &Self
    where
        I: IntoIterator<Item = FieldDeclaration>,
    {
        for declaration in declarations {
            self.add(declaration);
        }
        self
    }

    /// Removes the declaration whose field name and type set match exactly.
    ///
    /// Both extended and native declarations in that slot are removed.
    pub fn remove<I, S>(&self, field_name: &str, applicable_types: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let types: BTreeSet<String> =
            applicable_types.into_iter().map(Into::into).collect();

        self.state.lock().declarations.retain(|declaration| {
            !(declaration.field_name == field_name && declaration.applicable_types == types)
        });
    }

    /// Removes every declaration. The cache backend flag is left unchanged.
    pub fn clear(&self) {
        self.state.lock().declarations.clear();
    }

    /// Returns every declaration applicable to `type_name`, in registry order.
    #[must_use]
    pub fn query_for(&self, type_name: &str) -> Vec<FieldDeclaration> {
        self.state
            .lock()
            .declarations
            .iter()
            .filter(|declaration| declaration.applies_to(type_name))
            .cloned()
            .collect()
    }

    /// Returns the extended declarations applicable to `type_name`.
    #[must_use]
    pub fn query_extended_for(&self, type_name: &str) -> Vec<FieldDeclaration> {
        self.state
            .lock()
            .declarations
            .iter()
            .filter(|declaration| declaration.is_extended && declaration.applies_to(type_name))
            .cloned()
            .collect()
    }

    /// Returns the native `customFields` declaration applicable to `type_name`.
    ///
    /// If several native blocks cover the type under different type sets,
    /// the earliest registered one is returned. [`query_for`](Self::query_for)
    /// still returns all of them.
    #[must_use]
    pub fn query_native_custom_fields_for(&self, type_name: &str) -> Option<FieldDeclaration> {
        self.state
            .lock()
            .declarations
            .iter()
            .find(|declaration| {
                declaration.is_native_custom_fields() && declaration.applies_to(type_name)
            })
            .cloned()
    }

    /// Returns `true` if any declaration applies to `type_name`.
    #[must_use]
    pub fn has_any(&self, type_name: &str) -> bool {
        self.state
            .lock()
            .declarations
            .iter()
            .any(|declaration| declaration.applies_to(type_name))
    }

    /// Decides whether a builder should splice fragments for `type_name`.
    ///
    /// An explicit request wins; otherwise fragments are included when any
    /// declaration applies to the type.
    #[must_use]
    pub fn should_include(&self, type_name: &str, explicit: Option<bool>) -> bool {
        explicit.unwrap_or_else(|| self.has_any(type_name))
    }

    /// Joins the selection text of every declaration applicable to
    /// `type_name`, separated by [`FRAGMENT_SEPARATOR`].
    ///
    /// Returns an empty string when nothing applies.
    #[must_use]
    pub fn inject_fragment(&self, type_name: &str) -> String {
        let state = self.state.lock();
        let fragments: Vec<_> = state
            .declarations
            .iter()
            .filter(|declaration| declaration.applies_to(type_name))
            .map(FieldDeclaration::selection_text)
            .collect();
        fragments.join(FRAGMENT_SEPARATOR)
    }

    /// Returns a snapshot of all declarations in registry order.
    #[must_use]
    pub fn declarations(&self) -> Vec<FieldDeclaration> {
        self.state.lock().declarations.clone()
    }

    /// Returns the number of registered declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.lock().declarations.len()
    }

    /// Returns `true` if no declarations are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.lock().declarations.is_empty()
    }

    /// Enables or disables the cache backend identifier in search queries.
    ///
    /// When enabled, search documents also select
    /// `cacheIdentifier { collectionSlug }` so an edge cache can key
    /// responses by collection.
    pub fn set_cache_backend_enabled(&self, enabled: bool) {
        self.state.lock().cache_backend_enabled = enabled;
    }

    /// Returns whether the cache backend identifier is enabled.
    #[must_use]
    pub fn cache_backend_enabled(&self) -> bool {
        self.state.lock().cache_backend_enabled
    }

    /// Renders a human-readable listing of the registry, grouped by type.
    ///
    /// Useful for spotting misspelled type names, which are otherwise
    /// silently never injected.
    ///
    /// ```rust
    /// use vendure_api::custom_fields::{FieldDeclaration, FieldRegistry};
    ///
    /// let registry = FieldRegistry::new();
    /// registry.add(FieldDeclaration::scalar("badge", ["Prodcut"]));
    ///
    /// let summary = registry.summary();
    /// assert!(summary.contains("Prodcut:"));
    /// ```
    #[must_use]
    pub fn summary(&self) -> String {
        let state = self.state.lock();

        let mut by_type: BTreeMap<&str, Vec<&FieldDeclaration>> = BTreeMap::new();
        for declaration in &state.declarations {
            for type_name in &declaration.applicable_types {
                by_type.entry(type_name.as_str()).or_default().push(declaration);
            }
        }

        let mut out = format!(
            "FieldRegistry: {} declaration(s), cache backend {}\n",
            state.declarations.len(),
            if state.cache_backend_enabled {
                "enabled"
            } else {
                "disabled"
            }
        );
        for (type_name, declarations) in by_type {
            let _ = writeln!(out, "{type_name}:");
            for declaration in declarations {
                let kind = if declaration.is_extended {
                    "extended"
                } else if declaration.field_name == CUSTOM_FIELDS {
                    "native"
                } else {
                    "native field"
                };
                let _ = writeln!(
                    out,
                    "  [{kind}] {} -> {}",
                    declaration.field_name,
                    declaration.fragment.trim()
                );
            }
        }
        out
    }
}
