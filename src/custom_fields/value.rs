//! Typed access to decoded custom-field payloads.
//!
//! Vendure returns custom fields as an open JSON object whose shape depends
//! on the server configuration. [`CustomFields`] wraps that object and
//! offers explicit conversions instead of ad hoc indexing.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// The `customFields` object of a decoded entity.
///
/// # Example
///
/// ```rust
/// use vendure_api::custom_fields::CustomFields;
/// use serde_json::json;
///
/// let product = json!({
///     "id": "1",
///     "customFields": { "color": "red", "stock": 4, "featured": true }
/// });
///
/// let fields = CustomFields::from_entity(&product).unwrap();
/// assert_eq!(fields.get_str("color"), Some("red"));
/// assert_eq!(fields.get_i64("stock"), Some(4));
/// assert_eq!(fields.get_bool("featured"), Some(true));
/// assert!(fields.get("missing").is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CustomFields(Map<String, Value>);

impl CustomFields {
    /// Wraps a JSON value if it is an object.
    ///
    /// Returns `None` for any other JSON type, including `null`.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Extracts the `customFields` member of a decoded entity.
    #[must_use]
    pub fn from_entity(entity: &Value) -> Option<Self> {
        entity
            .get(super::CUSTOM_FIELDS)
            .cloned()
            .and_then(Self::from_value)
    }

    /// Returns the raw value of a field, treating `null` as absent.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name).filter(|value| !value.is_null())
    }

    /// Returns a string field.
    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Returns an integer field.
    #[must_use]
    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_i64)
    }

    /// Returns a floating point field. Integers are widened.
    #[must_use]
    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_f64)
    }

    /// Returns a boolean field.
    #[must_use]
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }

    /// Returns a list field.
    #[must_use]
    pub fn get_list(&self, name: &str) -> Option<&[Value]> {
        self.get(name).and_then(Value::as_array).map(Vec::as_slice)
    }

    /// Returns a relation or struct field as an object.
    #[must_use]
    pub fn get_object(&self, name: &str) -> Option<&Map<String, Value>> {
        self.get(name).and_then(Value::as_object)
    }

    /// Deserializes a field into `T`.
    ///
    /// Returns `None` if the field is absent and `Some(Err(_))` if it does
    /// not match `T`.
    pub fn deserialize<T: DeserializeOwned>(
        &self,
        name: &str,
    ) -> Option<Result<T, serde_json::Error>> {
        self.get(name).cloned().map(serde_json::from_value)
    }

    /// Returns the number of fields present, including `null` ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the object has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the underlying JSON object.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Asset {
        id: String,
        source: String,
    }

    fn fields() -> CustomFields {
        CustomFields::from_value(json!({
            "color": "red",
            "weight": 1.5,
            "stock": 3,
            "tags": ["a", "b"],
            "mainUsdzAsset": { "id": "7", "source": "/assets/chair.usdz" },
            "discontinued": null
        }))
        .unwrap()
    }

    #[test]
    fn test_from_value_requires_object() {
        assert!(CustomFields::from_value(json!(null)).is_none());
        assert!(CustomFields::from_value(json!("text")).is_none());
        assert!(CustomFields::from_value(json!({})).unwrap().is_empty());
    }

    #[test]
    fn test_from_entity_without_custom_fields() {
        assert!(CustomFields::from_entity(&json!({ "id": "1" })).is_none());
        assert!(CustomFields::from_entity(&json!({ "customFields": null })).is_none());
    }

    #[test]
    fn test_typed_getters() {
        let fields = fields();
        assert_eq!(fields.get_str("color"), Some("red"));
        assert_eq!(fields.get_f64("weight"), Some(1.5));
        assert_eq!(fields.get_f64("stock"), Some(3.0));
        assert_eq!(fields.get_i64("stock"), Some(3));
        assert_eq!(fields.get_list("tags").map(<[Value]>::len), Some(2));
        assert!(fields.get_object("mainUsdzAsset").is_some());

        // Wrong type
        assert_eq!(fields.get_i64("color"), None);
    }

    #[test]
    fn test_null_is_treated_as_absent() {
        let fields = fields();
        assert!(fields.get("discontinued").is_none());
        assert_eq!(fields.len(), 6);
    }

    #[test]
    fn test_deserialize_relation() {
        let fields = fields();
        let asset: Asset = fields.deserialize("mainUsdzAsset").unwrap().unwrap();
        assert_eq!(
            asset,
            Asset {
                id: "7".to_string(),
                source: "/assets/chair.usdz".to_string()
            }
        );

        assert!(fields.deserialize::<Asset>("color").unwrap().is_err());
        assert!(fields.deserialize::<Asset>("missing").is_none());
    }
}
