//! The GraphQL response envelope.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::graphql::GraphqlError;

/// One entry of a GraphQL `errors` array.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphqlErrorMessage {
    /// Human-readable description.
    pub message: String,
    /// Path to the field that failed, if reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Value>>,
    /// Server-specific details; Vendure reports its error code here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

impl GraphqlErrorMessage {
    /// Returns `extensions.code`, e.g. `FORBIDDEN`.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.extensions.as_ref()?.get("code")?.as_str()
    }
}

/// A decoded GraphQL response: `{ "data": ..., "errors": [...] }`.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use serde_json::json;
/// use vendure_api::clients::graphql::GraphqlResponse;
///
/// #[derive(Deserialize)]
/// #[serde(rename_all = "camelCase")]
/// struct ActiveOrder {
///     active_order: Option<Order>,
/// }
///
/// #[derive(Deserialize)]
/// struct Order {
///     code: String,
/// }
///
/// let response: GraphqlResponse =
///     serde_json::from_value(json!({"data": {"activeOrder": {"code": "ABC123"}}})).unwrap();
///
/// assert!(!response.has_errors());
/// let data: ActiveOrder = response.data_as().unwrap();
/// assert_eq!(data.active_order.unwrap().code, "ABC123");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphqlResponse {
    /// The `data` member; absent when the request failed validation.
    #[serde(default)]
    pub data: Option<Value>,
    /// The `errors` member, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<GraphqlErrorMessage>>,
}

impl GraphqlResponse {
    /// Returns `true` if the response carries at least one GraphQL error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|errors| !errors.is_empty())
    }

    /// Deserializes `data` into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Decode`] if `data` is missing or null, or if
    /// it does not match `T`.
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<T, GraphqlError> {
        match &self.data {
            Some(data) if !data.is_null() => Ok(T::deserialize(data)?),
            _ => Err(GraphqlError::Decode {
                message: "response has no data".to_string(),
            }),
        }
    }

    /// Returns the `data` member at `field`, e.g. `activeOrder`.
    #[must_use]
    pub fn field(&self, field: &str) -> Option<&Value> {
        self.data.as_ref()?.get(field).filter(|value| !value.is_null())
    }
}
