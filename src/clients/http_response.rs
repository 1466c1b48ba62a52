//! HTTP response types for the Vendure API SDK.

use std::collections::HashMap;

/// An HTTP response from the Vendure API.
///
/// Header names are stored lowercased; a header may carry several values.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of `name`, matched case-insensitively.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use serde_json::json;
    /// use vendure_api::clients::HttpResponse;
    ///
    /// let mut headers = HashMap::new();
    /// headers.insert("vendure-auth-token".to_string(), vec!["abc".to_string()]);
    ///
    /// let response = HttpResponse::new(200, headers, json!({}));
    /// assert_eq!(response.header("Vendure-Auth-Token"), Some("abc"));
    /// ```
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }
}
