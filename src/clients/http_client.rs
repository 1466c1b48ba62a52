//! HTTP client for Vendure API communication.
//!
//! This module provides the [`HttpClient`] type for making requests to a
//! Vendure Shop or Admin API endpoint, carrying the channel token, language
//! and bearer session token.

use std::collections::HashMap;
use std::fmt;

use parking_lot::Mutex;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::clients::errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::VendureConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the channel token.
pub const CHANNEL_TOKEN_HEADER: &str = "vendure-token";

/// Query parameter carrying the language code.
pub const LANGUAGE_CODE_PARAM: &str = "languageCode";

/// HTTP client for making requests to the Vendure API.
///
/// The client handles:
/// - Default headers including User-Agent, Accept and the channel token
/// - The `languageCode` query parameter
/// - Capturing the session token from the auth token response header and
///   sending it back as `Authorization: Bearer <token>`
///
/// Every request is attempted exactly once.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
/// The session token sits behind a mutex, so concurrent requests observe
/// the most recently captured token.
///
/// # Example
///
/// ```rust
/// use vendure_api::{ApiUrl, ChannelToken, VendureConfig};
/// use vendure_api::clients::HttpClient;
///
/// let config = VendureConfig::builder()
///     .api_url(ApiUrl::new("https://demo.vendure.io/shop-api").unwrap())
///     .channel_token(ChannelToken::new("uk-channel").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config);
/// assert_eq!(client.api_url(), "https://demo.vendure.io/shop-api");
/// assert_eq!(
///     client.default_headers().get("vendure-token"),
///     Some(&"uk-channel".to_string())
/// );
/// ```
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Endpoint URL (e.g., `https://shop.example.com/shop-api`).
    api_url: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Default query parameters to include in all requests.
    default_query: HashMap<String, String>,
    /// Response header the server uses to hand out session tokens.
    auth_token_header: String,
    /// The current bearer session token.
    auth_token: Mutex<Option<String>>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("api_url", &self.api_url)
            .field("auth_token_header", &self.auth_token_header)
            .field(
                "auth_token",
                &self.auth_token.lock().as_ref().map(|_| "*****"),
            )
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &VendureConfig) -> Self {
        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Vendure API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("user-agent".to_string(), user_agent);
        default_headers.insert("accept".to_string(), "application/json".to_string());
        if let Some(token) = config.channel_token() {
            default_headers.insert(
                CHANNEL_TOKEN_HEADER.to_string(),
                token.as_ref().to_string(),
            );
        }

        let mut default_query = HashMap::new();
        if let Some(code) = config.language_code() {
            default_query.insert(LANGUAGE_CODE_PARAM.to_string(), code.as_ref().to_string());
        }

        // Create reqwest client
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_url: config.api_url().as_ref().to_string(),
            default_headers,
            default_query,
            auth_token_header: config.auth_token_header().to_ascii_lowercase(),
            auth_token: Mutex::new(None),
        }
    }

    /// Returns the endpoint URL for this client.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the default query parameters for this client.
    #[must_use]
    pub const fn default_query(&self) -> &HashMap<String, String> {
        &self.default_query
    }

    /// Returns the current session token, if one has been set or captured.
    #[must_use]
    pub fn auth_token(&self) -> Option<String> {
        self.auth_token.lock().clone()
    }

    /// Sets the session token sent as `Authorization: Bearer <token>`.
    pub fn set_auth_token(&self, token: impl Into<String>) {
        *self.auth_token.lock() = Some(token.into());
    }

    /// Forgets the session token.
    pub fn clear_auth_token(&self) {
        *self.auth_token.lock() = None;
    }

    /// Sends an HTTP request to the Vendure API.
    ///
    /// Header names are compared case-insensitively: request headers override
    /// the defaults and the session token whatever their case. Request query
    /// parameters override the default `languageCode`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = if request.path.is_empty() {
            self.api_url.clone()
        } else {
            format!("{}/{}", self.api_url, request.path.trim_start_matches('/'))
        };

        let mut headers = self.default_headers.clone();
        if request.body.is_some() {
            headers.insert("content-type".to_string(), "application/json".to_string());
        }
        if let Some(token) = self.auth_token() {
            headers.insert("authorization".to_string(), format!("Bearer {token}"));
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.to_ascii_lowercase(), value.clone());
            }
        }

        let mut query = self.default_query.clone();
        if let Some(extra) = &request.query {
            for (key, value) in extra {
                query.insert(key.clone(), value.clone());
            }
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        };
        req_builder = req_builder.headers(Self::header_map(&headers)?);
        if !query.is_empty() {
            req_builder = req_builder.query(&query);
        }
        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.unwrap_or_default();

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text)
                .unwrap_or_else(|_| serde_json::Value::String(body_text))
        };

        let response = HttpResponse::new(code, res_headers, body);
        self.capture_auth_token(&response);

        if response.is_ok() {
            return Ok(response);
        }

        tracing::debug!(status = code, url = %url, "Vendure API returned an error status");

        let message = match &response.body {
            serde_json::Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        Err(HttpError::Response(HttpResponseError {
            code,
            message,
            error_reference: response.request_id().map(String::from),
        }))
    }

    /// Stores the session token handed out by the server, if any.
    fn capture_auth_token(&self, response: &HttpResponse) {
        if let Some(token) = response.header(&self.auth_token_header) {
            let mut current = self.auth_token.lock();
            if current.as_deref() != Some(token) {
                tracing::debug!(header = %self.auth_token_header, "Captured session token");
                *current = Some(token.to_string());
            }
        }
    }

    /// Converts string headers into a validated [`HeaderMap`].
    fn header_map(headers: &HashMap<String, String>) -> Result<HeaderMap, InvalidHttpRequestError> {
        let mut map = HeaderMap::with_capacity(headers.len());
        for (key, value) in headers {
            let invalid = || InvalidHttpRequestError::InvalidHeader { name: key.clone() };
            let name = HeaderName::from_bytes(key.as_bytes()).map_err(|_| invalid())?;
            let value = HeaderValue::from_str(value).map_err(|_| invalid())?;
            map.insert(name, value);
        }
        Ok(map)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiUrl, ChannelToken, LanguageCode};

    fn create_test_config() -> VendureConfig {
        VendureConfig::builder()
            .api_url(ApiUrl::new("https://shop.example.com/shop-api").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_with_config() {
        let client = HttpClient::new(&create_test_config());

        assert_eq!(client.api_url(), "https://shop.example.com/shop-api");
        assert!(client.default_query().is_empty());
        assert!(client.auth_token().is_none());
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config());

        let user_agent = client.default_headers().get("user-agent").unwrap();
        assert!(user_agent.contains("Vendure API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = VendureConfig::builder()
            .api_url(ApiUrl::new("https://shop.example.com/shop-api").unwrap())
            .user_agent_prefix("MyStorefront/2.1")
            .build()
            .unwrap();
        let client = HttpClient::new(&config);

        let user_agent = client.default_headers().get("user-agent").unwrap();
        assert!(user_agent.starts_with("MyStorefront/2.1 | "));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&create_test_config());

        assert_eq!(
            client.default_headers().get("accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_channel_and_language_defaults() {
        let config = VendureConfig::builder()
            .api_url(ApiUrl::new("https://shop.example.com/shop-api").unwrap())
            .channel_token(ChannelToken::new("eu-channel").unwrap())
            .language_code(LanguageCode::new("de").unwrap())
            .build()
            .unwrap();
        let client = HttpClient::new(&config);

        assert_eq!(
            client.default_headers().get(CHANNEL_TOKEN_HEADER),
            Some(&"eu-channel".to_string())
        );
        assert_eq!(
            client.default_query().get(LANGUAGE_CODE_PARAM),
            Some(&"de".to_string())
        );
    }

    #[test]
    fn test_no_channel_header_without_token() {
        let client = HttpClient::new(&create_test_config());
        assert!(client.default_headers().get(CHANNEL_TOKEN_HEADER).is_none());
    }

    #[test]
    fn test_auth_token_management() {
        let client = HttpClient::new(&create_test_config());

        client.set_auth_token("session-abc");
        assert_eq!(client.auth_token().as_deref(), Some("session-abc"));
        assert!(!format!("{client:?}").contains("session-abc"));

        client.clear_auth_token();
        assert!(client.auth_token().is_none());
    }

    #[test]
    fn test_capture_auth_token_from_response() {
        let client = HttpClient::new(&create_test_config());
        let mut headers = HashMap::new();
        headers.insert(
            "vendure-auth-token".to_string(),
            vec!["captured-token".to_string()],
        );

        client.capture_auth_token(&HttpResponse::new(200, headers, serde_json::json!({})));
        assert_eq!(client.auth_token().as_deref(), Some("captured-token"));

        client.capture_auth_token(&HttpResponse::new(200, HashMap::new(), serde_json::json!({})));
        assert_eq!(client.auth_token().as_deref(), Some("captured-token"));
    }

    #[test]
    fn test_header_map_rejects_invalid_names() {
        let mut headers = HashMap::new();
        headers.insert("bad header".to_string(), "value".to_string());

        assert!(matches!(
            HttpClient::header_map(&headers),
            Err(InvalidHttpRequestError::InvalidHeader { name }) if name == "bad header"
        ));
    }
}
