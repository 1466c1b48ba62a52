//! GraphQL client implementation for the Vendure Shop and Admin APIs.

use crate::clients::graphql::{GraphqlError, GraphqlResponse, RequestOptions};
use crate::clients::{HttpClient, HttpMethod, HttpRequest};
use crate::config::VendureConfig;
use crate::query::{Operation, OperationType, QueryBuilder};

/// GraphQL client for a Vendure API endpoint.
///
/// Sends documents as `POST` requests with a `{"query", "variables"}` JSON
/// body and decodes the response envelope. Documents usually come from
/// [`QueryBuilder`]; [`execute_operation`](Self::execute_operation) builds and
/// sends in one step.
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use vendure_api::{ApiUrl, GraphqlClient, VendureConfig};
/// use vendure_api::custom_fields::FieldRegistry;
/// use vendure_api::query::{Operation, OrderQueryOptions, QueryBuilder};
///
/// let config = VendureConfig::builder()
///     .api_url(ApiUrl::new("https://demo.vendure.io/shop-api").unwrap())
///     .build()
///     .unwrap();
/// let client = GraphqlClient::new(&config);
/// let registry = FieldRegistry::new();
///
/// let response = client
///     .execute_operation(
///         &QueryBuilder::new(&registry),
///         &Operation::ActiveOrder(OrderQueryOptions::default()),
///         None,
///         None,
///     )
///     .await?;
///
/// println!("{:?}", response.field("activeOrder"));
/// ```
#[derive(Debug)]
pub struct GraphqlClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client for the configured endpoint.
    #[must_use]
    pub fn new(config: &VendureConfig) -> Self {
        Self {
            http_client: HttpClient::new(config),
        }
    }

    /// Returns the underlying HTTP client, e.g. to manage the session token.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Executes a query document.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Http`] for HTTP-level errors and
    /// [`GraphqlError::Decode`] if the body is not a GraphQL response.
    /// GraphQL `errors` returned with HTTP 200 are not errors here; inspect
    /// [`GraphqlResponse::errors`].
    pub async fn execute_query(
        &self,
        document: &str,
        variables: Option<serde_json::Value>,
        options: Option<RequestOptions>,
    ) -> Result<GraphqlResponse, GraphqlError> {
        self.execute(OperationType::Query, document, variables, options)
            .await
    }

    /// Executes a mutation document.
    ///
    /// # Errors
    ///
    /// Same as [`execute_query`](Self::execute_query).
    pub async fn execute_mutation(
        &self,
        document: &str,
        variables: Option<serde_json::Value>,
        options: Option<RequestOptions>,
    ) -> Result<GraphqlResponse, GraphqlError> {
        self.execute(OperationType::Mutation, document, variables, options)
            .await
    }

    /// Builds the document for `operation` and executes it.
    ///
    /// # Errors
    ///
    /// Same as [`execute_query`](Self::execute_query).
    pub async fn execute_operation(
        &self,
        builder: &QueryBuilder<'_>,
        operation: &Operation,
        variables: Option<serde_json::Value>,
        options: Option<RequestOptions>,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let document = builder.build(operation);
        self.execute(operation.operation_type(), &document, variables, options)
            .await
    }

    async fn execute(
        &self,
        operation_type: OperationType,
        document: &str,
        variables: Option<serde_json::Value>,
        options: Option<RequestOptions>,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let body = serde_json::json!({
            "query": document,
            "variables": variables.unwrap_or_else(|| serde_json::json!({})),
        });

        let mut builder = HttpRequest::builder(HttpMethod::Post, "").body(body);
        if let Some(options) = options {
            let (headers, query) = options.into_parts();
            for (key, value) in query {
                builder = builder.query_param(key, value);
            }
            builder = builder.extra_headers(headers);
        }

        tracing::debug!(operation_type = %operation_type, "Executing GraphQL document");

        let request = builder.build().map_err(|e| GraphqlError::Http(e.into()))?;
        let response = self.http_client.request(request).await?;

        if !response.body.is_object() {
            return Err(GraphqlError::Decode {
                message: format!("expected a JSON object, got {}", response.body),
            });
        }
        let decoded: GraphqlResponse = serde_json::from_value(response.body)?;

        if let Some(errors) = decoded.errors.as_ref().filter(|errors| !errors.is_empty()) {
            tracing::warn!(
                count = errors.len(),
                first = %errors[0].message,
                "GraphQL response contained errors"
            );
        }

        Ok(decoded)
    }
}
