//! HTTP implementation of the catalog transport using `reqwest`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::CatalogConfig;
use crate::graphql::{CatalogError, CatalogTransport};

/// Debug line the legacy catalog backend occasionally prepends to JSON
/// bodies; stripped before parsing.
const STRAY_PREAMBLE: &str = "Database connection successful!";

/// Maximum response-body characters carried into error values and logs.
const BODY_SNIPPET_LEN: usize = 200;

#[derive(Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: Value,
}

#[derive(Deserialize)]
struct GraphqlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<GraphqlResponseError>>,
}

#[derive(Deserialize)]
struct GraphqlResponseError {
    message: String,
}

/// Catalog transport over HTTP POST.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// Create a new HTTP transport for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl CatalogTransport for HttpTransport {
    async fn issue(&self, query: &'static str, variables: Value) -> Result<Value, CatalogError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&GraphqlRequest { query, variables })
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();

        // Read the body as text first for better error diagnostics.
        let body = response.text().await.map_err(map_transport_error)?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %snippet(&body),
                "catalog service returned non-success status"
            );
            return Err(CatalogError::Http {
                status: status.as_u16(),
                body: snippet(&body),
            });
        }

        let cleaned = body.replacen(STRAY_PREAMBLE, "", 1);
        let envelope: GraphqlResponse = serde_json::from_str(cleaned.trim_start())?;

        if let Some(first) = envelope.errors.into_iter().flatten().next() {
            tracing::debug!(error = %first.message, "GraphQL errors in response");
            return Err(CatalogError::Graphql(first.message));
        }

        envelope.data.ok_or_else(|| {
            tracing::error!(body = %snippet(&cleaned), "response has no data and no errors");
            CatalogError::MissingData(snippet(&cleaned))
        })
    }
}

fn map_transport_error(e: reqwest::Error) -> CatalogError {
    if e.is_timeout() {
        CatalogError::Timeout(e.to_string())
    } else {
        CatalogError::Network(e.to_string())
    }
}

fn snippet(body: &str) -> String {
    body.chars().take(BODY_SNIPPET_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_decodes_after_preamble_strip() {
        let body = format!("{STRAY_PREAMBLE}{{\"data\":{{\"products\":[]}}}}");
        let cleaned = body.replacen(STRAY_PREAMBLE, "", 1);
        let envelope: GraphqlResponse =
            serde_json::from_str(cleaned.trim_start()).expect("deserialize");
        assert!(envelope.data.is_some());
        assert!(envelope.errors.is_none());
    }

    #[test]
    fn test_envelope_surfaces_first_error() {
        let body = r#"{"errors":[{"message":"Product not found"},{"message":"secondary"}]}"#;
        let envelope: GraphqlResponse = serde_json::from_str(body).expect("deserialize");
        let first = envelope.errors.into_iter().flatten().next();
        assert_eq!(first.map(|e| e.message).as_deref(), Some("Product not found"));
    }
}
