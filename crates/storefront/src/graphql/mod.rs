//! Query-style catalog protocol client.
//!
//! # Architecture
//!
//! The stores do not depend on a concrete transport library; they are
//! constructed with any [`CatalogTransport`] implementation. The trait is a
//! single operation - issue a query document with variables, get the
//! response `data` back as JSON - which keeps test doubles trivial and the
//! HTTP details in one place.
//!
//! [`HttpTransport`] is the production implementation over `reqwest`.
//!
//! # Example
//!
//! ```rust,ignore
//! use tradewind_storefront::config::CatalogConfig;
//! use tradewind_storefront::graphql::{queries, HttpTransport, CatalogTransport};
//!
//! let transport = HttpTransport::new(&CatalogConfig::from_env()?)?;
//! let data = transport
//!     .issue(queries::GET_PRODUCTS, serde_json::json!({}))
//!     .await?;
//! ```

mod http;
pub mod queries;

pub use http::HttpTransport;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when talking to the catalog service.
///
/// Display text doubles as classification input (see [`crate::error`]), so
/// each variant's message carries its cue: the status digits, "network
/// error", "timed out", "parse", and so on.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The service could not be reached.
    #[error("network error: {0}")]
    Network(String),

    /// The request exceeded the client timeout.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Non-success HTTP status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The service answered with GraphQL-level errors; carries the first
    /// error's message verbatim.
    #[error("{0}")]
    Graphql(String),

    /// The response body was not valid JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A well-formed envelope with neither data nor errors.
    #[error("no data in response: {0}")]
    MissingData(String),

    /// The requested entity was absent from the response data.
    #[error("not found: {0}")]
    NotFound(String),
}

/// A query-style remote protocol client: request document + variables in,
/// JSON `data` out.
#[async_trait]
pub trait CatalogTransport: Send + Sync {
    /// Issue a query document with variables, returning the response `data`
    /// value. GraphQL-level errors surface as [`CatalogError::Graphql`].
    async fn issue(&self, query: &'static str, variables: Value) -> Result<Value, CatalogError>;
}
