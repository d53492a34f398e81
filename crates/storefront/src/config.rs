//! Catalog client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CATALOG_GRAPHQL_URL` - Catalog GraphQL endpoint
//!   (default: `http://localhost:8000/graphql`)
//! - `CATALOG_REQUEST_TIMEOUT_SECS` - Per-request timeout in seconds
//!   (default: 30)

use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_ENDPOINT: &str = "http://localhost:8000/graphql";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Catalog client configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Catalog GraphQL endpoint URL.
    pub endpoint: String,
    /// Per-request timeout applied by the HTTP transport.
    pub request_timeout: Duration,
}

impl CatalogConfig {
    /// Create a configuration for a known endpoint with default timeouts.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let endpoint = get_env_or_default("CATALOG_GRAPHQL_URL", DEFAULT_ENDPOINT);
        Url::parse(&endpoint).map_err(|e| {
            ConfigError::InvalidEnvVar("CATALOG_GRAPHQL_URL".to_string(), e.to_string())
        })?;

        let timeout_secs = get_env_or_default(
            "CATALOG_REQUEST_TIMEOUT_SECS",
            &DEFAULT_REQUEST_TIMEOUT_SECS.to_string(),
        )
        .parse::<u64>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("CATALOG_REQUEST_TIMEOUT_SECS".to_string(), e.to_string())
        })?;

        Ok(Self {
            endpoint,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let config = CatalogConfig::default();
        assert_eq!(config.endpoint, "http://localhost:8000/graphql");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_explicit_endpoint() {
        let config = CatalogConfig::new("https://catalog.example.com/graphql");
        assert_eq!(config.endpoint, "https://catalog.example.com/graphql");
    }
}
