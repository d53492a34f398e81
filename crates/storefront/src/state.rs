//! Storefront composition root.
//!
//! Wires the transport into the two stores and the order gateway. Nothing
//! here is global: construct one `Storefront` per embedding UI and pass it
//! down.

use std::sync::Arc;

use crate::cart::CartStore;
use crate::catalog::ProductStore;
use crate::config::CatalogConfig;
use crate::graphql::{CatalogError, CatalogTransport, HttpTransport};
use crate::orders::OrderGateway;

/// The assembled storefront core: product data, cart, and order submission.
pub struct Storefront {
    config: CatalogConfig,
    products: ProductStore,
    orders: OrderGateway,
    cart: CartStore,
}

impl Storefront {
    /// Create a storefront talking HTTP to the configured catalog endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let transport: Arc<dyn CatalogTransport> = Arc::new(HttpTransport::new(&config)?);
        Ok(Self::with_transport(config, transport))
    }

    /// Create a storefront over an injected transport (used by tests and
    /// non-HTTP embeddings).
    #[must_use]
    pub fn with_transport(config: CatalogConfig, transport: Arc<dyn CatalogTransport>) -> Self {
        Self {
            config,
            products: ProductStore::new(Arc::clone(&transport)),
            orders: OrderGateway::new(transport),
            cart: CartStore::new(),
        }
    }

    /// Get a reference to the catalog configuration.
    #[must_use]
    pub const fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Get the product data store.
    #[must_use]
    pub const fn products(&self) -> &ProductStore {
        &self.products
    }

    /// Get the order gateway.
    #[must_use]
    pub const fn orders(&self) -> &OrderGateway {
        &self.orders
    }

    /// Get the cart.
    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Get the cart for mutation.
    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }
}
