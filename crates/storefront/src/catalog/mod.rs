//! Product data store: catalog fetches, a process-lifetime cache, and the
//! state the UI renders from.
//!
//! # Architecture
//!
//! - Cheaply cloneable handle (`Arc` inner), constructed with an injected
//!   [`CatalogTransport`] - no ambient globals.
//! - Products are cached by id for the process lifetime: no TTL, no
//!   eviction. Cached entries are `Arc<Product>` so cart line items share
//!   them instead of deep-copying.
//! - Fetch failures never escape: they are classified into
//!   [`ErrorDetails`] and exposed through [`ProductStore::error_details`].
//! - Every fetch brackets itself with the loading flag; the release runs in
//!   a drop guard, so the flag clears on success, failure, or a caller
//!   dropping the in-flight future. A dropped future also never writes its
//!   result into state.
//!
//! Overlapping fetches for the same id are not deduplicated; whichever
//! response settles last wins. The state lock is only ever held for
//! synchronous reads and writes, never across an `.await`.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use moka::future::Cache;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, instrument, warn};

use tradewind_core::{Category, Product, ProductId};

use crate::error::{ErrorDetails, classify};
use crate::graphql::{CatalogError, CatalogTransport, queries};

/// Store for catalog data fetched from the remote service.
///
/// Clones share the same cache and state.
#[derive(Clone)]
pub struct ProductStore {
    inner: Arc<ProductStoreInner>,
}

struct ProductStoreInner {
    transport: Arc<dyn CatalogTransport>,
    /// Process-lifetime product cache. Built unbounded with no TTL: the
    /// catalog is session-scoped and small, so nothing is ever evicted.
    cache: Cache<ProductId, Arc<Product>>,
    state: RwLock<ProductState>,
}

#[derive(Default)]
struct ProductState {
    current: Option<Arc<Product>>,
    products: Vec<Arc<Product>>,
    categories: Vec<Category>,
    error: Option<ErrorDetails>,
    loading: bool,
}

impl ProductStoreInner {
    fn read_state(&self) -> RwLockReadGuard<'_, ProductState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, ProductState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Sets the loading flag for the duration of a fetch and clears any stale
/// error; releases the flag on drop, whatever happened to the fetch.
struct LoadingGuard {
    inner: Arc<ProductStoreInner>,
}

impl LoadingGuard {
    fn begin(inner: &Arc<ProductStoreInner>) -> Self {
        {
            let mut state = inner.write_state();
            state.loading = true;
            state.error = None;
        }
        Self {
            inner: Arc::clone(inner),
        }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.inner.write_state().loading = false;
    }
}

// Response-data envelopes per query.

#[derive(Deserialize)]
struct ProductData {
    #[serde(default)]
    product: Option<Product>,
}

#[derive(Deserialize)]
struct ProductsData {
    products: Vec<Product>,
}

#[derive(Deserialize)]
struct CategoriesData {
    categories: Vec<Category>,
}

impl ProductStore {
    /// Create a new store over the given transport.
    #[must_use]
    pub fn new(transport: Arc<dyn CatalogTransport>) -> Self {
        Self {
            inner: Arc::new(ProductStoreInner {
                transport,
                cache: Cache::builder().build(),
                state: RwLock::new(ProductState::default()),
            }),
        }
    }

    /// Fetch a product by id and make it the current product.
    ///
    /// A cached id is served without a network call. On failure the current
    /// product is cleared and the classified error is stored instead.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn fetch_product(&self, id: &ProductId) {
        let _loading = LoadingGuard::begin(&self.inner);

        if let Some(product) = self.inner.cache.get(id).await {
            debug!("cache hit for product");
            self.inner.write_state().current = Some(product);
            return;
        }

        match self.request_product(id).await {
            Ok(product) => {
                let product = Arc::new(product);
                self.inner
                    .cache
                    .insert(id.clone(), Arc::clone(&product))
                    .await;
                self.inner.write_state().current = Some(product);
            }
            Err(err) => self.fail(&err, |state| state.current = None),
        }
    }

    /// Fetch the catalog, optionally filtered to a category.
    ///
    /// The remote protocol has no server-side filter: the full catalog is
    /// fetched, merged into the cache, and filtered client-side. `None` and
    /// the `"all"` sentinel both mean the unfiltered set.
    #[instrument(skip(self))]
    pub async fn fetch_products(&self, category: Option<&str>) {
        let _loading = LoadingGuard::begin(&self.inner);

        match self.request_products().await {
            Ok(products) => {
                let products: Vec<Arc<Product>> = products.into_iter().map(Arc::new).collect();
                for product in &products {
                    self.inner
                        .cache
                        .insert(product.id.clone(), Arc::clone(product))
                        .await;
                }

                let filtered = match category {
                    Some(wanted) if wanted != Category::ALL => products
                        .into_iter()
                        .filter(|p| p.category == wanted)
                        .collect(),
                    _ => products,
                };

                debug!(count = filtered.len(), "catalog loaded");
                self.inner.write_state().products = filtered;
            }
            Err(err) => self.fail(&err, |state| state.products.clear()),
        }
    }

    /// Fetch the category list.
    #[instrument(skip(self))]
    pub async fn fetch_categories(&self) {
        let _loading = LoadingGuard::begin(&self.inner);

        match self.request_categories().await {
            Ok(categories) => self.inner.write_state().categories = categories,
            Err(err) => self.fail(&err, |state| state.categories.clear()),
        }
    }

    /// Clear the current product without touching the cache.
    pub fn clear_product(&self) {
        self.inner.write_state().current = None;
    }

    /// Whether a fetch is in flight.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.inner.read_state().loading
    }

    /// The classified error of the last failed fetch, if the most recent
    /// fetch failed.
    #[must_use]
    pub fn error_details(&self) -> Option<ErrorDetails> {
        self.inner.read_state().error.clone()
    }

    /// The current (focused) product.
    #[must_use]
    pub fn product(&self) -> Option<Arc<Product>> {
        self.inner.read_state().current.clone()
    }

    /// The product list from the last successful catalog fetch.
    #[must_use]
    pub fn products(&self) -> Vec<Arc<Product>> {
        self.inner.read_state().products.clone()
    }

    /// The category list from the last successful category fetch.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        self.inner.read_state().categories.clone()
    }

    async fn request_product(&self, id: &ProductId) -> Result<Product, CatalogError> {
        let data = self
            .inner
            .transport
            .issue(queries::GET_PRODUCT, json!({ "id": id }))
            .await?;
        let envelope: ProductData = serde_json::from_value(data)?;
        envelope
            .product
            .ok_or_else(|| CatalogError::NotFound(format!("product {id}")))
    }

    async fn request_products(&self) -> Result<Vec<Product>, CatalogError> {
        let data = self
            .inner
            .transport
            .issue(queries::GET_PRODUCTS, json!({}))
            .await?;
        let envelope: ProductsData = serde_json::from_value(data)?;
        Ok(envelope.products)
    }

    async fn request_categories(&self) -> Result<Vec<Category>, CatalogError> {
        let data = self
            .inner
            .transport
            .issue(queries::GET_CATEGORIES, json!({}))
            .await?;
        let envelope: CategoriesData = serde_json::from_value(data)?;
        Ok(envelope.categories)
    }

    /// Classify and store a fetch failure, clearing whatever the failed
    /// operation would have populated.
    fn fail(&self, err: &CatalogError, clear: impl FnOnce(&mut ProductState)) {
        let details = classify(err);
        warn!(
            kind = details.kind.as_str(),
            error = %err,
            "catalog fetch failed"
        );
        let mut state = self.inner.write_state();
        clear(&mut state);
        state.error = Some(details);
    }
}
