//! Order submission gateway.
//!
//! Turns the cart's line items into the order-creation mutation and tracks
//! its own loading/error pair, separate from the product store's: a failed
//! order must not tear down the catalog UI. Clearing the cart after a
//! successful order is the caller's move.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Deserialize;
use serde_json::json;
use tracing::{debug, instrument, warn};

use tradewind_core::{Order, OrderInput};

use crate::cart::LineItem;
use crate::error::{ErrorDetails, classify};
use crate::graphql::{CatalogError, CatalogTransport, queries};

/// Gateway for submitting orders to the catalog service.
///
/// Clones share the same state.
#[derive(Clone)]
pub struct OrderGateway {
    inner: Arc<OrderGatewayInner>,
}

struct OrderGatewayInner {
    transport: Arc<dyn CatalogTransport>,
    state: RwLock<OrderState>,
}

#[derive(Default)]
struct OrderState {
    loading: bool,
    error: Option<ErrorDetails>,
}

impl OrderGatewayInner {
    fn read_state(&self) -> RwLockReadGuard<'_, OrderState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, OrderState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Brackets a submission with the loading flag; released on drop.
struct SubmitGuard {
    inner: Arc<OrderGatewayInner>,
}

impl SubmitGuard {
    fn begin(inner: &Arc<OrderGatewayInner>) -> Self {
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

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        self.inner.write_state().loading = false;
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateOrderData {
    #[serde(default)]
    create_order: Option<Order>,
}

impl OrderGateway {
    /// Create a new gateway over the given transport.
    #[must_use]
    pub fn new(transport: Arc<dyn CatalogTransport>) -> Self {
        Self {
            inner: Arc::new(OrderGatewayInner {
                transport,
                state: RwLock::new(OrderState::default()),
            }),
        }
    }

    /// Submit the given line items as an order.
    ///
    /// Returns the confirmation on success. An empty cart returns `None`
    /// without a request; failures return `None` with the classified error
    /// stored in [`Self::error_details`].
    #[instrument(skip_all, fields(lines = items.len()))]
    pub async fn place_order(&self, items: &[LineItem]) -> Option<Order> {
        if items.is_empty() {
            return None;
        }

        let _submitting = SubmitGuard::begin(&self.inner);

        let input = OrderInput {
            items: items.iter().map(LineItem::to_order_item).collect(),
        };

        match self.request_order(input).await {
            Ok(order) => {
                debug!(total = %order.total_amount, "order placed");
                Some(order)
            }
            Err(err) => {
                let details = classify(&err);
                warn!(
                    kind = details.kind.as_str(),
                    error = %err,
                    "order submission failed"
                );
                self.inner.write_state().error = Some(details);
                None
            }
        }
    }

    /// Whether a submission is in flight.
    #[must_use]
    pub fn order_loading(&self) -> bool {
        self.inner.read_state().loading
    }

    /// The classified error of the last submission, if it failed.
    #[must_use]
    pub fn error_details(&self) -> Option<ErrorDetails> {
        self.inner.read_state().error.clone()
    }

    async fn request_order(&self, input: OrderInput) -> Result<Order, CatalogError> {
        let data = self
            .inner
            .transport
            .issue(queries::CREATE_ORDER, json!({ "input": input }))
            .await?;
        let envelope: CreateOrderData = serde_json::from_value(data)?;
        envelope
            .create_order
            .ok_or_else(|| CatalogError::MissingData("createOrder".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use serde_json::Value;

    use tradewind_core::{AttributeItemId, Currency, Price, Product, ProductId};

    use crate::cart::CartStore;
    use crate::error::ErrorKind;

    struct StubTransport {
        calls: AtomicUsize,
        respond: Box<dyn Fn(&'static str, &Value) -> Result<Value, CatalogError> + Send + Sync>,
    }

    impl StubTransport {
        fn new(
            respond: impl Fn(&'static str, &Value) -> Result<Value, CatalogError>
            + Send
            + Sync
            + 'static,
        ) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                respond: Box::new(respond),
            })
        }
    }

    #[async_trait]
    impl CatalogTransport for StubTransport {
        async fn issue(
            &self,
            query: &'static str,
            variables: Value,
        ) -> Result<Value, CatalogError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.respond)(query, &variables)
        }
    }

    fn cart_with_one_item() -> CartStore {
        let product = Arc::new(Product {
            id: ProductId::new("ps-5"),
            name: "PlayStation 5".to_string(),
            brand: "Sony".to_string(),
            in_stock: true,
            gallery: vec![],
            description: String::new(),
            category: "tech".to_string(),
            attributes: vec![],
            prices: vec![Price::new(Currency::new("USD", "$"), Decimal::from(500))],
        });
        let mut cart = CartStore::new();
        cart.add_to_cart(product, BTreeMap::from([(
            "Color".to_string(),
            AttributeItemId::new("Black"),
        )]));
        cart
    }

    #[tokio::test]
    async fn test_place_order_success() {
        let transport = StubTransport::new(|_, vars| {
            // Echo the submitted items back in the confirmation.
            let items = vars["input"]["items"].clone();
            Ok(json!({ "createOrder": {
                "totalAmount": 500.0,
                "createdAt": "2025-11-02T10:15:00Z",
                "items": items,
            }}))
        });
        let gateway = OrderGateway::new(transport.clone());
        let cart = cart_with_one_item();

        let order = gateway.place_order(cart.items()).await;

        let order = order.expect("order confirmed");
        assert_eq!(order.total_amount, Decimal::from(500));
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 1);
        assert!(gateway.error_details().is_none());
        assert!(!gateway.order_loading());
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_cart_skips_request() {
        let transport = StubTransport::new(|_, _| Ok(json!({})));
        let gateway = OrderGateway::new(transport.clone());

        let order = gateway.place_order(&[]).await;

        assert!(order.is_none());
        assert!(gateway.error_details().is_none());
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_failure_is_classified() {
        let transport = StubTransport::new(|_, _| {
            Err(CatalogError::Graphql(
                "validation failed: address required".to_string(),
            ))
        });
        let gateway = OrderGateway::new(transport);
        let cart = cart_with_one_item();

        let order = gateway.place_order(cart.items()).await;

        assert!(order.is_none());
        let details = gateway.error_details().expect("error recorded");
        assert_eq!(details.kind, ErrorKind::Validation);
        assert!(!gateway.order_loading());
    }
}
