//! Cart store: distinct (product, attribute-selection) line items and their
//! quantities, with derived totals.
//!
//! The central invariant: identity keys of all line items are pairwise
//! distinct. Adding an already-present combination increments its quantity
//! instead of appending a duplicate. Quantities are strictly positive; a
//! quantity dropping to zero collapses to removal.
//!
//! The store is a plain owned object mutated through `&mut self`; it makes
//! no network calls and cannot fail - invalid inputs (an out-of-stock
//! product) are silently rejected and logged.

use std::collections::BTreeMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;

use tradewind_core::{AttributeItemId, AttributeSelection, OrderItem, Product, ProductId};

/// Identity of a cart line: the product plus the exact attribute selection.
///
/// The selection map compares order-independently (it is ordered by key),
/// and matching requires equality on every entry - no partial match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineItemKey {
    product_id: ProductId,
    selected_attributes: BTreeMap<String, AttributeItemId>,
}

impl LineItemKey {
    #[must_use]
    pub const fn new(
        product_id: ProductId,
        selected_attributes: BTreeMap<String, AttributeItemId>,
    ) -> Self {
        Self {
            product_id,
            selected_attributes,
        }
    }

    #[must_use]
    pub const fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    #[must_use]
    pub const fn selected_attributes(&self) -> &BTreeMap<String, AttributeItemId> {
        &self.selected_attributes
    }
}

/// One entry in the cart.
///
/// Holds a shared reference into the product cache - the product is never
/// deep-copied into the cart.
#[derive(Debug, Clone)]
pub struct LineItem {
    product: Arc<Product>,
    quantity: i64,
    selected_attributes: BTreeMap<String, AttributeItemId>,
}

impl LineItem {
    #[must_use]
    pub const fn product(&self) -> &Arc<Product> {
        &self.product
    }

    #[must_use]
    pub const fn quantity(&self) -> i64 {
        self.quantity
    }

    #[must_use]
    pub const fn selected_attributes(&self) -> &BTreeMap<String, AttributeItemId> {
        &self.selected_attributes
    }

    /// This item's identity key.
    #[must_use]
    pub fn key(&self) -> LineItemKey {
        LineItemKey::new(self.product.id.clone(), self.selected_attributes.clone())
    }

    /// quantity × authoritative unit price.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product
            .unit_price()
            .map_or_else(Decimal::default, |price| price.line_total(self.quantity))
    }

    /// Build the order payload line for this item, resolving display values
    /// from the product's attributes.
    #[must_use]
    pub fn to_order_item(&self) -> OrderItem {
        OrderItem {
            product_id: self.product.id.clone(),
            quantity: self.quantity,
            selected_attributes: self
                .selected_attributes
                .iter()
                .map(|(name, item_id)| AttributeSelection {
                    attribute_name: name.clone(),
                    attribute_item_id: item_id.clone(),
                    display_value: self
                        .product
                        .display_value(name, item_id)
                        .unwrap_or(item_id.as_str())
                        .to_string(),
                })
                .collect(),
        }
    }

    fn matches(&self, key: &LineItemKey) -> bool {
        self.product.id == key.product_id && self.selected_attributes == key.selected_attributes
    }
}

/// The shopping cart.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    items: Vec<LineItem>,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add one unit of a product with the given attribute selection.
    ///
    /// Out-of-stock products are silently rejected (logged, not an error).
    /// A line item with the same identity key gets its quantity bumped;
    /// otherwise a new line item with quantity 1 is appended.
    pub fn add_to_cart(
        &mut self,
        product: Arc<Product>,
        selected_attributes: BTreeMap<String, AttributeItemId>,
    ) {
        if !product.in_stock {
            debug!(product = %product.id, "ignoring add-to-cart of out-of-stock product");
            return;
        }

        let key = LineItemKey::new(product.id.clone(), selected_attributes);
        if let Some(existing) = self.items.iter_mut().find(|item| item.matches(&key)) {
            existing.quantity += 1;
            return;
        }

        self.items.push(LineItem {
            product,
            quantity: 1,
            selected_attributes: key.selected_attributes,
        });
    }

    /// Remove the line item with the given identity key. No-op when absent.
    pub fn remove_from_cart(&mut self, key: &LineItemKey) {
        self.items.retain(|item| !item.matches(key));
    }

    /// Set a line item's quantity. A quantity of zero or less removes the
    /// item. No upper bound is enforced here; stock limits are an external
    /// concern.
    pub fn update_quantity(&mut self, key: &LineItemKey, new_quantity: i64) {
        if new_quantity <= 0 {
            self.remove_from_cart(key);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|item| item.matches(key)) {
            item.quantity = new_quantity;
        }
    }

    /// Empty the cart (used after a successful order).
    pub fn clear_cart(&mut self) {
        self.items.clear();
    }

    /// Total number of units across all line items. Recomputed per read.
    #[must_use]
    pub fn total_items(&self) -> i64 {
        self.items.iter().map(LineItem::quantity).sum()
    }

    /// Exact sum of quantity × unit price over all line items. Recomputed
    /// per read.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Item count for display: "1 Item" / "N Items".
    #[must_use]
    pub fn formatted_items_count(&self) -> String {
        match self.total_items() {
            1 => "1 Item".to_string(),
            n => format!("{n} Items"),
        }
    }

    /// Order payload lines for every item in the cart.
    #[must_use]
    pub fn order_items(&self) -> Vec<OrderItem> {
        self.items.iter().map(LineItem::to_order_item).collect()
    }
}
