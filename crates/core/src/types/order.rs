//! Order submission payloads and the confirmation returned by the catalog
//! service.
//!
//! Timestamps stay as wire strings; the storefront never does date
//! arithmetic on them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::{AttributeItemId, ProductId};

/// One attribute choice on an ordered item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeSelection {
    /// Attribute name (e.g. "Color").
    pub attribute_name: String,
    /// Chosen item id (e.g. "Black").
    pub attribute_item_id: AttributeItemId,
    /// Human-readable value resolved from the product's attributes.
    pub display_value: String,
}

/// One line of an order, both in the submission input and the confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: i64,
    pub selected_attributes: Vec<AttributeSelection>,
}

/// Input for the order-creation mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderInput {
    pub items: Vec<OrderItem>,
}

/// Confirmation returned by a successful order-creation mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    /// Server-side creation timestamp, as returned on the wire.
    pub created_at: String,
    pub items: Vec<OrderItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_item_wire_shape() {
        let item = OrderItem {
            product_id: ProductId::new("ps-5"),
            quantity: 2,
            selected_attributes: vec![AttributeSelection {
                attribute_name: "Color".to_string(),
                attribute_item_id: AttributeItemId::new("Black"),
                display_value: "Black".to_string(),
            }],
        };
        let json = serde_json::to_value(&item).expect("serialize");
        assert_eq!(json["productId"], "ps-5");
        assert_eq!(json["selectedAttributes"][0]["attributeItemId"], "Black");
        assert_eq!(json["selectedAttributes"][0]["displayValue"], "Black");
    }

    #[test]
    fn test_order_confirmation_deserialize() {
        let json = r#"{
            "totalAmount": 1688.04,
            "createdAt": "2025-11-02T10:15:00Z",
            "items": [{"productId": "ps-5", "quantity": 2, "selectedAttributes": []}]
        }"#;
        let order: Order = serde_json::from_str(json).expect("deserialize");
        assert_eq!(order.total_amount, Decimal::new(168804, 2));
        assert_eq!(order.items.len(), 1);
    }
}
