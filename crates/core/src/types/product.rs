//! Catalog product types.
//!
//! These mirror the catalog service's wire shape (camelCase field names).
//! The product-list query omits `description` and attribute `id`, so those
//! fields fall back to their defaults when absent.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::id::{AttributeItemId, ProductId};
use crate::types::price::Price;

/// How an attribute is rendered by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    /// Plain text chips (e.g. "Size: 40 / 41 / 42").
    #[default]
    Text,
    /// Color swatches carrying a hex value.
    Swatch,
}

/// One selectable value of a product attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeItem {
    /// Identifier passed around in selections and order payloads.
    pub id: AttributeItemId,
    /// Raw value (e.g. "#44FF03" for a swatch, "XL" for text).
    pub value: String,
    /// Human-readable value (e.g. "Green").
    pub display_value: String,
}

/// A selectable product attribute (e.g. Size, Color, Capacity).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAttribute {
    /// Attribute identifier. The list query omits it; only the detail query
    /// carries it.
    #[serde(default)]
    pub id: String,
    /// Attribute name; the key used in cart selections.
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AttributeKind,
    /// Selectable values, in catalog order.
    pub items: Vec<AttributeItem>,
}

impl ProductAttribute {
    /// Look up an item of this attribute by id.
    #[must_use]
    pub fn item(&self, item_id: &AttributeItemId) -> Option<&AttributeItem> {
        self.items.iter().find(|item| &item.id == item_id)
    }
}

/// A catalog product.
///
/// Immutable once fetched; shared between the product cache and cart line
/// items via `Arc`, never deep-copied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub in_stock: bool,
    /// Image URLs, first is the primary image.
    pub gallery: Vec<String>,
    /// HTML description. Absent from the list query.
    #[serde(default)]
    pub description: String,
    pub category: String,
    /// Selectable attributes, in catalog order.
    pub attributes: Vec<ProductAttribute>,
    /// The first entry is the authoritative unit price.
    pub prices: Vec<Price>,
}

impl Product {
    /// The authoritative unit price (first entry of `prices`).
    #[must_use]
    pub fn unit_price(&self) -> Option<&Price> {
        self.prices.first()
    }

    /// Look up an attribute by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&ProductAttribute> {
        self.attributes.iter().find(|attr| attr.name == name)
    }

    /// Whether a selection covers every attribute of this product.
    ///
    /// The add-to-cart button stays disabled until this holds.
    #[must_use]
    pub fn is_selection_complete(&self, selection: &BTreeMap<String, AttributeItemId>) -> bool {
        self.attributes
            .iter()
            .all(|attr| selection.contains_key(&attr.name))
    }

    /// Resolve the display value for a selected attribute item.
    #[must_use]
    pub fn display_value(&self, attribute_name: &str, item_id: &AttributeItemId) -> Option<&str> {
        self.attribute(attribute_name)
            .and_then(|attr| attr.item(item_id))
            .map(|item| item.display_value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAIL_JSON: &str = r##"{
        "id": "ps-5",
        "name": "PlayStation 5",
        "brand": "Sony",
        "inStock": true,
        "gallery": ["https://cdn.example.com/ps5-front.png"],
        "description": "<p>A good gaming console.</p>",
        "category": "tech",
        "attributes": [
            {
                "id": "Color",
                "name": "Color",
                "type": "swatch",
                "items": [
                    {"id": "Black", "value": "#000000", "displayValue": "Black"},
                    {"id": "White", "value": "#FFFFFF", "displayValue": "White"}
                ]
            },
            {
                "id": "Capacity",
                "name": "Capacity",
                "type": "text",
                "items": [
                    {"id": "512G", "value": "512G", "displayValue": "512G"},
                    {"id": "1T", "value": "1T", "displayValue": "1T"}
                ]
            }
        ],
        "prices": [{"currency": {"label": "USD", "symbol": "$"}, "amount": 844.02}]
    }"##;

    // The list query omits description and attribute ids.
    const LIST_JSON: &str = r##"{
        "id": "xbox-series-s",
        "name": "Xbox Series S 512GB",
        "brand": "Microsoft",
        "inStock": false,
        "gallery": [],
        "category": "tech",
        "attributes": [
            {
                "name": "Color",
                "type": "swatch",
                "items": [{"id": "Green", "value": "#44FF03", "displayValue": "Green"}]
            }
        ],
        "prices": [{"currency": {"label": "USD", "symbol": "$"}, "amount": 333.99}]
    }"##;

    #[test]
    fn test_deserialize_detail_shape() {
        let product: Product = serde_json::from_str(DETAIL_JSON).expect("deserialize");
        assert_eq!(product.id.as_str(), "ps-5");
        assert!(product.in_stock);
        assert_eq!(product.attributes.len(), 2);
        assert_eq!(
            product.attribute("Color").map(|a| a.kind),
            Some(AttributeKind::Swatch)
        );
        assert!(product.unit_price().is_some());
    }

    #[test]
    fn test_deserialize_list_shape_defaults() {
        let product: Product = serde_json::from_str(LIST_JSON).expect("deserialize");
        assert_eq!(product.description, "");
        assert_eq!(
            product.attributes.first().map(|a| a.id.as_str()),
            Some("")
        );
        assert!(!product.in_stock);
    }

    #[test]
    fn test_selection_completeness() {
        let product: Product = serde_json::from_str(DETAIL_JSON).expect("deserialize");

        let mut selection = BTreeMap::new();
        selection.insert("Color".to_string(), AttributeItemId::new("Black"));
        assert!(!product.is_selection_complete(&selection));

        selection.insert("Capacity".to_string(), AttributeItemId::new("1T"));
        assert!(product.is_selection_complete(&selection));
    }

    #[test]
    fn test_display_value_resolution() {
        let product: Product = serde_json::from_str(DETAIL_JSON).expect("deserialize");
        assert_eq!(
            product.display_value("Color", &AttributeItemId::new("White")),
            Some("White")
        );
        assert_eq!(
            product.display_value("Color", &AttributeItemId::new("Purple")),
            None
        );
    }
}
