//! Core types for Tradewind.
//!
//! Domain types for the catalog wire format plus type-safe wrappers for
//! common concepts. Everything here is plain data: construction, equality,
//! and serde round-trips, nothing else.

mod category;
mod id;
mod order;
mod price;
mod product;

pub use category::Category;
pub use id::{AttributeItemId, ProductId};
pub use order::{AttributeSelection, Order, OrderInput, OrderItem};
pub use price::{Currency, Price};
pub use product::{AttributeItem, AttributeKind, Product, ProductAttribute};
