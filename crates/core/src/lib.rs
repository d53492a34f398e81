//! Tradewind Core - Shared types library.
//!
//! This crate provides the catalog domain types used across all Tradewind
//! components:
//! - `storefront` - the storefront core (product data, cart, orders)
//! - any embedding UI layer
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Products, attributes, prices, categories, order payloads,
//!   and newtype wrappers for type-safe IDs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
