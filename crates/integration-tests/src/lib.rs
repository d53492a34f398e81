//! Integration tests for Tradewind.
//!
//! Everything runs in-process: the tests wire a [`Storefront`] over a mock
//! catalog transport and drive whole flows (browse → cart → order) through
//! the public surface, the way an embedding UI would.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p tradewind-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_flow` - end-to-end browse/cart/order flows
//! - `error_flow` - failure classification as observed through the stores
//!
//! [`Storefront`]: tradewind_storefront::Storefront
