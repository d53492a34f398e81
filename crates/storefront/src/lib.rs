//! Tradewind storefront core library.
//!
//! The storefront core is two cooperating, UI-independent components plus
//! the plumbing they share:
//!
//! - [`catalog::ProductStore`] - fetches products from the remote catalog
//!   service, caches them for the process lifetime, and exposes the
//!   loading/error/current-product state the UI renders from.
//! - [`cart::CartStore`] - the in-memory cart: line items keyed by product
//!   and attribute selection, merge-on-add, quantity mutation, derived
//!   totals.
//! - [`orders::OrderGateway`] - submits the cart as an order.
//! - [`error`] - classifies any failed fetch into a structured, renderable
//!   [`error::ErrorDetails`].
//! - [`graphql`] - the query-style protocol seam; stores are constructed
//!   with any [`graphql::CatalogTransport`] implementation.
//!
//! The embedding UI is an external collaborator: it calls the operations
//! exposed here and renders the resulting state. Nothing in this crate
//! renders, routes, or persists.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod graphql;
pub mod orders;
pub mod state;

pub use state::Storefront;
