//! # Storefront
//!
//! > **Orders, catalog items and stock, with one chokepoint for every stock change.**
//!
//! The crate has two layers. The domain core in [`model`] is plain synchronous
//! Rust: a [`CatalogItem`](model::CatalogItem) guards its own stock, and an
//! [`Order`](model::Order) adds lines against items it borrows mutably. Around
//! it sits a small actor runtime so that many tasks can place orders against
//! the same items without overselling.
//!
//! ## 🏗️ Design Notes
//!
//! ### 1. Stock only moves through `decrement_stock`
//! [`CatalogItem::decrement_stock`](model::CatalogItem::decrement_stock) is the
//! only mutation of stock. It refuses requests larger than what is left, so
//! stock can never go negative, and quantities are validated into
//! [`Quantity`](model::Quantity) before they get there.
//!
//! ### 2. Failed additions change nothing
//! Adding a line validates the quantity, takes the stock, and only then touches
//! the order. Any error leaves the order and the item as they were.
//!
//! ### 3. Concurrency Model
//! In the concurrent host the [`CatalogActor`](catalog_actor::CatalogActor)
//! owns every item and handles requests sequentially in its own Tokio task. No
//! locks are needed for the item store.
//!
//! ### 4. Observability
//! `tracing` with structured fields throughout. See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`] - catalog items, quantities, orders and summaries
//! - [`error`] - one error enum per concern
//! - [`catalog_actor`] - the task owning the catalog, plus test mocks
//! - [`clients`] - [`CatalogClient`](clients::CatalogClient), the handle to that task
//! - [`order_desk`] - places order lines through the catalog client
//! - [`lifecycle`] - configuration, startup, shutdown and tracing setup
//! - [`input`] - reads a customer name from a line-oriented source
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod catalog_actor;
pub mod clients;
pub mod error;
pub mod input;
pub mod lifecycle;
pub mod model;
pub mod order_desk;
