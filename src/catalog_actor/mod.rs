//! # Catalog Actor
//!
//! This module hosts catalog items behind a single Tokio task so that stock can
//! be shared safely between orders placed from different tasks.
//!
//! ## Structure
//!
//! - [`actor`] - [`CatalogActor`], the event loop that owns the items
//! - [`actions`] - [`StockAction`] and [`StockActionResult`] for stock management
//! - [`message`] - [`CatalogRequest`], the wire between client and actor
//! - [`mock`] - helpers for testing code that talks to a [`CatalogClient`](crate::clients::CatalogClient)
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, client) = catalog_actor::new(32);
//! tokio::spawn(actor.run());
//!
//! let id = client.register(params).await?;
//! client.decrement_stock(id, quantity).await?;
//! ```

pub mod actions;
pub mod actor;
pub mod message;
pub mod mock;

pub use actions::*;
pub use actor::*;
pub use message::*;

use crate::clients::CatalogClient;

/// Creates a new catalog actor and its client.
pub fn new(buffer_size: usize) -> (CatalogActor, CatalogClient) {
    CatalogActor::new(buffer_size)
}
