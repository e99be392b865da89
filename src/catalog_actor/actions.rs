//! Stock actions understood by the catalog actor.
//!
//! Registration and lookups are plain requests; anything that reads or
//! changes stock goes through a [`StockAction`] so the actor handles it in one
//! place.

use crate::model::{CatalogItem, Quantity};

/// Stock operations on a single catalog item.
#[derive(Debug, Clone)]
pub enum StockAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
    /// Takes the given quantity out of stock.
    ///
    /// # Errors
    /// Fails with `InsufficientStock` if the quantity exceeds available stock.
    DecrementStock(Quantity),
}

/// Results from StockActions - variants match 1:1 with StockAction
#[derive(Debug, Clone)]
pub enum StockActionResult {
    /// Current stock level
    CheckStock(u32),
    /// The item as it stands after the decrement
    DecrementStock(CatalogItem),
}
