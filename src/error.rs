//! # Error Types
//!
//! Every fallible operation in the crate returns one of the enums below.
//! Stock failures are raised by the catalog ([`CatalogError`]) and reach order
//! callers unchanged through [`OrderError::Catalog`].

use crate::model::{ItemId, OrderId};
use rust_decimal::Decimal;
use thiserror::Error;

/// A quantity that is not a positive integer.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("Invalid quantity: {0} (must be a positive integer)")]
pub struct InvalidQuantity(pub i64);

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The requested item was not found.
    #[error("Catalog item not found: {0}")]
    NotFound(ItemId),

    /// An item with the same id is already registered.
    #[error("Catalog item already registered: {0}")]
    DuplicateItem(ItemId),

    /// Unit prices must not be negative.
    #[error("Invalid unit price for {item_id}: {price}")]
    InvalidPrice { item_id: ItemId, price: Decimal },

    /// The requested quantity exceeds the available stock.
    #[error("Insufficient stock for {item_id}: requested {requested}, available {available}")]
    InsufficientStock {
        item_id: ItemId,
        requested: u32,
        available: u32,
    },

    /// An error occurred while communicating with the catalog actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

/// Errors that can occur while building or summarizing an order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The line quantity is zero, negative or out of range.
    #[error(transparent)]
    InvalidQuantity(#[from] InvalidQuantity),

    /// Stock could not be taken from the catalog.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The line total or the order total does not fit in a `Decimal`.
    #[error("Order {order_id} total overflows when adding {item_id}")]
    AmountOverflow { order_id: OrderId, item_id: ItemId },

    /// The order has no lines to summarize.
    #[error("Order {0} has no items")]
    EmptyOrder(OrderId),
}

/// Errors raised while reading [`SystemConfig`](crate::lifecycle::SystemConfig) from the environment.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

/// Errors raised while stopping the runtime.
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Actor task failed: {0}")]
    ActorTask(#[from] tokio::task::JoinError),
}
