use crate::error::OrderError;
use crate::model::{CatalogItem, ItemId, OrderSummary, Quantity};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::debug;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One addition of an item to an order.
///
/// Name and price are captured when the line is added, so later catalog
/// changes do not rewrite the order's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub item_id: ItemId,
    pub item_name: String,
    pub unit_price: Decimal,
    pub quantity: Quantity,
}

impl OrderLine {
    pub fn from_item(item: &CatalogItem, quantity: Quantity) -> Self {
        Self {
            item_id: item.id().clone(),
            item_name: item.name().to_string(),
            unit_price: item.unit_price(),
            quantity,
        }
    }

    /// `unit_price * quantity`, or `None` when it does not fit in a `Decimal`.
    pub fn checked_line_total(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.quantity))
    }

    /// Saturating form of [`OrderLine::checked_line_total`]. Lines held by an
    /// [`Order`] were checked when they were added and never saturate.
    pub fn line_total(&self) -> Decimal {
        self.unit_price.saturating_mul(Decimal::from(self.quantity))
    }
}

/// Represents a customer order.
///
/// An `Order` accumulates [`OrderLine`]s against catalog items it does not own.
/// Adding a line takes stock out of the referenced item first, so a failed
/// addition leaves both the order and the item untouched.
///
/// [`Order::summarize`] returns a snapshot and does not freeze the order:
/// lines added afterwards keep accumulating and show up in the next summary.
#[derive(Debug, Clone)]
pub struct Order {
    id: OrderId,
    customer_name: String,
    created_at: DateTime<Utc>,
    lines: Vec<OrderLine>,
    total_amount: Decimal,
}

impl Order {
    /// Creates an empty order stamped with the current time.
    ///
    /// `customer_name` is stored exactly as given.
    pub fn new(id: impl Into<OrderId>, customer_name: impl Into<String>) -> Self {
        Self::opened_at(id, customer_name, Utc::now())
    }

    /// Creates an empty order with an explicit creation time.
    pub fn opened_at(
        id: impl Into<OrderId>,
        customer_name: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            customer_name: customer_name.into(),
            created_at,
            lines: Vec::new(),
            total_amount: Decimal::ZERO,
        }
    }

    pub fn id(&self) -> &OrderId {
        &self.id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Adds `quantity` units of `item`, taking them out of the item's stock.
    ///
    /// # Errors
    /// - [`OrderError::InvalidQuantity`] when `quantity` is not positive.
    /// - [`OrderError::AmountOverflow`] when the line or the new order total
    ///   does not fit in a `Decimal`.
    /// - [`OrderError::Catalog`] wrapping `InsufficientStock` when the item
    ///   cannot cover the request.
    ///
    /// Neither the order nor the item changes on error.
    pub fn add_item(&mut self, item: &mut CatalogItem, quantity: i64) -> Result<(), OrderError> {
        let quantity = Quantity::try_from(quantity)?;
        let line = OrderLine::from_item(item, quantity);
        let total = self.total_with(&line)?;
        item.decrement_stock(quantity)?;
        self.push_line(line, total);
        Ok(())
    }

    /// The total this order would reach with `line` added.
    ///
    /// Stock must not be taken for a line until this has succeeded.
    pub(crate) fn total_with(&self, line: &OrderLine) -> Result<Decimal, OrderError> {
        line.checked_line_total()
            .and_then(|line_total| self.total_amount.checked_add(line_total))
            .ok_or_else(|| OrderError::AmountOverflow {
                order_id: self.id.clone(),
                item_id: line.item_id.clone(),
            })
    }

    /// Appends a line whose stock has already been taken. `total` comes from
    /// [`Order::total_with`] for the same line.
    pub(crate) fn push_line(&mut self, line: OrderLine, total: Decimal) {
        self.total_amount = total;
        debug!(
            order_id = %self.id,
            item_id = %line.item_id,
            quantity = %line.quantity,
            total = %self.total_amount,
            "Line added"
        );
        self.lines.push(line);
    }

    /// Returns a read-only snapshot of the order.
    ///
    /// # Errors
    /// [`OrderError::EmptyOrder`] when no line has been added yet.
    pub fn summarize(&self) -> Result<OrderSummary, OrderError> {
        if self.lines.is_empty() {
            return Err(OrderError::EmptyOrder(self.id.clone()));
        }
        Ok(OrderSummary {
            order_id: self.id.clone(),
            customer_name: self.customer_name.clone(),
            created_at: self.created_at,
            lines: self.lines.clone(),
            total_amount: self.total_amount,
        })
    }
}
