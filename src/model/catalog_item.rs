use crate::error::CatalogError;
use crate::model::Quantity;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for catalog items.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Represents a sellable product and its available stock.
///
/// # Catalog Actor
/// In the concurrent host every `CatalogItem` is owned by the
/// [`CatalogActor`](crate::catalog_actor::CatalogActor), which is the only place
/// that calls [`CatalogItem::decrement_stock`] there.
///
/// See [`CatalogItemCreate`] for the registration payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogItem {
    id: ItemId,
    name: String,
    unit_price: Decimal,
    stock_quantity: u32,
}

impl CatalogItem {
    /// Creates a new CatalogItem.
    ///
    /// # Arguments
    /// * `id` - Identifier, unique within a run
    /// * `name` - Display label
    /// * `unit_price` - Price per unit, must not be negative
    /// * `stock_quantity` - Initial stock
    ///
    /// # Errors
    /// [`CatalogError::InvalidPrice`] when `unit_price` is negative.
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        unit_price: Decimal,
        stock_quantity: u32,
    ) -> Result<Self, CatalogError> {
        let id = id.into();
        if unit_price < Decimal::ZERO {
            return Err(CatalogError::InvalidPrice {
                item_id: id,
                price: unit_price,
            });
        }
        Ok(Self {
            id,
            name: name.into(),
            unit_price,
            stock_quantity,
        })
    }

    pub fn from_create(params: CatalogItemCreate) -> Result<Self, CatalogError> {
        Self::new(params.id, params.name, params.unit_price, params.stock_quantity)
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn stock_quantity(&self) -> u32 {
        self.stock_quantity
    }

    /// Takes `quantity` units out of stock.
    ///
    /// This is the only way stock changes. On error nothing is modified.
    ///
    /// # Errors
    /// [`CatalogError::InsufficientStock`] when `quantity` exceeds the current stock.
    pub fn decrement_stock(&mut self, quantity: Quantity) -> Result<(), CatalogError> {
        let requested = quantity.get();
        let remaining = self.stock_quantity.checked_sub(requested).ok_or_else(|| {
            CatalogError::InsufficientStock {
                item_id: self.id.clone(),
                requested,
                available: self.stock_quantity,
            }
        })?;
        self.stock_quantity = remaining;
        Ok(())
    }
}

impl Display for CatalogItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} @ {} (stock: {})",
            self.id, self.name, self.unit_price, self.stock_quantity
        )
    }
}

/// Payload for registering a catalog item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItemCreate {
    pub id: ItemId,
    pub name: String,
    pub unit_price: Decimal,
    pub stock_quantity: u32,
}
