//! # Order Desk
//!
//! Places lines on orders when the catalog lives behind the
//! [`CatalogActor`](crate::catalog_actor::CatalogActor).
//!
//! The desk never touches stock itself. It validates the quantity, prices the
//! line against the item's current catalog entry, asks the actor to take the
//! stock, and only then appends the line. If pricing fails or the actor
//! refuses, the order and the catalog are left as they were.
//!
//! ```rust,ignore
//! let desk = OrderDesk::new(catalog_client);
//! let mut order = desk.open_order("Juan Perez");
//! desk.add_item(&mut order, &ItemId::from("P001"), 1).await?;
//! let summary = order.summarize()?;
//! ```

use crate::clients::CatalogClient;
use crate::error::{CatalogError, OrderError};
use crate::model::{ItemId, Order, OrderId, OrderLine, Quantity};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Coordinates orders against the shared catalog.
#[derive(Debug, Clone)]
pub struct OrderDesk {
    catalog: CatalogClient,
    order_id_counter: Arc<AtomicU64>,
}

impl OrderDesk {
    pub fn new(catalog: CatalogClient) -> Self {
        Self {
            catalog,
            order_id_counter: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Opens an empty order with a generated id (`order_1`, `order_2`, ...).
    ///
    /// Ids are unique across every clone of this desk.
    pub fn open_order(&self, customer_name: impl Into<String>) -> Order {
        let id = self.order_id_counter.fetch_add(1, Ordering::SeqCst);
        let order = Order::new(OrderId(format!("order_{}", id)), customer_name);
        info!(order_id = %order.id(), "Order opened");
        order
    }

    /// Adds `quantity` units of the item `item_id` to `order`.
    ///
    /// # Errors
    /// - [`OrderError::InvalidQuantity`] when `quantity` is not positive; the
    ///   catalog is not contacted.
    /// - [`OrderError::AmountOverflow`] when the line cannot be priced; no
    ///   stock is taken.
    /// - [`OrderError::Catalog`] when the item is unknown, out of stock, or the
    ///   actor is gone. The order is unchanged.
    #[instrument(skip(self, order), fields(order_id = %order.id()))]
    pub async fn add_item(
        &self,
        order: &mut Order,
        item_id: &ItemId,
        quantity: i64,
    ) -> Result<(), OrderError> {
        let quantity = Quantity::try_from(quantity)?;
        let item = self
            .catalog
            .get(item_id.clone())
            .await?
            .ok_or_else(|| CatalogError::NotFound(item_id.clone()))?;
        let line = OrderLine::from_item(&item, quantity);
        let total = order
            .total_with(&line)
            .inspect_err(|e| warn!(error = %e, "Line refused"))?;

        let item = self
            .catalog
            .decrement_stock(item_id.clone(), quantity)
            .await
            .inspect_err(|e| warn!(error = %e, "Stock refused"))?;
        order.push_line(line, total);
        info!(
            total = %order.total_amount(),
            stock_left = item.stock_quantity(),
            "Line placed"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_actor::mock::{create_mock_client, expect_action, expect_get};
    use crate::catalog_actor::{StockAction, StockActionResult};
    use crate::error::InvalidQuantity;
    use crate::model::CatalogItem;
    use rust_decimal::Decimal;

    #[test]
    fn test_generated_ids_are_sequential_across_clones() {
        let (client, _receiver) = create_mock_client(1);
        let desk = OrderDesk::new(client);
        let other = desk.clone();

        assert_eq!(desk.open_order("a").id(), &OrderId::from("order_1"));
        assert_eq!(other.open_order("b").id(), &OrderId::from("order_2"));
        assert_eq!(desk.open_order("c").id(), &OrderId::from("order_3"));
    }

    #[tokio::test]
    async fn test_invalid_quantity_never_reaches_catalog() {
        let (client, mut receiver) = create_mock_client(1);
        let desk = OrderDesk::new(client);
        let mut order = desk.open_order("Juan Perez");

        let err = desk
            .add_item(&mut order, &ItemId::from("P001"), 0)
            .await
            .unwrap_err();

        assert_eq!(err, OrderError::InvalidQuantity(InvalidQuantity(0)));
        assert!(order.is_empty());
        assert!(receiver.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_line_is_priced_from_catalog_entry() {
        let (client, mut receiver) = create_mock_client(1);
        let desk = OrderDesk::new(client);

        let task = tokio::spawn(async move {
            let mut order = desk.open_order("Juan Perez");
            let result = desk.add_item(&mut order, &ItemId::from("P003"), 3).await;
            result.map(|()| order)
        });

        let (id, responder) = expect_get(&mut receiver).await.unwrap();
        assert_eq!(id, ItemId::from("P003"));
        let before = CatalogItem::new("P003", "Wireless Mouse", Decimal::new(2500, 2), 50).unwrap();
        responder.send(Ok(Some(before))).unwrap();

        let (id, action, responder) = expect_action(&mut receiver).await.unwrap();
        assert_eq!(id, ItemId::from("P003"));
        assert!(matches!(action, StockAction::DecrementStock(q) if q.get() == 3));
        let after = CatalogItem::new("P003", "Wireless Mouse", Decimal::new(2500, 2), 47).unwrap();
        responder
            .send(Ok(StockActionResult::DecrementStock(after)))
            .unwrap();

        let order = task.await.unwrap().unwrap();
        assert_eq!(order.lines().len(), 1);
        assert_eq!(order.lines()[0].item_name, "Wireless Mouse");
        assert_eq!(order.total_amount(), Decimal::new(7500, 2));
    }

    #[tokio::test]
    async fn test_refused_stock_leaves_order_unchanged() {
        let (client, mut receiver) = create_mock_client(1);
        let desk = OrderDesk::new(client);

        let task = tokio::spawn(async move {
            let mut order = desk.open_order("Juan Perez");
            let result = desk.add_item(&mut order, &ItemId::from("P002"), 9).await;
            (order, result)
        });

        let (_, responder) = expect_get(&mut receiver).await.unwrap();
        let laptop = CatalogItem::new("P002", "Gaming Laptop", Decimal::new(1200, 0), 5).unwrap();
        responder.send(Ok(Some(laptop))).unwrap();

        let (_, _, responder) = expect_action(&mut receiver).await.unwrap();
        responder
            .send(Err(CatalogError::InsufficientStock {
                item_id: ItemId::from("P002"),
                requested: 9,
                available: 5,
            }))
            .unwrap();

        let (order, result) = task.await.unwrap();
        assert!(matches!(
            result,
            Err(OrderError::Catalog(CatalogError::InsufficientStock { .. }))
        ));
        assert!(order.is_empty());
        assert_eq!(order.total_amount(), Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_unknown_item_never_reaches_stock() {
        let (client, mut receiver) = create_mock_client(1);
        let desk = OrderDesk::new(client);

        let task = tokio::spawn(async move {
            let mut order = desk.open_order("Juan Perez");
            let result = desk.add_item(&mut order, &ItemId::from("P404"), 1).await;
            (order, result)
        });

        let (id, responder) = expect_get(&mut receiver).await.unwrap();
        assert_eq!(id, ItemId::from("P404"));
        responder.send(Ok(None)).unwrap();

        let (order, result) = task.await.unwrap();
        assert_eq!(
            result,
            Err(OrderError::Catalog(CatalogError::NotFound(ItemId::from("P404"))))
        );
        assert!(order.is_empty());
        assert!(receiver.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_overflowing_price_never_reaches_stock() {
        let (client, mut receiver) = create_mock_client(1);
        let desk = OrderDesk::new(client);

        let task = tokio::spawn(async move {
            let mut order = desk.open_order("Big Spender");
            let result = desk.add_item(&mut order, &ItemId::from("P900"), 2).await;
            (order, result)
        });

        let (_, responder) = expect_get(&mut receiver).await.unwrap();
        let vault = CatalogItem::new("P900", "Vault", Decimal::MAX, 10).unwrap();
        responder.send(Ok(Some(vault))).unwrap();

        let (order, result) = task.await.unwrap();
        assert!(matches!(result, Err(OrderError::AmountOverflow { .. })));
        assert!(order.is_empty());
        assert!(receiver.recv().await.is_none());
    }
}
