use rust_decimal::Decimal;
use storefront::catalog_actor;
use storefront::error::{CatalogError, OrderError};
use storefront::lifecycle::{StoreSystem, SystemConfig};
use storefront::model::{CatalogItemCreate, ItemId};
use storefront::order_desk::OrderDesk;

async fn register(system: &StoreSystem, id: &str, name: &str, price: Decimal, stock: u32) -> ItemId {
    system
        .catalog_client
        .register(CatalogItemCreate {
            id: ItemId::from(id),
            name: name.to_string(),
            unit_price: price,
            stock_quantity: stock,
        })
        .await
        .expect("Failed to register item")
}

/// Full end-to-end test with the real catalog actor.
#[tokio::test]
async fn test_full_store_system_integration() {
    let system = StoreSystem::start(SystemConfig::default());

    let tv = register(&system, "P001", "Smart TV", Decimal::new(75000, 2), 10).await;
    let laptop = register(&system, "P002", "Gaming Laptop", Decimal::new(120000, 2), 5).await;
    let mouse = register(&system, "P003", "Wireless Mouse", Decimal::new(2500, 2), 50).await;

    let mut order = system.order_desk.open_order("Juan Perez");
    system.order_desk.add_item(&mut order, &tv, 1).await.unwrap();
    system.order_desk.add_item(&mut order, &laptop, 1).await.unwrap();
    system.order_desk.add_item(&mut order, &mouse, 3).await.unwrap();

    let summary = order.summarize().expect("Order has lines");
    assert_eq!(summary.customer_name, "Juan Perez");
    assert_eq!(summary.lines.len(), 3);
    assert_eq!(summary.total_amount, Decimal::new(202500, 2));

    assert_eq!(system.catalog_client.check_stock(tv).await.unwrap(), 9);
    assert_eq!(system.catalog_client.check_stock(laptop).await.unwrap(), 4);
    assert_eq!(system.catalog_client.check_stock(mouse).await.unwrap(), 47);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_stock_runs_out_through_the_desk() {
    let system = StoreSystem::start(SystemConfig::default());
    let tv = register(&system, "P001", "Smart TV", Decimal::new(750, 0), 10).await;

    let mut order = system.order_desk.open_order("Juan Perez");
    system.order_desk.add_item(&mut order, &tv, 1).await.unwrap();
    assert_eq!(system.catalog_client.check_stock(tv.clone()).await.unwrap(), 9);
    system.order_desk.add_item(&mut order, &tv, 9).await.unwrap();
    assert_eq!(system.catalog_client.check_stock(tv.clone()).await.unwrap(), 0);

    let err = system.order_desk.add_item(&mut order, &tv, 1).await.unwrap_err();
    assert_eq!(
        err,
        OrderError::Catalog(CatalogError::InsufficientStock {
            item_id: tv.clone(),
            requested: 1,
            available: 0,
        })
    );
    assert_eq!(system.catalog_client.check_stock(tv).await.unwrap(), 0);
    assert_eq!(order.lines().len(), 2);
    assert_eq!(order.total_amount(), Decimal::new(7500, 0));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_item_is_reported() {
    let system = StoreSystem::start(SystemConfig::default());

    let mut order = system.order_desk.open_order("Juan Perez");
    let err = system
        .order_desk
        .add_item(&mut order, &ItemId::from("P404"), 1)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        OrderError::Catalog(CatalogError::NotFound(ItemId::from("P404")))
    );
    assert!(matches!(order.summarize(), Err(OrderError::EmptyOrder(_))));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_hostile_customer_name_survives_round_trip() {
    let system = StoreSystem::start(SystemConfig { channel_capacity: 4 });
    let mouse = register(&system, "P003", "Wireless Mouse", Decimal::new(2500, 2), 50).await;

    let mut order = system.order_desk.open_order("' OR 1=1-- '");
    system.order_desk.add_item(&mut order, &mouse, 1).await.unwrap();

    let summary = order.summarize().unwrap();
    assert_eq!(summary.customer_name, "' OR 1=1-- '");
    assert!(summary.to_string().contains("for ' OR 1=1-- '"));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_desk_reports_stopped_actor() {
    let (actor, client) = catalog_actor::new(4);
    let handle = tokio::spawn(actor.run());
    let desk = OrderDesk::new(client);

    handle.abort();
    assert!(handle.await.unwrap_err().is_cancelled());

    let mut order = desk.open_order("Late Customer");
    let err = desk
        .add_item(&mut order, &ItemId::from("P003"), 1)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        OrderError::Catalog(CatalogError::ActorCommunicationError(_))
    ));
    assert!(order.is_empty());
}

#[tokio::test]
async fn test_overflowing_order_keeps_catalog_stock() {
    let system = StoreSystem::start(SystemConfig::default());
    let vault = register(&system, "P900", "Vault", Decimal::MAX, 10).await;

    let mut order = system.order_desk.open_order("Big Spender");
    let err = system
        .order_desk
        .add_item(&mut order, &vault, 2)
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::AmountOverflow { .. }));
    assert_eq!(system.catalog_client.check_stock(vault.clone()).await.unwrap(), 10);

    system.order_desk.add_item(&mut order, &vault, 1).await.unwrap();
    let err = system
        .order_desk
        .add_item(&mut order, &vault, 1)
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::AmountOverflow { .. }));
    assert_eq!(system.catalog_client.check_stock(vault).await.unwrap(), 9);
    assert_eq!(order.lines().len(), 1);
    assert_eq!(order.total_amount(), Decimal::MAX);

    system.shutdown().await.unwrap();
}
