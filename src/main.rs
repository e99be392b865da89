//! # Storefront demo
//!
//! Walks through a small store session:
//! 1. Start the [`StoreSystem`] and register three catalog items.
//! 2. Place an order for a known customer and print its summary.
//! 3. Read a customer name from stdin and place a second order for it.
//!
//! The name from stdin is printed back verbatim inside the summary; it is data,
//! never part of any query text.

use rust_decimal::Decimal;
use std::io::Write;
use storefront::input::read_customer_name;
use storefront::lifecycle::{setup_tracing, StoreSystem, SystemConfig};
use storefront::model::{CatalogItemCreate, ItemId};
use tokio::io::BufReader;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = SystemConfig::from_env().map_err(|e| e.to_string())?;
    let system = StoreSystem::start(config);

    let catalog = [
        ("P001", "Smart TV", Decimal::new(75000, 2), 10),
        ("P002", "Gaming Laptop", Decimal::new(120000, 2), 5),
        ("P003", "Wireless Mouse", Decimal::new(2500, 2), 50),
    ];
    for (id, name, unit_price, stock_quantity) in catalog {
        system
            .catalog_client
            .register(CatalogItemCreate {
                id: ItemId::from(id),
                name: name.to_string(),
                unit_price,
                stock_quantity,
            })
            .await
            .map_err(|e| e.to_string())?;
    }
    print_stock(&system, "Initial stock").await?;

    let tv = ItemId::from("P001");
    let laptop = ItemId::from("P002");
    let mouse = ItemId::from("P003");

    let span = tracing::info_span!("first_order");
    async {
        let mut order = system.order_desk.open_order("Juan Perez");
        for (item, quantity) in [(&tv, 1), (&laptop, 1), (&mouse, 3)] {
            if let Err(e) = system.order_desk.add_item(&mut order, item, quantity).await {
                error!(error = %e, "Line rejected");
            }
        }
        match order.summarize() {
            Ok(summary) => println!("\n{summary}"),
            Err(e) => error!(error = %e, "Nothing to summarize"),
        }
    }
    .instrument(span)
    .await;

    print_stock(&system, "Stock after first order").await?;

    print!("\nCustomer name for a new order: ");
    std::io::stdout().flush().map_err(|e| e.to_string())?;
    let mut stdin = BufReader::new(tokio::io::stdin());
    match read_customer_name(&mut stdin).await.map_err(|e| e.to_string())? {
        Some(customer_name) => {
            let span = tracing::info_span!("second_order");
            async {
                let mut order = system.order_desk.open_order(customer_name);
                match system.order_desk.add_item(&mut order, &mouse, 1).await {
                    Ok(()) => match order.summarize() {
                        Ok(summary) => println!("\n{summary}"),
                        Err(e) => error!(error = %e, "Nothing to summarize"),
                    },
                    Err(e) => error!(error = %e, "Line rejected"),
                }
            }
            .instrument(span)
            .await;
        }
        None => info!("No input, skipping second order"),
    }

    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Application completed successfully");
    Ok(())
}

async fn print_stock(system: &StoreSystem, heading: &str) -> Result<(), String> {
    let items = system
        .catalog_client
        .list()
        .await
        .map_err(|e| e.to_string())?;
    println!("\n{heading}:");
    for item in items {
        println!("  {item}");
    }
    Ok(())
}
