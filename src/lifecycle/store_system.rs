use super::SystemConfig;
use crate::catalog_actor;
use crate::clients::CatalogClient;
use crate::error::LifecycleError;
use crate::order_desk::OrderDesk;
use tracing::{error, info};

/// Runtime orchestrator: one catalog actor plus the desk that places orders
/// against it.
///
/// # Example
///
/// ```rust
/// use storefront::lifecycle::{StoreSystem, SystemConfig};
/// use storefront::model::CatalogItemCreate;
/// use rust_decimal::Decimal;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = StoreSystem::start(SystemConfig::default());
///
///     let id = system
///         .catalog_client
///         .register(CatalogItemCreate {
///             id: "P003".into(),
///             name: "Wireless Mouse".to_string(),
///             unit_price: Decimal::new(2500, 2),
///             stock_quantity: 50,
///         })
///         .await?;
///
///     let mut order = system.order_desk.open_order("Maria");
///     system.order_desk.add_item(&mut order, &id, 2).await?;
///     assert_eq!(order.summarize()?.total_amount, Decimal::new(5000, 2));
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct StoreSystem {
    /// Client for the catalog actor
    pub catalog_client: CatalogClient,

    /// Desk placing orders through `catalog_client`
    pub order_desk: OrderDesk,

    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StoreSystem {
    /// Spawns the catalog actor and wires the order desk to it.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(config: SystemConfig) -> Self {
        let (catalog_actor, catalog_client) = catalog_actor::new(config.channel_capacity);
        let catalog_handle = tokio::spawn(catalog_actor.run());

        let order_desk = OrderDesk::new(catalog_client.clone());
        info!(channel_capacity = config.channel_capacity, "System started");

        Self {
            catalog_client,
            order_desk,
            handles: vec![catalog_handle],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Clones of the catalog client held elsewhere keep the actor alive, so
    /// drop them before calling this.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down system...");

        drop(self.order_desk);
        drop(self.catalog_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
