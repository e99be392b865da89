//! # Catalog Actor
//!
//! The task that owns every registered [`CatalogItem`]. Requests are handled
//! one at a time, so two orders racing for the last unit of an item are
//! serialized here and exactly one of them wins.

use super::actions::{StockAction, StockActionResult};
use super::message::CatalogRequest;
use crate::clients::CatalogClient;
use crate::error::CatalogError;
use crate::model::{CatalogItem, CatalogItemCreate, ItemId};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Server half of the catalog.
///
/// Owns the item store and the receiving end of the request channel. The store
/// needs no lock: only the task running [`CatalogActor::run`] ever touches it.
///
/// # Usage Pattern
///
/// ```rust
/// use storefront::catalog_actor::CatalogActor;
/// use storefront::model::CatalogItemCreate;
/// use rust_decimal::Decimal;
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = CatalogActor::new(8);
///     tokio::spawn(actor.run());
///
///     let id = client
///         .register(CatalogItemCreate {
///             id: "P001".into(),
///             name: "Smart TV".to_string(),
///             unit_price: Decimal::new(75000, 2),
///             stock_quantity: 10,
///         })
///         .await
///         .unwrap();
///     assert_eq!(client.check_stock(id).await.unwrap(), 10);
/// }
/// ```
pub struct CatalogActor {
    receiver: mpsc::Receiver<CatalogRequest>,
    store: HashMap<ItemId, CatalogItem>,
}

impl CatalogActor {
    /// Creates a new `CatalogActor` and its associated [`CatalogClient`].
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the request channel. When it is full,
    ///   client calls wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, CatalogClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
        };
        (actor, CatalogClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    pub async fn run(mut self) {
        info!("Catalog actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CatalogRequest::Register { params, respond_to } => {
                    debug!(?params, "Register");
                    let _ = respond_to.send(self.register(params));
                }
                CatalogRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(%id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                CatalogRequest::List { respond_to } => {
                    let mut items: Vec<CatalogItem> = self.store.values().cloned().collect();
                    items.sort_by(|a, b| a.id().cmp(b.id()));
                    debug!(size = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                CatalogRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(%id, ?action, "Action");
                    let result = self.handle_action(&id, action);
                    match &result {
                        Ok(_) => info!(%id, "Action ok"),
                        Err(e) => warn!(%id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(size = self.store.len(), "Catalog actor shutdown");
    }

    fn register(&mut self, params: CatalogItemCreate) -> Result<ItemId, CatalogError> {
        if self.store.contains_key(&params.id) {
            warn!(id = %params.id, "Duplicate item");
            return Err(CatalogError::DuplicateItem(params.id));
        }
        let item = CatalogItem::from_create(params).inspect_err(|e| {
            warn!(error = %e, "Register failed");
        })?;
        let id = item.id().clone();
        self.store.insert(id.clone(), item);
        info!(%id, size = self.store.len(), "Registered");
        Ok(id)
    }

    fn handle_action(
        &mut self,
        id: &ItemId,
        action: StockAction,
    ) -> Result<StockActionResult, CatalogError> {
        let item = self
            .store
            .get_mut(id)
            .ok_or_else(|| CatalogError::NotFound(id.clone()))?;
        match action {
            StockAction::CheckStock => Ok(StockActionResult::CheckStock(item.stock_quantity())),
            StockAction::DecrementStock(quantity) => {
                item.decrement_stock(quantity)?;
                Ok(StockActionResult::DecrementStock(item.clone()))
            }
        }
    }
}
