//! # Catalog Client
//!
//! Provides a high‑level API for interacting with the catalog actor.
//! It wraps the request channel and exposes stock-specific methods.
use crate::catalog_actor::{CatalogRequest, Response, StockAction, StockActionResult};
use crate::error::CatalogError;
use crate::model::{CatalogItem, CatalogItemCreate, ItemId, Quantity};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Client for interacting with the catalog actor.
///
/// Cloning is cheap: every clone shares the same channel, and the actor stops
/// once the last clone is dropped.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    sender: mpsc::Sender<CatalogRequest>,
}

impl CatalogClient {
    pub fn new(sender: mpsc::Sender<CatalogRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(Response<T>) -> CatalogRequest,
    ) -> Result<T, CatalogError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(build(respond_to)).await.map_err(|_| {
            CatalogError::ActorCommunicationError("catalog actor closed".to_string())
        })?;
        response.await.map_err(|_| {
            CatalogError::ActorCommunicationError("catalog actor dropped the response".to_string())
        })?
    }

    #[instrument(skip(self))]
    pub async fn register(&self, params: CatalogItemCreate) -> Result<ItemId, CatalogError> {
        debug!("Sending request");
        self.request(|respond_to| CatalogRequest::Register { params, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: ItemId) -> Result<Option<CatalogItem>, CatalogError> {
        debug!("Sending request");
        self.request(|respond_to| CatalogRequest::Get { id, respond_to })
            .await
    }

    /// All registered items, ordered by id.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<CatalogItem>, CatalogError> {
        debug!("Sending request");
        self.request(|respond_to| CatalogRequest::List { respond_to })
            .await
    }

    async fn perform_action(
        &self,
        id: ItemId,
        action: StockAction,
    ) -> Result<StockActionResult, CatalogError> {
        self.request(|respond_to| CatalogRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }

    /// Check the current stock level for an item.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ItemId) -> Result<u32, CatalogError> {
        debug!("Checking stock for item {}", id);
        match self.perform_action(id, StockAction::CheckStock).await? {
            StockActionResult::CheckStock(level) => Ok(level),
            other => Err(unexpected_result(&other)),
        }
    }

    /// Take `quantity` units out of an item's stock.
    ///
    /// Returns the item as it stands after the decrement, so callers can price
    /// the line with exactly the values the stock was taken at.
    #[instrument(skip(self))]
    pub async fn decrement_stock(
        &self,
        id: ItemId,
        quantity: Quantity,
    ) -> Result<CatalogItem, CatalogError> {
        debug!("Decrementing {} units of item {}", quantity, id);
        match self
            .perform_action(id, StockAction::DecrementStock(quantity))
            .await?
        {
            StockActionResult::DecrementStock(item) => Ok(item),
            other => Err(unexpected_result(&other)),
        }
    }
}

fn unexpected_result(result: &StockActionResult) -> CatalogError {
    CatalogError::ActorCommunicationError(format!("unexpected action result: {result:?}"))
}
