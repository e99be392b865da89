//! Messages exchanged between [`CatalogClient`](crate::clients::CatalogClient)
//! and [`CatalogActor`](super::CatalogActor).

use super::actions::{StockAction, StockActionResult};
use crate::error::CatalogError;
use crate::model::{CatalogItem, CatalogItemCreate, ItemId};
use tokio::sync::oneshot;

/// One-shot response channel used by the catalog actor.
pub type Response<T> = oneshot::Sender<Result<T, CatalogError>>;

#[derive(Debug)]
pub enum CatalogRequest {
    Register {
        params: CatalogItemCreate,
        respond_to: Response<ItemId>,
    },
    Get {
        id: ItemId,
        respond_to: Response<Option<CatalogItem>>,
    },
    List {
        respond_to: Response<Vec<CatalogItem>>,
    },
    Action {
        id: ItemId,
        action: StockAction,
        respond_to: Response<StockActionResult>,
    },
}
