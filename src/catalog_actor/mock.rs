//! # Mock Catalog
//!
//! A [`CatalogClient`] whose requests land in a receiver held by the test
//! instead of a running actor. The test plays the actor: it pulls the next
//! request, inspects it, and answers through the responder.
//!
//! ```rust
//! use storefront::catalog_actor::mock::{create_mock_client, expect_action};
//! use storefront::catalog_actor::{StockAction, StockActionResult};
//!
//! #[tokio::main]
//! async fn main() {
//!     let (client, mut receiver) = create_mock_client(4);
//!     let task = tokio::spawn(async move { client.check_stock("P001".into()).await });
//!
//!     let (id, action, responder) = expect_action(&mut receiver).await.unwrap();
//!     assert_eq!(id.to_string(), "P001");
//!     assert!(matches!(action, StockAction::CheckStock));
//!     responder.send(Ok(StockActionResult::CheckStock(7))).unwrap();
//!
//!     assert_eq!(task.await.unwrap().unwrap(), 7);
//! }
//! ```

use super::actions::{StockAction, StockActionResult};
use super::message::{CatalogRequest, Response};
use crate::clients::CatalogClient;
use crate::model::{CatalogItem, CatalogItemCreate, ItemId};
use tokio::sync::mpsc;

/// Creates a client wired to a bare receiver.
pub fn create_mock_client(buffer_size: usize) -> (CatalogClient, mpsc::Receiver<CatalogRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CatalogClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Register request
pub async fn expect_register(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(CatalogItemCreate, Response<ItemId>)> {
    match receiver.recv().await {
        Some(CatalogRequest::Register { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(ItemId, Response<Option<CatalogItem>>)> {
    match receiver.recv().await {
        Some(CatalogRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(ItemId, StockAction, Response<StockActionResult>)> {
    match receiver.recv().await {
        Some(CatalogRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
