//! Pure domain types: catalog items, quantities, orders and their summaries.
//!
//! Nothing in here is async or shared. The concurrent host lives in
//! [`catalog_actor`](crate::catalog_actor) and [`order_desk`](crate::order_desk).

pub mod catalog_item;
pub mod order;
pub mod quantity;
pub mod summary;

pub use catalog_item::*;
pub use order::*;
pub use quantity::*;
pub use summary::*;
