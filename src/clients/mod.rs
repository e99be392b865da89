//! Type-safe wrappers around the catalog actor's request channel.

pub mod catalog_client;

pub use catalog_client::*;
