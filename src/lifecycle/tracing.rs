//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for the binary.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: catalog actor startup and shutdown with store size
//! - **Catalog Operations**: Register, Get, List and stock Actions
//! - **Order Flow**: orders opened, lines placed, stock refusals
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show full payloads with debug logs
//! RUST_LOG=debug cargo run
//!
//! # Only the catalog actor
//! RUST_LOG=storefront::catalog_actor=debug cargo run
//! ```
//!
//! **With `RUST_LOG=info`** a single order looks like:
//!
//! ```text
//! INFO Catalog actor started
//! INFO Registered id=P001 size=1
//! INFO Order opened order_id=order_1
//! INFO add_item{order_id=order_1 item_id=ItemId("P001") quantity=1}: Action ok id=P001
//! INFO add_item{order_id=order_1 item_id=ItemId("P001") quantity=1}: Line placed total=750.00
//! INFO Catalog actor shutdown size=1
//! ```

/// Initializes the tracing/logging infrastructure.
///
/// Filtering comes from `RUST_LOG`. Targets are hidden and spans are shown
/// inline to keep lines short. Call once, from the binary.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
