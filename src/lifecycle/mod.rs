//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the runtime pieces around the domain core.
//!
//! **Key Responsibilities:**
//! 1. **Configuration** - [`SystemConfig`], defaults overridable from the environment
//! 2. **Actor Creation** - spawn the catalog actor with the configured channel size
//! 3. **Wiring** - hand the catalog client to the [`OrderDesk`](crate::order_desk::OrderDesk)
//! 4. **Graceful Shutdown** - drop every client, then await the actor task
//! 5. **Observability Setup** - [`setup_tracing`]
//!
//! ## Graceful Shutdown
//!
//! Dropping the last [`CatalogClient`](crate::clients::CatalogClient) closes the
//! channel; the actor's `recv()` returns `None`, it logs its final size and
//! exits. [`StoreSystem::shutdown`] then awaits the task so a panic inside the
//! actor surfaces as a [`LifecycleError`](crate::error::LifecycleError).

pub mod config;
pub mod store_system;
pub mod tracing;

pub use config::*;
pub use store_system::*;
pub use self::tracing::setup_tracing;
