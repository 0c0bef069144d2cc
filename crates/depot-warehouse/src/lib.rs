//! Warehouse orchestration for Depot.
//!
//! [`WarehouseManager`] owns one [`InMemoryRepository`](depot_store::InMemoryRepository)
//! per item variant and exposes bulk operations that work on any
//! [`ItemStore`](depot_store::ItemStore) through the identity capability
//! alone. It is the recovery boundary for store errors: bulk operations
//! report failures and carry on.
//!
//! # Modules
//!
//! - [`manager`] — The [`WarehouseManager`] itself
//! - [`render`] — One-line item rendering and [`Presenter`] sinks
//! - [`config`] — [`WarehouseConfig`]
//! - [`error`] — Errors for operations that do propagate (snapshot I/O)

pub mod config;
pub mod error;
pub mod manager;
pub mod render;

pub use config::WarehouseConfig;
pub use error::{WarehouseError, WarehouseResult};
pub use manager::WarehouseManager;
pub use render::{
    render_error, BufferedPresenter, Presenter, Render, StdoutPresenter, EMPTY_LISTING,
};
