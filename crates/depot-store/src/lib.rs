//! Generic keyed item repository for Depot.
//!
//! A repository holds items of one variant, keyed by [`ItemId`]. It
//! guarantees at most one item per id, never stores a negative quantity, and
//! reports every violation as a typed [`StoreError`] instead of dropping the
//! request.
//!
//! # Storage Backends
//!
//! All backends implement the [`ItemStore`] trait:
//!
//! - [`InMemoryRepository`] -- `HashMap`-based store, instantiated per variant
//!
//! # Error Kinds
//!
//! 1. `DuplicateItem` -- `add` with an id already present.
//! 2. `ItemNotFound` -- `get_by_id`, `remove`, or `update_quantity` on an absent id.
//! 3. `InvalidQuantity` -- `update_quantity` with a negative value, checked first.
//!
//! The repository never recovers from its own errors; callers decide.
//!
//! [`ItemId`]: depot_types::ItemId

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryRepository;
pub use traits::ItemStore;
