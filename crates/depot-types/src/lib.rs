//! Entity model for Depot.
//!
//! This crate defines what can be stored in a Depot repository: the
//! [`InventoryItem`] identity capability, the two concrete variants, and the
//! tagged [`ItemRecord`] used when a mixed list of items crosses the
//! persistence boundary. Every other Depot crate depends on `depot-types`.
//!
//! # Key Types
//!
//! - [`ItemId`] — Caller-assigned integer identity
//! - [`InventoryItem`] — Identity capability: id, name, quantity
//! - [`ElectronicItem`] — Durable good with brand and warranty
//! - [`GroceryItem`] — Perishable good with an expiry timestamp
//! - [`ItemRecord`] / [`ItemKind`] — Variant-tagged form for serialization

pub mod error;
pub mod identity;
pub mod item;
pub mod record;

pub use error::TypeError;
pub use identity::{InventoryItem, ItemId, Quantity};
pub use item::{ElectronicItem, GroceryItem};
pub use record::{ItemKind, ItemRecord};
