use std::fmt;

use serde::{Deserialize, Serialize};

/// Stock count of an item.
///
/// Signed so that a rejected negative request can be expressed by callers.
/// Quantities held by a repository are never negative.
pub type Quantity = i64;

/// Caller-assigned integer identity of an inventory item.
///
/// Identifiers are chosen by whoever constructs the item; repositories never
/// generate them. Any `i32` is accepted, negative values included. Two
/// items with the same `ItemId` cannot live in the same repository at the
/// same time.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i32);

impl ItemId {
    /// Wrap a raw identifier.
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// The raw integer value.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Debug for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemId({})", self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ItemId {
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}

/// The identity capability every storable item provides.
///
/// A type implementing `InventoryItem` exposes an immutable id, a display
/// name, and a quantity. Repositories store owned values and hand out
/// clones, so calling [`set_quantity`](InventoryItem::set_quantity) on a
/// value obtained from a repository never changes what the repository holds.
pub trait InventoryItem: Clone + Send + Sync + 'static {
    /// The item's identity.
    fn id(&self) -> ItemId;

    /// Human-readable item name.
    fn name(&self) -> &str;

    /// Current stock count.
    fn quantity(&self) -> Quantity;

    /// Overwrite the stock count. Callers are expected to have validated
    /// `quantity >= 0`.
    fn set_quantity(&mut self, quantity: Quantity);
}
