//! The two concrete inventory variants.
//!
//! Both share the [`InventoryItem`] capability and differ only in their extra
//! attributes. Everything except the quantity is fixed at construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identity::{InventoryItem, ItemId, Quantity};

/// A durable good carrying a brand and a warranty period.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectronicItem {
    id: ItemId,
    name: String,
    quantity: Quantity,
    brand: String,
    warranty_months: u32,
}

impl ElectronicItem {
    /// Create a new electronic item.
    ///
    /// `quantity` must be non-negative.
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        quantity: Quantity,
        brand: impl Into<String>,
        warranty_months: u32,
    ) -> Self {
        debug_assert!(quantity >= 0, "initial quantity must be non-negative");
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            brand: brand.into(),
            warranty_months,
        }
    }

    /// Manufacturer brand.
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Warranty duration in months.
    pub fn warranty_months(&self) -> u32 {
        self.warranty_months
    }
}

impl InventoryItem for ElectronicItem {
    fn id(&self) -> ItemId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn quantity(&self) -> Quantity {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }
}

/// A perishable good with an expiry timestamp.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    id: ItemId,
    name: String,
    quantity: Quantity,
    expires_at: DateTime<Utc>,
}

impl GroceryItem {
    /// Create a new grocery item.
    ///
    /// `quantity` must be non-negative.
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        quantity: Quantity,
        expires_at: DateTime<Utc>,
    ) -> Self {
        debug_assert!(quantity >= 0, "initial quantity must be non-negative");
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            expires_at,
        }
    }

    /// When the item expires.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Returns `true` if the item has expired at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

impl InventoryItem for GroceryItem {
    fn id(&self) -> ItemId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn quantity(&self) -> Quantity {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }
}
