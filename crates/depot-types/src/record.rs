//! Tagged records used at the persistence boundary.
//!
//! A repository is monomorphic, so a serialized item list mixing variants
//! needs an explicit discriminant. [`ItemRecord`] carries it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::identity::{InventoryItem, ItemId, Quantity};
use crate::item::{ElectronicItem, GroceryItem};

/// Which concrete variant a record holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Electronic,
    Grocery,
}

impl ItemKind {
    /// All kinds, in display order.
    pub const ALL: [ItemKind; 2] = [ItemKind::Electronic, ItemKind::Grocery];

    /// Lower-case name used in serialized records and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Electronic => "electronic",
            ItemKind::Grocery => "grocery",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "electronic" | "electronics" => Ok(ItemKind::Electronic),
            "grocery" | "groceries" => Ok(ItemKind::Grocery),
            _ => Err(TypeError::UnknownKind(s.to_string())),
        }
    }
}

/// An item of any variant, tagged with its kind.
///
/// Serialized externally tagged (`{"electronic": {...}}`), which round-trips
/// through both self-describing and compact binary formats.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemRecord {
    Electronic(ElectronicItem),
    Grocery(GroceryItem),
}

impl ItemRecord {
    /// The variant discriminant.
    pub fn kind(&self) -> ItemKind {
        match self {
            ItemRecord::Electronic(_) => ItemKind::Electronic,
            ItemRecord::Grocery(_) => ItemKind::Grocery,
        }
    }

    /// Identity of the wrapped item.
    pub fn id(&self) -> ItemId {
        match self {
            ItemRecord::Electronic(item) => item.id(),
            ItemRecord::Grocery(item) => item.id(),
        }
    }

    /// Name of the wrapped item.
    pub fn name(&self) -> &str {
        match self {
            ItemRecord::Electronic(item) => item.name(),
            ItemRecord::Grocery(item) => item.name(),
        }
    }

    /// Quantity of the wrapped item.
    pub fn quantity(&self) -> Quantity {
        match self {
            ItemRecord::Electronic(item) => item.quantity(),
            ItemRecord::Grocery(item) => item.quantity(),
        }
    }
}

impl From<ElectronicItem> for ItemRecord {
    fn from(item: ElectronicItem) -> Self {
        ItemRecord::Electronic(item)
    }
}

impl From<GroceryItem> for ItemRecord {
    fn from(item: GroceryItem) -> Self {
        ItemRecord::Grocery(item)
    }
}
