//! In-memory item repository.
//!
//! [`InMemoryRepository`] stores items in a `HashMap` protected by a
//! `RwLock`. Each operation holds the lock for its whole duration, so single
//! operations are atomic with respect to each other. Sequences of operations
//! are not.

use std::collections::HashMap;
use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use depot_types::{InventoryItem, ItemId, Quantity};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::traits::ItemStore;

/// An in-memory implementation of [`ItemStore`], generic over the item type.
///
/// Instantiate once per variant (`InMemoryRepository<ElectronicItem>`,
/// `InMemoryRepository<GroceryItem>`). Data is lost when the repository is
/// dropped.
pub struct InMemoryRepository<T> {
    items: RwLock<HashMap<ItemId, T>>,
}

impl<T: InventoryItem> InMemoryRepository<T> {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
        }
    }

    // Poisoning is ignored: every write is a single insert, remove, or field store.
    fn read_items(&self) -> RwLockReadGuard<'_, HashMap<ItemId, T>> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_items(&self) -> RwLockWriteGuard<'_, HashMap<ItemId, T>> {
        self.items.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: InventoryItem> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: InventoryItem> ItemStore<T> for InMemoryRepository<T> {
    fn add(&self, item: T) -> StoreResult<()> {
        let id = item.id();
        let mut items = self.write_items();
        if items.contains_key(&id) {
            return Err(StoreError::DuplicateItem { id });
        }
        items.insert(id, item);
        debug!(%id, "item added");
        Ok(())
    }

    fn get_by_id(&self, id: ItemId) -> StoreResult<T> {
        self.read_items()
            .get(&id)
            .cloned()
            .ok_or(StoreError::ItemNotFound { id })
    }

    fn remove(&self, id: ItemId) -> StoreResult<T> {
        let removed = self
            .write_items()
            .remove(&id)
            .ok_or(StoreError::ItemNotFound { id })?;
        debug!(%id, "item removed");
        Ok(removed)
    }

    fn list_all(&self) -> Vec<T> {
        let mut all: Vec<T> = self.read_items().values().cloned().collect();
        all.sort_by_key(|item| item.id());
        all
    }

    fn update_quantity(&self, id: ItemId, new_quantity: Quantity) -> StoreResult<()> {
        if new_quantity < 0 {
            return Err(StoreError::InvalidQuantity {
                quantity: new_quantity,
            });
        }
        let mut items = self.write_items();
        let item = items
            .get_mut(&id)
            .ok_or(StoreError::ItemNotFound { id })?;
        item.set_quantity(new_quantity);
        debug!(%id, quantity = new_quantity, "quantity updated");
        Ok(())
    }

    fn contains(&self, id: ItemId) -> bool {
        self.read_items().contains_key(&id)
    }

    fn len(&self) -> usize {
        self.read_items().len()
    }
}

impl<T> fmt::Debug for InMemoryRepository<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self
            .items
            .read()
            .map(|items| items.len())
            .unwrap_or_else(|e| e.into_inner().len());
        f.debug_struct("InMemoryRepository")
            .field("item_count", &count)
            .finish()
    }
}
