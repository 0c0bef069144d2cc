use depot_types::{InventoryItem, ItemId, Quantity};

use crate::error::StoreResult;

/// Keyed, duplicate-free store for one item variant.
///
/// All implementations must satisfy these invariants:
/// - At most one item per [`ItemId`] at any time.
/// - Stored quantities are never negative.
/// - No insertion or removal is silently dropped: every violation is
///   returned as a [`StoreError`](crate::StoreError).
/// - Items leave the store only as owned copies. Mutating a returned item
///   does not change the store; [`update_quantity`](ItemStore::update_quantity)
///   is the only way to change a stored quantity.
pub trait ItemStore<T: InventoryItem>: Send + Sync {
    /// Insert a fully constructed item.
    ///
    /// Fails with `DuplicateItem` if the id is already present, leaving the
    /// stored item untouched.
    fn add(&self, item: T) -> StoreResult<()>;

    /// Return a copy of the item stored under `id`.
    ///
    /// Fails with `ItemNotFound` if absent.
    fn get_by_id(&self, id: ItemId) -> StoreResult<T>;

    /// Delete the item stored under `id` and return it.
    ///
    /// Fails with `ItemNotFound` if absent. The id may be reused afterwards.
    fn remove(&self, id: ItemId) -> StoreResult<T>;

    /// Snapshot of every stored item, ordered by id.
    fn list_all(&self) -> Vec<T>;

    /// Replace the quantity of the item stored under `id`.
    ///
    /// A negative `new_quantity` fails with `InvalidQuantity` whether or not
    /// `id` exists. Otherwise a missing id fails with `ItemNotFound`.
    fn update_quantity(&self, id: ItemId, new_quantity: Quantity) -> StoreResult<()>;

    /// Returns `true` if an item is stored under `id`.
    fn contains(&self, id: ItemId) -> bool {
        self.get_by_id(id).is_ok()
    }

    /// Number of stored items.
    fn len(&self) -> usize {
        self.list_all().len()
    }

    /// Returns `true` if nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Items matching `predicate`, ordered by id.
    ///
    /// This is a linear scan over a snapshot, not an index.
    fn find<P>(&self, predicate: P) -> Vec<T>
    where
        Self: Sized,
        P: Fn(&T) -> bool,
    {
        self.list_all().into_iter().filter(|item| predicate(item)).collect()
    }

    /// Add items in order, stopping at the first failure.
    ///
    /// Returns the number of items inserted. Items added before a failure
    /// stay in the store.
    fn extend<I>(&self, items: I) -> StoreResult<usize>
    where
        Self: Sized,
        I: IntoIterator<Item = T>,
    {
        let mut added = 0;
        for item in items {
            self.add(item)?;
            added += 1;
        }
        Ok(added)
    }
}
