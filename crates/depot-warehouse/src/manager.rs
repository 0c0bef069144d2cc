use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use depot_codec::{load_from_file, save_to_file, Format};
use depot_store::{InMemoryRepository, ItemStore, StoreError, StoreResult};
use depot_types::{ElectronicItem, GroceryItem, InventoryItem, ItemId, ItemRecord, Quantity};
use tracing::{debug, info, warn};

use crate::config::WarehouseConfig;
use crate::error::{WarehouseError, WarehouseResult};
use crate::render::{render_error, Presenter, Render, StdoutPresenter, EMPTY_LISTING};

/// Owns one repository per item variant and runs bulk operations over them.
///
/// The bulk operations (`print_all`, `increase_stock`, `remove_by_id`) take
/// any [`ItemStore`] and only rely on the [`InventoryItem`] capability. They
/// are best-effort: store failures are reported through the presenter and
/// logged, never returned.
pub struct WarehouseManager {
    config: WarehouseConfig,
    electronics: InMemoryRepository<ElectronicItem>,
    groceries: InMemoryRepository<GroceryItem>,
    presenter: Box<dyn Presenter>,
}

impl WarehouseManager {
    /// Create an empty manager that prints to standard output.
    pub fn new() -> Self {
        Self::with_config(WarehouseConfig::default())
    }

    /// Create an empty manager with the given configuration.
    pub fn with_config(config: WarehouseConfig) -> Self {
        Self {
            config,
            electronics: InMemoryRepository::new(),
            groceries: InMemoryRepository::new(),
            presenter: Box::new(StdoutPresenter),
        }
    }

    /// Replace where rendered lines are sent.
    pub fn with_presenter(mut self, presenter: impl Presenter + 'static) -> Self {
        self.presenter = Box::new(presenter);
        self
    }

    pub fn config(&self) -> &WarehouseConfig {
        &self.config
    }

    pub fn electronics(&self) -> &InMemoryRepository<ElectronicItem> {
        &self.electronics
    }

    pub fn groceries(&self) -> &InMemoryRepository<GroceryItem> {
        &self.groceries
    }

    /// Populate both repositories with the fixed demonstration set.
    ///
    /// Grocery expiry dates are relative to the configured clock. Seeding a
    /// manager that already holds any of these ids fails with `DuplicateItem`.
    pub fn seed_sample_data(&self) -> StoreResult<()> {
        let now = self.config.now();

        self.electronics.extend([
            ElectronicItem::new(1, "Laptop", 10, "Dell", 24),
            ElectronicItem::new(2, "Smartphone", 25, "Samsung", 12),
            ElectronicItem::new(3, "Headphones", 50, "Sony", 6),
        ])?;

        self.groceries.extend([
            GroceryItem::new(1, "Milk", 20, now + Duration::days(10)),
            GroceryItem::new(2, "Bread", 15, now + Duration::days(3)),
            GroceryItem::new(3, "Apples", 30, now + Duration::days(7)),
        ])?;

        info!(
            electronics = self.electronics.len(),
            groceries = self.groceries.len(),
            "sample data seeded"
        );
        Ok(())
    }

    /// Render every item in `repo`, one line each.
    ///
    /// An empty repository renders as a single [`EMPTY_LISTING`] line.
    pub fn render_all<T, S>(&self, repo: &S) -> Vec<String>
    where
        T: InventoryItem + Render,
        S: ItemStore<T>,
    {
        let items = repo.list_all();
        if items.is_empty() {
            return vec![EMPTY_LISTING.to_string()];
        }
        items.iter().map(Render::render).collect()
    }

    /// Send every rendered line of `repo` to the presenter.
    pub fn print_all<T, S>(&self, repo: &S)
    where
        T: InventoryItem + Render,
        S: ItemStore<T>,
    {
        for line in self.render_all(repo) {
            self.presenter.line(&line);
        }
    }

    /// Add `delta` to the stock of item `id`.
    ///
    /// Returns the new quantity, or `None` if the update was rejected.
    /// `delta` may be negative; the store's non-negativity check on the
    /// resulting total bounds it. A total outside the `Quantity` range is
    /// rejected as [`WarehouseError::QuantityOverflow`].
    pub fn increase_stock<T, S>(&self, repo: &S, id: ItemId, delta: Quantity) -> Option<Quantity>
    where
        T: InventoryItem,
        S: ItemStore<T>,
    {
        let result = repo
            .get_by_id(id)
            .map_err(WarehouseError::from)
            .and_then(|item| {
                let quantity = item.quantity();
                let total = quantity
                    .checked_add(delta)
                    .ok_or(WarehouseError::QuantityOverflow { id, quantity, delta })?;
                repo.update_quantity(id, total)?;
                Ok((item, total))
            });

        match result {
            Ok((item, total)) => {
                debug!(%id, delta, total, "stock increased");
                self.presenter.line(&format!(
                    "Stock updated for item {}. New quantity: {total}",
                    item.name()
                ));
                Some(total)
            }
            Err(e) => {
                warn!(%id, delta, error = %e, "stock update failed");
                self.presenter.line(&render_error(&e));
                None
            }
        }
    }

    /// Remove item `id` from `repo`.
    ///
    /// Returns `true` if it was removed. A missing id is reported and
    /// swallowed.
    pub fn remove_by_id<T, S>(&self, repo: &S, id: ItemId) -> bool
    where
        T: InventoryItem,
        S: ItemStore<T>,
    {
        match repo.remove(id) {
            Ok(_) => {
                self.presenter
                    .line(&format!("Item with ID {id} removed successfully."));
                true
            }
            Err(e) => {
                warn!(%id, error = %e, "remove failed");
                self.presenter.line(&render_error(&e));
                false
            }
        }
    }

    /// Items in `repo` at or below the configured low-stock threshold.
    pub fn low_stock<T, S>(&self, repo: &S) -> Vec<T>
    where
        T: InventoryItem,
        S: ItemStore<T>,
    {
        let threshold = self.config.low_stock_threshold;
        repo.find(|item| item.quantity() <= threshold)
    }

    /// Groceries expired at `now`.
    pub fn expired_groceries(&self, now: DateTime<Utc>) -> Vec<GroceryItem> {
        self.groceries.find(|item| item.is_expired_at(now))
    }

    /// Tagged records of every item, electronics first, each ordered by id.
    pub fn snapshot(&self) -> Vec<ItemRecord> {
        self.electronics
            .list_all()
            .into_iter()
            .map(ItemRecord::from)
            .chain(self.groceries.list_all().into_iter().map(ItemRecord::from))
            .collect()
    }

    /// Insert each record into the repository for its variant.
    ///
    /// Decoded records have not passed through a constructor, so a negative
    /// quantity is rejected here with `InvalidQuantity`. Stops at the first
    /// failure; records before it stay inserted.
    pub fn restore(&self, records: impl IntoIterator<Item = ItemRecord>) -> StoreResult<usize> {
        let mut restored = 0;
        for record in records {
            let quantity = record.quantity();
            if quantity < 0 {
                warn!(id = %record.id(), quantity, "record rejected");
                return Err(StoreError::InvalidQuantity { quantity });
            }
            match record {
                ItemRecord::Electronic(item) => self.electronics.add(item)?,
                ItemRecord::Grocery(item) => self.groceries.add(item)?,
            }
            restored += 1;
        }
        info!(restored, "records restored");
        Ok(restored)
    }

    /// Write a snapshot of both repositories to `path`.
    pub fn save(&self, path: &Path, format: Format) -> WarehouseResult<usize> {
        let records = self.snapshot();
        save_to_file(path, &records, format)?;
        Ok(records.len())
    }

    /// Restore a snapshot from `path`.
    ///
    /// Returns `Ok(None)` if no snapshot file exists.
    pub fn load(&self, path: &Path, format: Format) -> WarehouseResult<Option<usize>> {
        match load_from_file(path, format)? {
            Some(records) => Ok(Some(self.restore(records)?)),
            None => {
                info!(path = %path.display(), "no snapshot file");
                Ok(None)
            }
        }
    }
}

impl Default for WarehouseManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for WarehouseManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WarehouseManager")
            .field("config", &self.config)
            .field("electronics", &self.electronics)
            .field("groceries", &self.groceries)
            .finish()
    }
}
