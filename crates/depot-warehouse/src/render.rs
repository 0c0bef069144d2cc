//! One-line rendering of items and the sink rendered lines go to.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use depot_types::{ElectronicItem, GroceryItem, InventoryItem, ItemRecord};

/// Line shown when a repository holds nothing.
pub const EMPTY_LISTING: &str = "No items found.";

/// Turns an item into a single human-readable line.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for ElectronicItem {
    fn render(&self) -> String {
        format!(
            "[Electronic] ID: {}, Name: {}, Brand: {}, Qty: {}, Warranty: {} months",
            self.id(),
            self.name(),
            self.brand(),
            self.quantity(),
            self.warranty_months()
        )
    }
}

impl Render for GroceryItem {
    fn render(&self) -> String {
        format!(
            "[Grocery] ID: {}, Name: {}, Qty: {}, Expires: {}",
            self.id(),
            self.name(),
            self.quantity(),
            self.expires_at().format("%Y-%m-%d")
        )
    }
}

impl Render for ItemRecord {
    fn render(&self) -> String {
        match self {
            ItemRecord::Electronic(item) => item.render(),
            ItemRecord::Grocery(item) => item.render(),
        }
    }
}

/// Render a failure report line.
pub fn render_error(err: &dyn fmt::Display) -> String {
    format!("[Error] {err}")
}

/// Destination for rendered lines.
///
/// The manager hands lines to a presenter and never inspects what it does
/// with them.
pub trait Presenter: Send + Sync {
    fn line(&self, line: &str);
}

/// Writes each line to standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutPresenter;

impl Presenter for StdoutPresenter {
    fn line(&self, line: &str) {
        println!("{line}");
    }
}

/// Collects lines in memory.
#[derive(Debug, Default)]
pub struct BufferedPresenter {
    lines: Mutex<Vec<String>>,
}

impl BufferedPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain and return everything presented so far.
    pub fn take_lines(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Presenter for BufferedPresenter {
    fn line(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use depot_store::StoreError;
    use depot_types::ItemId;

    #[test]
    fn renders_electronic() {
        let item = ElectronicItem::new(1, "Laptop", 10, "Dell", 24);
        assert_eq!(
            item.render(),
            "[Electronic] ID: 1, Name: Laptop, Brand: Dell, Qty: 10, Warranty: 24 months"
        );
    }

    #[test]
    fn renders_grocery_date_only() {
        let expiry = Utc.with_ymd_and_hms(2024, 1, 11, 23, 59, 0).unwrap();
        let item = GroceryItem::new(1, "Milk", 20, expiry);
        assert_eq!(
            item.render(),
            "[Grocery] ID: 1, Name: Milk, Qty: 20, Expires: 2024-01-11"
        );
        assert_eq!(ItemRecord::from(item.clone()).render(), item.render());
    }

    #[test]
    fn renders_error() {
        let err = StoreError::ItemNotFound { id: ItemId::new(99) };
        assert_eq!(render_error(&err), "[Error] item with id 99 not found");
    }

    #[test]
    fn buffered_presenter_drains() {
        let p = BufferedPresenter::new();
        p.line("a");
        p.line("b");
        assert_eq!(p.take_lines(), vec!["a", "b"]);
        assert!(p.take_lines().is_empty());
    }
}
