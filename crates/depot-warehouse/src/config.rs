use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use depot_types::Quantity;

/// Configuration for a [`WarehouseManager`](crate::WarehouseManager).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarehouseConfig {
    /// Fixed "now" used for seeding expiry dates and expiry checks.
    /// `None` uses the wall clock.
    pub reference_time: Option<DateTime<Utc>>,
    /// Items with a quantity at or below this count are reported as low stock.
    pub low_stock_threshold: Quantity,
}

impl Default for WarehouseConfig {
    fn default() -> Self {
        Self {
            reference_time: None,
            low_stock_threshold: 5,
        }
    }
}

impl WarehouseConfig {
    /// A configuration pinned to a fixed clock, for reproducible runs.
    pub fn at(reference_time: DateTime<Utc>) -> Self {
        Self {
            reference_time: Some(reference_time),
            ..Default::default()
        }
    }

    /// The configured reference time, or the current time.
    pub fn now(&self) -> DateTime<Utc> {
        self.reference_time.unwrap_or_else(Utc::now)
    }
}
