use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use depot_codec::Format;
use depot_warehouse::WarehouseConfig;
use serde::{Deserialize, Serialize};

/// Settings read from `--config`, all optional.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepotConfig {
    /// Tracing filter used unless `--verbose` is given.
    pub log_level: String,
    /// Snapshot file used when a command is given no path.
    pub data_file: PathBuf,
    /// Snapshot format used when a command is given no `--format`.
    pub format: Format,
    pub warehouse: WarehouseConfig,
}

impl Default for DepotConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".into(),
            data_file: PathBuf::from("inventory.json"),
            format: Format::Json,
            warehouse: WarehouseConfig::default(),
        }
    }
}

impl DepotConfig {
    /// Load from a TOML file, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path)
            .with_context(|| format!("cannot read config at {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("invalid config at {}", path.display()))
    }

    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}
