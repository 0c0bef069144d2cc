//! Snapshot files on disk.
//!
//! Writes go to a temporary file in the destination directory that is then
//! renamed over the target, so a crash mid-write never leaves a truncated
//! snapshot behind.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use depot_types::ItemRecord;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::CodecResult;
use crate::snapshot::{decode, encode, Format};

/// Encode `records` and atomically replace the file at `path`.
pub fn save_to_file(path: &Path, records: &[ItemRecord], format: Format) -> CodecResult<()> {
    let bytes = encode(records, format)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(&bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    debug!(path = %path.display(), %format, count = records.len(), "snapshot saved");
    Ok(())
}

/// Load records from the file at `path`.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_from_file(path: &Path, format: Format) -> CodecResult<Option<Vec<ItemRecord>>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let records = decode(&bytes, format)?;
    debug!(path = %path.display(), %format, count = records.len(), "snapshot loaded");
    Ok(Some(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;
    use chrono::{TimeZone, Utc};
    use depot_types::{ElectronicItem, GroceryItem};

    fn records() -> Vec<ItemRecord> {
        let expiry = Utc.with_ymd_and_hms(2024, 1, 4, 0, 0, 0).unwrap();
        vec![
            ElectronicItem::new(3, "Headphones", 50, "Sony", 6).into(),
            GroceryItem::new(2, "Bread", 15, expiry).into(),
        ]
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        for format in [Format::Json, Format::Bincode] {
            let path = dir.path().join(format!("inventory.{format}"));
            save_to_file(&path, &records(), format).unwrap();
            let loaded = load_from_file(&path, format).unwrap();
            assert_eq!(loaded, Some(records()));
        }
    }

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_from_file(&dir.path().join("absent.json"), Format::Json).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn save_overwrites_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        save_to_file(&path, &records(), Format::Json).unwrap();
        save_to_file(&path, &records()[..1], Format::Json).unwrap();

        let loaded = load_from_file(&path, Format::Json).unwrap().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name(), "Headphones");
    }

    #[test]
    fn corrupt_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, b"{\"version\": 1, \"records\": [").unwrap();
        let err = load_from_file(&path, Format::Json).unwrap_err();
        assert!(matches!(err, CodecError::Serialization(_)));
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("inventory.json");
        let err = save_to_file(&path, &records(), Format::Json).unwrap_err();
        assert!(matches!(err, CodecError::Io(_)));
    }
}
