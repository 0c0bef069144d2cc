//! Versioned snapshot envelope and in-memory encode/decode.

use std::fmt;
use std::str::FromStr;

use depot_types::ItemRecord;
use serde::{Deserialize, Serialize};

use crate::error::{CodecError, CodecResult};

/// Current snapshot layout version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Byte format of an encoded snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Pretty-printed JSON, human readable.
    #[default]
    Json,
    /// Compact bincode.
    Bincode,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => f.write_str("json"),
            Format::Bincode => f.write_str("bincode"),
        }
    }
}

impl FromStr for Format {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "bincode" | "bin" => Ok(Format::Bincode),
            _ => Err(CodecError::UnknownFormat(s.to_string())),
        }
    }
}

/// A versioned list of tagged item records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Layout version, checked on decode.
    pub version: u32,
    /// Items in the order they were listed.
    pub records: Vec<ItemRecord>,
}

impl Snapshot {
    /// Wrap records in a snapshot at the current version.
    pub fn new(records: Vec<ItemRecord>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            records,
        }
    }

    /// Serialize to bytes in the given format.
    pub fn to_bytes(&self, format: Format) -> CodecResult<Vec<u8>> {
        match format {
            Format::Json => serde_json::to_vec_pretty(self)
                .map_err(|e| CodecError::Serialization(e.to_string())),
            Format::Bincode => {
                bincode::serialize(self).map_err(|e| CodecError::Serialization(e.to_string()))
            }
        }
    }

    /// Deserialize from bytes, rejecting other layout versions.
    pub fn from_bytes(bytes: &[u8], format: Format) -> CodecResult<Self> {
        let snapshot: Snapshot = match format {
            Format::Json => serde_json::from_slice(bytes)
                .map_err(|e| CodecError::Serialization(e.to_string()))?,
            Format::Bincode => bincode::deserialize(bytes)
                .map_err(|e| CodecError::Serialization(e.to_string()))?,
        };
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(CodecError::UnsupportedVersion(snapshot.version));
        }
        Ok(snapshot)
    }
}

/// Encode a list of records into a snapshot byte stream.
pub fn encode(records: &[ItemRecord], format: Format) -> CodecResult<Vec<u8>> {
    Snapshot::new(records.to_vec()).to_bytes(format)
}

/// Decode a snapshot byte stream back into its records.
pub fn decode(bytes: &[u8], format: Format) -> CodecResult<Vec<ItemRecord>> {
    Snapshot::from_bytes(bytes, format).map(|snapshot| snapshot.records)
}
