//! Snapshot encoding for Depot item lists.
//!
//! Repositories are monomorphic, so a list mixing electronics and groceries
//! is carried as tagged [`ItemRecord`](depot_types::ItemRecord)s inside a
//! versioned [`Snapshot`]. Decoding restores every field of every record,
//! including which variant it belongs to.
//!
//! # Formats
//!
//! - [`Format::Json`] -- pretty-printed, human readable
//! - [`Format::Bincode`] -- compact binary
//!
//! # Files
//!
//! [`save_to_file`] replaces the target atomically; [`load_from_file`]
//! treats a missing file as "no saved data" rather than an error.

pub mod error;
pub mod file;
pub mod snapshot;

pub use error::{CodecError, CodecResult};
pub use file::{load_from_file, save_to_file};
pub use snapshot::{decode, encode, Format, Snapshot, SNAPSHOT_VERSION};
