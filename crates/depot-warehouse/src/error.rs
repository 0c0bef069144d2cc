use depot_types::{ItemId, Quantity};
use thiserror::Error;

/// Errors from warehouse operations.
///
/// Snapshot I/O propagates these. Bulk stock operations only report them
/// and continue.
#[derive(Debug, Error)]
pub enum WarehouseError {
    #[error(transparent)]
    Store(#[from] depot_store::StoreError),

    #[error("codec error: {0}")]
    Codec(#[from] depot_codec::CodecError),

    /// Adding a stock delta would leave the quantity range.
    #[error("quantity overflow for item {id}: {quantity} + {delta}")]
    QuantityOverflow {
        id: ItemId,
        quantity: Quantity,
        delta: Quantity,
    },
}

pub type WarehouseResult<T> = Result<T, WarehouseError>;
