use depot_types::{ItemId, Quantity};

/// Errors from repository operations.
///
/// Every variant is recoverable; the repository raises them and never
/// handles them itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// An item with this id is already stored.
    #[error("item with id {id} already exists")]
    DuplicateItem { id: ItemId },

    /// No item with this id is stored.
    #[error("item with id {id} not found")]
    ItemNotFound { id: ItemId },

    /// The requested quantity is negative.
    #[error("quantity cannot be negative: {quantity}")]
    InvalidQuantity { quantity: Quantity },
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
