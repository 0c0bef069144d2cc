use thiserror::Error;

/// Errors from snapshot encoding, decoding, and file persistence.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The snapshot was written by an incompatible version.
    #[error("unsupported snapshot version: {0}")]
    UnsupportedVersion(u32),

    /// The format name is not recognised.
    #[error("unknown format: {0}")]
    UnknownFormat(String),

    /// I/O error while reading or writing a snapshot file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
