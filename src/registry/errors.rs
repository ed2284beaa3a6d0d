use thiserror::Error;

/// Errors that can arise while reading or writing the registry slot.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Wrapper around sled's error type.
    #[error("sled error: {0}")]
    Sled(#[from] sled::Error),

    /// Wrapper around IO errors (directory creation).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapper around JSON encode/decode errors for the name list.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The slot holds a value of a non-text type.
    #[error("slot holds a {found}, expected a string")]
    NotAString { found: &'static str },

    /// Stored bytes could not be decoded into a slot value.
    #[error("corrupt slot value: {0}")]
    Corrupt(String),

    /// The host refused the write because the encoded value is too large.
    #[error("value of {size} bytes exceeds slot limit of {limit} bytes")]
    CapacityExceeded { size: usize, limit: usize },
}
