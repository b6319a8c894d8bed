//! Error types for local storage access

/// Storage errors
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Backend refused the operation (quota, disabled storage, bad key)
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Underlying I/O failure
    #[error("storage io error on '{key}': {source}")]
    Io {
        /// Entry key
        key: String,
        /// Cause
        #[source]
        source: std::io::Error,
    },

    /// Entry exists but its content cannot be decoded
    #[error("malformed entry '{key}': {reason}")]
    Malformed {
        /// Entry key
        key: String,
        /// Decoder message
        reason: String,
    },
}

impl StorageError {
    /// Check if the error means the stored content is corrupt rather than unreachable
    #[inline]
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }
}
