//! Error types for the contact form
//!
//! Validation failures are not errors: they come back as data in
//! [`SubmissionOutcome::Rejected`](crate::form::SubmissionOutcome). These
//! types cover storage and configuration faults only.

use veloce_storage::StorageError;

/// Main form error type
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// Reading or writing the record entry failed
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Records could not be encoded
    #[error("failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl FormError {
    /// Check if the error came from corrupt persisted data
    #[inline]
    #[must_use]
    pub fn is_malformed_storage(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_malformed())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML text could not be parsed
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of range
    #[error("invalid value for '{key}': {reason}")]
    Invalid {
        /// Config key
        key: &'static str,
        /// What is wrong with it
        reason: String,
    },
}
