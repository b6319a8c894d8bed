//! Error types for the access gate

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
