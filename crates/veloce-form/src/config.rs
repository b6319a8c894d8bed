//! Contact form configuration

use crate::clock::{check_timestamp_format, DEFAULT_TIMESTAMP_FORMAT};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Storage entry holding the record list
pub const DEFAULT_STORAGE_KEY: &str = "veloceCredentials";

/// Element id of the contact form
pub const DEFAULT_FORM_ID: &str = "contactForm";

/// Contact form configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Storage entry holding the JSON record array
    pub storage_key: String,
    /// Form element reset after an accepted submission
    pub form_id: String,
    /// chrono format string for record timestamps
    pub timestamp_format: String,
}

impl FormConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With storage key
    #[inline]
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// With form id
    #[inline]
    #[must_use]
    pub fn with_form_id(mut self, id: impl Into<String>) -> Self {
        self.form_id = id.into();
        self
    }

    /// With timestamp format
    #[inline]
    #[must_use]
    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    /// Parse TOML text; missing keys take their defaults
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that would otherwise fail later at submit time
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "storage_key",
                reason: "must not be empty".to_string(),
            });
        }
        if self.form_id.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "form_id",
                reason: "must not be empty".to_string(),
            });
        }
        check_timestamp_format(&self.timestamp_format)
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            form_id: DEFAULT_FORM_ID.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = FormConfig::new();
        assert_eq!(config.storage_key, "veloceCredentials");
        assert_eq!(config.form_id, "contactForm");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = FormConfig::from_toml_str(r#"storage_key = "contactRecords""#).unwrap();
        assert_eq!(config.storage_key, "contactRecords");
        assert_eq!(config.form_id, DEFAULT_FORM_ID);
    }

    #[test]
    fn rejects_empty_key() {
        let err = FormConfig::from_toml_str(r#"storage_key = "  ""#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "storage_key", .. }));
    }

    #[test]
    fn rejects_bad_timestamp_format() {
        let config = FormConfig::new().with_timestamp_format("%Q");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { key: "timestamp_format", .. })
        ));
    }

    #[test]
    fn rejects_garbage_toml() {
        assert!(matches!(
            FormConfig::from_toml_str("storage_key = ["),
            Err(ConfigError::Parse(_))
        ));
    }
}
