//! Access gate configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Password shipped with the page
pub const DEFAULT_PASSWORD: &str = "veloce";

/// Message shown after a wrong password
pub const DEFAULT_ERROR_MESSAGE: &str = "❌ Incorrect password";

/// Class hiding the content region until unlocked
pub const DEFAULT_LOCKED_CLASS: &str = "locked";

/// Access gate configuration
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Expected password, compared after trimming the input
    pub password: String,
    /// Text shown on mismatch
    pub error_message: String,
    /// Class removed from the content region on success
    pub locked_class: String,
}

impl GateConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With expected password
    #[inline]
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// With mismatch message
    #[inline]
    #[must_use]
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = message.into();
        self
    }

    /// Parse TOML text; missing keys take their defaults
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject a password that no trimmed input could ever match
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.password.is_empty() || self.password.trim() != self.password {
            return Err(ConfigError::Invalid {
                key: "password",
                reason: "must be non-empty without surrounding whitespace".to_string(),
            });
        }
        if self.locked_class.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "locked_class",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            password: DEFAULT_PASSWORD.to_string(),
            error_message: DEFAULT_ERROR_MESSAGE.to_string(),
            locked_class: DEFAULT_LOCKED_CLASS.to_string(),
        }
    }
}

// Keep the password out of debug logs
impl std::fmt::Debug for GateConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GateConfig")
            .field("password", &"<redacted>")
            .field("error_message", &self.error_message)
            .field("locked_class", &self.locked_class)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GateConfig::new();
        assert_eq!(config.password, "veloce");
        assert_eq!(config.error_message, "❌ Incorrect password");
        assert_eq!(config.locked_class, "locked");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn toml_overrides_password() {
        let config = GateConfig::from_toml_str(r#"password = "letmein""#).unwrap();
        assert_eq!(config.password, "letmein");
        assert_eq!(config.locked_class, DEFAULT_LOCKED_CLASS);
    }

    #[test]
    fn rejects_unmatchable_password() {
        assert!(GateConfig::from_toml_str(r#"password = """#).is_err());
        assert!(matches!(
            GateConfig::new().with_password(" padded ").validate(),
            Err(ConfigError::Invalid { key: "password", .. })
        ));
    }

    #[test]
    fn debug_redacts_password() {
        let rendered = format!("{:?}", GateConfig::new());
        assert!(!rendered.contains("veloce"));
    }
}
