//! Timestamp sources for new records

use crate::error::ConfigError;
use chrono::format::{Item, StrftimeItems};
use chrono::Local;

/// en-US locale string: `10/19/2026, 3:04:05 PM`
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Produces the display timestamp stamped on each accepted record
pub trait Clock {
    /// Current time rendered for display
    fn now_display(&self) -> String;
}

/// Local wall clock rendered with a chrono format string
#[derive(Debug, Clone)]
pub struct LocalClock {
    format: String,
}

impl LocalClock {
    /// Clock using [`DEFAULT_TIMESTAMP_FORMAT`]
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }

    /// Clock using a custom chrono format string
    ///
    /// Rejects strings chrono cannot render, so `now_display` never fails.
    pub fn with_format(format: impl Into<String>) -> Result<Self, ConfigError> {
        let format = format.into();
        check_timestamp_format(&format)?;
        Ok(Self { format })
    }
}

impl Default for LocalClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for LocalClock {
    fn now_display(&self) -> String {
        Local::now().format(&self.format).to_string()
    }
}

/// Reject chrono format strings containing unsupported specifiers
pub fn check_timestamp_format(format: &str) -> Result<(), ConfigError> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(ConfigError::Invalid {
            key: "timestamp_format",
            reason: format!("unsupported format string: {format}"),
        });
    }
    Ok(())
}

/// Clock that always reports the same string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedClock(pub String);

impl FixedClock {
    /// Fixed clock reporting `value`
    #[inline]
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl Clock for FixedClock {
    fn now_display(&self) -> String {
        self.0.clone()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_display(&self) -> String {
        (**self).now_display()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn default_format_matches_locale_string() {
        let when = NaiveDate::from_ymd_opt(2026, 10, 9)
            .unwrap()
            .and_hms_opt(15, 4, 5)
            .unwrap();
        assert_eq!(
            when.format(DEFAULT_TIMESTAMP_FORMAT).to_string(),
            "10/9/2026, 3:04:05 PM"
        );
    }

    #[test]
    fn local_clock_renders_something() {
        assert!(!LocalClock::new().now_display().is_empty());
    }

    #[test]
    fn with_format_rejects_unsupported_specifier() {
        assert!(matches!(
            LocalClock::with_format("%Q"),
            Err(ConfigError::Invalid { key: "timestamp_format", .. })
        ));
        assert!(LocalClock::with_format("%Y-%m-%d %H:%M").is_ok());
    }

    #[test]
    fn default_format_passes_check() {
        assert!(check_timestamp_format(DEFAULT_TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn fixed_clock_is_stable() {
        let clock = FixedClock::new("1/1/2026, 9:00:00 AM");
        assert_eq!(clock.now_display(), clock.now_display());
    }
}
