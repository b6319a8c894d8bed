//! Contact records produced by accepted submissions

use crate::validation::trim_input;
use serde::{Deserialize, Serialize};

/// One accepted contact form submission
///
/// Field values are stored trimmed. The timestamp is a display string, not a
/// parseable instant. Serialized field names are the persisted JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// Sender name
    pub name: String,
    /// Sender email address
    pub email: String,
    /// Message subject
    pub subject: String,
    /// Message body
    pub message: String,
    /// Locale-formatted submission time
    pub timestamp: String,
}

impl ContactRecord {
    /// Build a record from raw field values, trimming each
    #[must_use]
    pub fn new(
        name: &str,
        email: &str,
        subject: &str,
        message: &str,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            name: trim_input(name).to_string(),
            email: trim_input(email).to_string(),
            subject: trim_input(subject).to_string(),
            message: trim_input(message).to_string(),
            timestamp: timestamp.into(),
        }
    }

    /// Text shown to the user once the record is stored
    #[must_use]
    pub fn acknowledgment(&self) -> String {
        format!(
            "✅ Form submitted successfully!\n\nName: {}\nEmail: {}\n\nCredentials stored at client-side.",
            self.name, self.email
        )
    }
}
