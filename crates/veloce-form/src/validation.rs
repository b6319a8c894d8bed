//! Field validators
//!
//! Pure checks mapping a raw input string to a [`ValidationResult`]. Every
//! validator trims surrounding page whitespace first and counts length in
//! UTF-16 code units, the way browser inputs report it. None of them touch
//! the page or storage.

use crate::field::Field;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Minimum trimmed length of a name
pub const NAME_MIN_LEN: usize = 2;

/// Minimum trimmed length of a subject
pub const SUBJECT_MIN_LEN: usize = 3;

/// Minimum trimmed length of a message body
pub const MESSAGE_MIN_LEN: usize = 10;

/// Whitespace class of page scripts: Unicode `Zs`, line terminators and the BOM.
/// Unlike `char::is_whitespace`, NEL (U+0085) is excluded and U+FEFF included.
const PAGE_WHITESPACE: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// `local@domain.tld`: no whitespace, a single `@`, a dot after it
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let part = format!("[^{PAGE_WHITESPACE}@]+");
    Regex::new(&format!("^{part}@{part}\\.{part}$")).expect("email pattern compiles")
});

/// Check if `c` is whitespace as page scripts see it
#[must_use]
pub fn is_page_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ' | '\u{A0}' | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

/// Strip leading and trailing page whitespace
#[inline]
#[must_use]
pub fn trim_input(value: &str) -> &str {
    value.trim_matches(is_page_whitespace)
}

/// Length as reported by a page input (UTF-16 code units)
#[inline]
#[must_use]
pub fn input_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Outcome of validating one field value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the value passed
    pub valid: bool,
    /// Reason for rejection; empty when valid
    pub message: String,
}

impl ValidationResult {
    /// Passing result
    #[inline]
    #[must_use]
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    /// Failing result with a human-readable reason
    #[inline]
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }

    /// Check if the value passed
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// Validate a sender name: required, at least 2 characters, ASCII letters and whitespace only
#[must_use]
pub fn validate_name(name: &str) -> ValidationResult {
    let trimmed = trim_input(name);
    if trimmed.is_empty() {
        return ValidationResult::fail("Name is required");
    }
    if input_len(trimmed) < NAME_MIN_LEN {
        return ValidationResult::fail("Name must be at least 2 characters");
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphabetic() || is_page_whitespace(c))
    {
        return ValidationResult::fail("Name can only contain letters and spaces");
    }
    ValidationResult::ok()
}

/// Validate an email address shape
#[must_use]
pub fn validate_email(email: &str) -> ValidationResult {
    let trimmed = trim_input(email);
    if trimmed.is_empty() {
        return ValidationResult::fail("Email is required");
    }
    if !EMAIL_PATTERN.is_match(trimmed) {
        return ValidationResult::fail("Please enter a valid email address");
    }
    ValidationResult::ok()
}

/// Validate a subject: required, at least 3 characters
#[must_use]
pub fn validate_subject(subject: &str) -> ValidationResult {
    min_length(subject, "Subject", SUBJECT_MIN_LEN)
}

/// Validate a message body: required, at least 10 characters
#[must_use]
pub fn validate_message(message: &str) -> ValidationResult {
    min_length(message, "Message", MESSAGE_MIN_LEN)
}

/// Run the validator belonging to `field`
#[must_use]
pub fn validate_field(field: Field, value: &str) -> ValidationResult {
    match field {
        Field::Name => validate_name(value),
        Field::Email => validate_email(value),
        Field::Subject => validate_subject(value),
        Field::Message => validate_message(value),
    }
}

fn min_length(value: &str, label: &str, min: usize) -> ValidationResult {
    let trimmed = trim_input(value);
    if trimmed.is_empty() {
        return ValidationResult::fail(format!("{label} is required"));
    }
    if input_len(trimmed) < min {
        return ValidationResult::fail(format!("{label} must be at least {min} characters"));
    }
    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn name_required() {
        assert_eq!(validate_name(""), ValidationResult::fail("Name is required"));
        assert_eq!(validate_name("   \t"), ValidationResult::fail("Name is required"));
    }

    #[test]
    fn name_too_short() {
        let result = validate_name("a");
        assert!(!result.is_valid());
        assert_eq!(result.message, "Name must be at least 2 characters");

        // Length is measured after trimming
        assert!(!validate_name("  a  ").is_valid());
    }

    #[test]
    fn name_rejects_digits_and_punctuation() {
        let result = validate_name("John3");
        assert!(!result.is_valid());
        assert_eq!(result.message, "Name can only contain letters and spaces");
        assert!(!validate_name("O'Brien").is_valid());
        assert!(!validate_name("José").is_valid());
    }

    #[test]
    fn name_accepts_inner_spaces() {
        assert_eq!(validate_name("Ada Lovelace"), ValidationResult::ok());
        assert!(validate_name("  Jo  ").is_valid());
    }

    #[test]
    fn email_cases() {
        assert!(validate_email("a@b.com").is_valid());
        assert!(validate_email("  first.last@mail.example.org ").is_valid());

        let missing_tld = validate_email("a@b");
        assert!(!missing_tld.is_valid());
        assert_eq!(missing_tld.message, "Please enter a valid email address");

        assert_eq!(validate_email(""), ValidationResult::fail("Email is required"));
        assert!(!validate_email("a@@b.com").is_valid());
        assert!(!validate_email("a b@c.com").is_valid());
        assert!(!validate_email("@b.com").is_valid());
        assert!(!validate_email("a@b.").is_valid());
    }

    #[test]
    fn subject_cases() {
        assert_eq!(
            validate_subject("Hi"),
            ValidationResult::fail("Subject must be at least 3 characters")
        );
        assert!(validate_subject("Hello").is_valid());
        assert_eq!(validate_subject(" "), ValidationResult::fail("Subject is required"));
    }

    #[test]
    fn message_cases() {
        assert_eq!(
            validate_message("short"),
            ValidationResult::fail("Message must be at least 10 characters")
        );
        assert!(validate_message("0123456789").is_valid());
        assert!(!validate_message("  012345678  ").is_valid());
        assert_eq!(validate_message(""), ValidationResult::fail("Message is required"));
    }

    #[test]
    fn length_counts_utf16_units() {
        // Each emoji is a surrogate pair
        assert!(validate_subject("😀😀").is_valid());
        assert_eq!(
            validate_subject("é!"),
            ValidationResult::fail("Subject must be at least 3 characters")
        );
        assert!(validate_message("😀😀😀😀😀").is_valid());
        assert!(!validate_message("😀😀😀😀").is_valid());
    }

    #[test]
    fn bom_is_trimmed_as_whitespace() {
        assert_eq!(validate_name("\u{FEFF}"), ValidationResult::fail("Name is required"));
        assert!(validate_name("\u{FEFF}Ada\u{FEFF}").is_valid());
        assert!(validate_name("Ada\u{FEFF}Byron").is_valid());
        assert_eq!(validate_email("\u{FEFF} "), ValidationResult::fail("Email is required"));
        assert!(validate_email("\u{FEFF}a@b.com").is_valid());
        assert!(!validate_email("a\u{FEFF}b@c.com").is_valid());
        assert!(!validate_email("a@b.c\u{3000}d").is_valid());
    }

    #[test]
    fn next_line_is_not_whitespace() {
        assert!(!is_page_whitespace('\u{85}'));
        assert_eq!(trim_input("\u{85}x\u{85}"), "\u{85}x\u{85}");
        assert_eq!(
            validate_name("Ab\u{85}"),
            ValidationResult::fail("Name can only contain letters and spaces")
        );
        assert!(validate_email("a\u{85}b@c.com").is_valid());
    }

    #[test]
    fn validate_field_dispatches() {
        assert_eq!(validate_field(Field::Name, "a"), validate_name("a"));
        assert_eq!(validate_field(Field::Email, "x"), validate_email("x"));
        assert_eq!(validate_field(Field::Subject, "Hi"), validate_subject("Hi"));
        assert_eq!(validate_field(Field::Message, "hey"), validate_message("hey"));
    }

    #[test]
    fn valid_results_carry_no_message() {
        assert!(validate_subject("Quote request").message.is_empty());
    }

    proptest! {
        #[test]
        fn prop_letter_and_space_names_are_valid(name in "[ ]{0,3}[A-Za-z]{2}[A-Za-z ]{0,30}") {
            prop_assert!(validate_name(&name).is_valid());
        }

        #[test]
        fn prop_validators_never_panic(input in "\\PC{0,64}") {
            for field in Field::ALL {
                let result = validate_field(field, &input);
                prop_assert_eq!(result.valid, result.message.is_empty());
            }
        }
    }
}
