//! Veloce Contact Form
//!
//! Client-side validation and local recording of contact form submissions.
//!
//! # Overview
//!
//! - **Validators**: pure per-field checks returning [`ValidationResult`]
//! - **Presentation**: inline error display over a [`FormSurface`]
//! - **RecordStore**: append-only record list mirrored to a [`KeyValueStore`]
//! - **ContactForm**: submit orchestration tying the three together
//!
//! # Example
//!
//! ```rust,ignore
//! use veloce_form::{ContactForm, FormConfig};
//! use veloce_storage::MemoryStore;
//!
//! let mut form = ContactForm::new(FormConfig::new(), MemoryStore::new())?;
//! form.initialize();
//!
//! // `page` implements FormSurface over the rendered inputs
//! let outcome = form.submit(&mut page)?;
//! if outcome.is_accepted() {
//!     println!("{} records stored", form.records().len());
//! }
//! ```
//!
//! [`KeyValueStore`]: veloce_storage::KeyValueStore

#![warn(missing_docs)]

pub mod clock;
pub mod config;
pub mod error;
pub mod field;
pub mod form;
pub mod presentation;
pub mod record;
pub mod store;
pub mod surface;
pub mod validation;

// Re-exports
pub use clock::{Clock, FixedClock, LocalClock};
pub use config::FormConfig;
pub use error::{ConfigError, FormError};
pub use field::Field;
pub use form::{ContactForm, FieldError, SubmissionOutcome};
pub use record::ContactRecord;
pub use store::RecordStore;
pub use surface::{ErrorStyle, FormSurface};
pub use validation::{
    input_len, is_page_whitespace, trim_input, validate_email, validate_field, validate_message,
    validate_name, validate_subject, ValidationResult,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for wiring a contact form
    pub use crate::{
        ContactForm, ContactRecord, Field, FormConfig, FormError, FormSurface, SubmissionOutcome,
        ValidationResult,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
