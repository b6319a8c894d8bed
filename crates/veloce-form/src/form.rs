//! Contact form orchestrator
//!
//! Drives one submission end to end:
//! - Reads the four inputs from the page
//! - Validates them and redraws inline errors
//! - Stores an accepted record and persists the full list
//! - Acknowledges the sender and resets the form

use crate::clock::{Clock, LocalClock};
use crate::config::FormConfig;
use crate::error::FormError;
use crate::field::Field;
use crate::presentation::{clear_all, clear_error, show_error};
use crate::record::ContactRecord;
use crate::store::RecordStore;
use crate::surface::FormSurface;
use crate::validation::{trim_input, validate_field};
use veloce_storage::KeyValueStore;

/// A field that failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Failing field
    pub field: Field,
    /// Message shown under it
    pub message: String,
}

/// Result of one submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// All fields passed and the record was stored
    Accepted(ContactRecord),
    /// At least one field failed; nothing was stored
    Rejected(Vec<FieldError>),
}

impl SubmissionOutcome {
    /// Check if the submission was stored
    #[inline]
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// Stored record, if accepted
    #[inline]
    #[must_use]
    pub fn record(&self) -> Option<&ContactRecord> {
        match self {
            Self::Accepted(record) => Some(record),
            Self::Rejected(_) => None,
        }
    }

    /// Field failures, empty if accepted
    #[inline]
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Accepted(_) => &[],
            Self::Rejected(errors) => errors,
        }
    }
}

/// Contact form validator and local recorder
///
/// Owns the record list and its storage backend. Submissions take `&mut self`;
/// the page has a single writer.
#[derive(Debug)]
pub struct ContactForm<S, C = LocalClock> {
    config: FormConfig,
    store: RecordStore<S>,
    clock: C,
}

impl<S: KeyValueStore> ContactForm<S, LocalClock> {
    /// Create form stamping records with the local wall clock
    pub fn new(config: FormConfig, backend: S) -> Result<Self, FormError> {
        let clock = LocalClock::with_format(config.timestamp_format.clone())?;
        Self::with_clock(config, backend, clock)
    }
}

impl<S: KeyValueStore, C: Clock> ContactForm<S, C> {
    /// Create form with an explicit timestamp source
    pub fn with_clock(config: FormConfig, backend: S, clock: C) -> Result<Self, FormError> {
        config.validate()?;
        let store = RecordStore::new(backend, config.storage_key.clone());
        Ok(Self {
            config,
            store,
            clock,
        })
    }

    /// Load previously stored records
    ///
    /// Never fails: an unreadable or malformed entry is logged and the form
    /// starts with an empty list. The entry itself is left as is until the
    /// next accepted submission replaces it.
    pub fn initialize(&mut self) -> usize {
        match self.store.load() {
            Ok(count) => count,
            Err(e) if e.is_malformed_storage() => {
                tracing::warn!("Ignoring malformed stored records: {}", e);
                0
            }
            Err(e) => {
                tracing::warn!("Stored records unavailable, starting empty: {}", e);
                0
            }
        }
    }

    /// Handle a submit of the form shown on `surface`
    ///
    /// # Workflow
    /// 1. Read and validate all four fields
    /// 2. Clear every previous error, then show one per failing field
    /// 3. If all pass: append the trimmed record, persist, acknowledge, reset
    ///
    /// # Errors
    /// Only persistence can fail. The record is then not kept, and the form is
    /// neither acknowledged nor reset.
    pub fn submit<F: FormSurface + ?Sized>(
        &mut self,
        surface: &mut F,
    ) -> Result<SubmissionOutcome, FormError> {
        let values = Field::ALL.map(|field| surface.field_value(field));
        let failures: Vec<FieldError> = Field::ALL
            .into_iter()
            .zip(&values)
            .filter_map(|(field, value)| {
                let result = validate_field(field, value);
                (!result.is_valid()).then(|| FieldError {
                    field,
                    message: result.message,
                })
            })
            .collect();

        clear_all(surface);

        if !failures.is_empty() {
            for failure in &failures {
                show_error(surface, failure.field, &failure.message);
            }
            tracing::info!("Submission rejected: {} invalid fields", failures.len());
            return Ok(SubmissionOutcome::Rejected(failures));
        }

        let [name, email, subject, message] = &values;
        let record = ContactRecord::new(name, email, subject, message, self.clock.now_display());
        self.store.append(record.clone())?;
        tracing::info!("Submission accepted, {} records stored", self.store.len());

        surface.acknowledge(&record.acknowledgment());
        surface.reset_form(&self.config.form_id);

        Ok(SubmissionOutcome::Accepted(record))
    }

    /// Handle typing in one field
    ///
    /// Clears the field's error as soon as its value is non-empty and valid.
    /// Never shows a new error.
    pub fn on_input<F: FormSurface + ?Sized>(&self, surface: &mut F, field: Field) {
        let value = surface.field_value(field);
        if trim_input(&value).is_empty() {
            return;
        }
        if validate_field(field, &value).is_valid() {
            clear_error(surface, field);
        }
    }

    /// Records in submission order
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[ContactRecord] {
        self.store.records()
    }

    /// Underlying record store
    #[inline]
    #[must_use]
    pub fn store(&self) -> &RecordStore<S> {
        &self.store
    }

    /// Configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &FormConfig {
        &self.config
    }
}
