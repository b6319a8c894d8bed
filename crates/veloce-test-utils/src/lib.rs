//! Testing utilities for Veloce workspace
//!
//! In-memory pages, storage wrappers and tracing setup.

#![allow(missing_docs)]

use std::collections::BTreeMap;
use tracing_subscriber::EnvFilter;
use veloce_form::{ErrorStyle, Field, FormSurface};
use veloce_gate::{GateSurface, InputType};
use veloce_storage::{KeyValueStore, MemoryStore, StorageError};

/// Install a fmt subscriber honouring `RUST_LOG`; repeated calls are ignored
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Inline error element state of one field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorElement {
    pub text: String,
    pub style: Option<ErrorStyle>,
}

/// In-memory contact form page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageForm {
    values: BTreeMap<Field, String>,
    elements: BTreeMap<Field, ErrorElement>,
    created: BTreeMap<Field, usize>,
    borders: BTreeMap<Field, ErrorStyle>,
    resets: Vec<String>,
    acknowledgments: Vec<String>,
}

impl PageForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(name: &str, email: &str, subject: &str, message: &str) -> Self {
        let mut page = Self::new();
        page.set_value(Field::Name, name);
        page.set_value(Field::Email, email);
        page.set_value(Field::Subject, subject);
        page.set_value(Field::Message, message);
        page
    }

    /// Page filled with values every validator accepts
    pub fn valid() -> Self {
        Self::with_values(
            "Ada Lovelace",
            "ada@example.com",
            "Engine inquiry",
            "I would like to hear more about the engine.",
        )
    }

    pub fn set_value(&mut self, field: Field, value: &str) {
        self.values.insert(field, value.to_string());
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    /// Text of the error element, `None` if it was never created
    pub fn error_text(&self, field: Field) -> Option<&str> {
        self.elements.get(&field).map(|e| e.text.as_str())
    }

    pub fn has_error_border(&self, field: Field) -> bool {
        self.borders.contains_key(&field)
    }

    pub fn error_elements_created(&self, field: Field) -> usize {
        self.created.get(&field).copied().unwrap_or(0)
    }

    /// Fields currently showing a non-empty error
    pub fn failing_fields(&self) -> Vec<Field> {
        self.elements
            .iter()
            .filter(|(_, e)| !e.text.is_empty())
            .map(|(f, _)| *f)
            .collect()
    }

    pub fn resets(&self) -> &[String] {
        &self.resets
    }

    pub fn acknowledgments(&self) -> &[String] {
        &self.acknowledgments
    }
}

impl FormSurface for PageForm {
    fn field_value(&self, field: Field) -> String {
        self.value(field).to_string()
    }

    fn has_error_element(&self, field: Field) -> bool {
        self.elements.contains_key(&field)
    }

    fn create_error_element(&mut self, field: Field, style: &ErrorStyle) {
        self.elements.insert(
            field,
            ErrorElement {
                text: String::new(),
                style: Some(style.clone()),
            },
        );
        *self.created.entry(field).or_default() += 1;
    }

    fn set_error_text(&mut self, field: Field, text: &str) {
        if let Some(element) = self.elements.get_mut(&field) {
            element.text = text.to_string();
        }
    }

    fn set_error_border(&mut self, field: Field, style: Option<&ErrorStyle>) {
        match style {
            Some(style) => {
                self.borders.insert(field, style.clone());
            }
            None => {
                self.borders.remove(&field);
            }
        }
    }

    fn reset_form(&mut self, form_id: &str) {
        self.values.clear();
        self.resets.push(form_id.to_string());
    }

    fn acknowledge(&mut self, text: &str) {
        self.acknowledgments.push(text.to_string());
    }
}

/// In-memory login page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageGate {
    pub password: String,
    pub login_visible: bool,
    pub content_classes: Vec<String>,
    pub error_visible: bool,
    pub error_text: String,
    pub input_type: InputType,
}

impl PageGate {
    /// Locked page with `password` typed into the prompt
    pub fn with_password(password: &str) -> Self {
        Self {
            password: password.to_string(),
            login_visible: true,
            content_classes: vec!["content".to_string(), "locked".to_string()],
            error_visible: false,
            error_text: String::new(),
            input_type: InputType::Password,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.content_classes.iter().any(|c| c == "locked")
    }
}

impl GateSurface for PageGate {
    fn password_input(&self) -> String {
        self.password.clone()
    }

    fn hide_login(&mut self) {
        self.login_visible = false;
    }

    fn unlock_content(&mut self, class: &str) {
        self.content_classes.retain(|c| c != class);
    }

    fn show_login_error(&mut self, message: &str) {
        self.error_text = message.to_string();
        self.error_visible = true;
    }

    fn hide_login_error(&mut self) {
        self.error_visible = false;
    }

    fn input_type(&self) -> InputType {
        self.input_type
    }

    fn set_input_type(&mut self, input_type: InputType) {
        self.input_type = input_type;
    }
}

/// Store wrapper counting writes
#[derive(Debug, Default)]
pub struct CountingStore {
    pub inner: MemoryStore,
    pub writes: usize,
}

impl CountingStore {
    pub fn new(inner: MemoryStore) -> Self {
        Self { inner, writes: 0 }
    }
}

impl KeyValueStore for CountingStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.writes += 1;
        self.inner.set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.inner.remove_item(key)
    }
}

/// Store whose writes always fail, as with an exhausted quota
#[derive(Debug, Default)]
pub struct FullStore {
    pub inner: MemoryStore,
}

impl KeyValueStore for FullStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(key)
    }

    fn set_item(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.inner.remove_item(key)
    }
}
