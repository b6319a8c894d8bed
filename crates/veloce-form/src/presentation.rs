//! Inline error display
//!
//! Turns validation messages into page mutations. Both operations are
//! idempotent.

use crate::field::Field;
use crate::surface::{ErrorStyle, FormSurface};

/// Show `message` under `field` and mark the input as failing
///
/// The error element is created on first use and reused afterwards.
pub fn show_error<S: FormSurface + ?Sized>(surface: &mut S, field: Field, message: &str) {
    show_error_styled(surface, field, message, &ErrorStyle::DEFAULT);
}

/// [`show_error`] with a custom style
pub fn show_error_styled<S: FormSurface + ?Sized>(
    surface: &mut S,
    field: Field,
    message: &str,
    style: &ErrorStyle,
) {
    if !surface.has_error_element(field) {
        surface.create_error_element(field, style);
    }
    surface.set_error_text(field, message);
    surface.set_error_border(field, Some(style));
}

/// Blank the error text under `field` and remove the input's error border
pub fn clear_error<S: FormSurface + ?Sized>(surface: &mut S, field: Field) {
    if surface.has_error_element(field) {
        surface.set_error_text(field, "");
    }
    surface.set_error_border(field, None);
}

/// Clear the error display of every field
pub fn clear_all<S: FormSurface + ?Sized>(surface: &mut S) {
    for field in Field::ALL {
        clear_error(surface, field);
    }
}
