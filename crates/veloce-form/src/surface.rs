//! Page boundary for the contact form
//!
//! The form logic never touches the page directly. Hosts implement
//! [`FormSurface`] over whatever renders the inputs (a browser DOM, a terminal
//! UI, an in-memory fake in tests).

use crate::field::Field;

/// Visual treatment of a failing field and its inline error element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorStyle {
    /// Text colour of the error element and border colour of the input
    pub color: &'static str,
    /// Border width applied to the failing input
    pub border_width: &'static str,
    /// Error element font size
    pub font_size: &'static str,
    /// Error element display mode
    pub display: &'static str,
    /// Gap between input and error element
    pub margin_top: &'static str,
}

impl ErrorStyle {
    /// Red inline error style
    pub const DEFAULT: ErrorStyle = ErrorStyle {
        color: "rgb(255, 84, 89)",
        border_width: "2px",
        font_size: "12px",
        display: "block",
        margin_top: "4px",
    };
}

impl Default for ErrorStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Page operations the contact form needs
pub trait FormSurface {
    /// Current raw value of an input
    fn field_value(&self, field: Field) -> String;

    /// Whether the inline error element for `field` already exists
    fn has_error_element(&self, field: Field) -> bool;

    /// Create the inline error element next to the input, styled with `style`
    fn create_error_element(&mut self, field: Field, style: &ErrorStyle);

    /// Set the text of an existing error element
    fn set_error_text(&mut self, field: Field, text: &str);

    /// Apply the error border to an input, or remove it with `None`
    fn set_error_border(&mut self, field: Field, style: Option<&ErrorStyle>);

    /// Clear every input of the form identified by `form_id`
    fn reset_form(&mut self, form_id: &str);

    /// Show a success message to the user
    fn acknowledge(&mut self, text: &str);
}
