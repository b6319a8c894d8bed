//! Page boundary for the access gate

/// Rendering mode of the password input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputType {
    /// Characters masked
    #[default]
    Password,
    /// Characters shown
    Text,
}

impl InputType {
    /// The other mode
    #[inline]
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Password => Self::Text,
            Self::Text => Self::Password,
        }
    }

    /// HTML input `type` attribute value
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Password => "password",
            Self::Text => "text",
        }
    }
}

/// Page operations the access gate needs
pub trait GateSurface {
    /// Raw value of the password input
    fn password_input(&self) -> String;

    /// Hide the login prompt
    fn hide_login(&mut self);

    /// Remove `class` from the content region
    fn unlock_content(&mut self, class: &str);

    /// Show the login error with `message`
    fn show_login_error(&mut self, message: &str);

    /// Hide the login error
    fn hide_login_error(&mut self);

    /// Current rendering mode of the password input
    fn input_type(&self) -> InputType;

    /// Switch rendering mode of the password input
    fn set_input_type(&mut self, input_type: InputType);
}
