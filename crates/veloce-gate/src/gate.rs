//! Password check and content reveal

use crate::config::GateConfig;
use crate::error::ConfigError;
use crate::surface::{GateSurface, InputType};

/// Outcome of one login attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateDecision {
    /// Input matched; content is revealed
    Granted,
    /// Input did not match; content stays hidden
    Denied,
}

impl GateDecision {
    /// Check if access was granted
    #[inline]
    #[must_use]
    pub fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Cosmetic password gate
///
/// Stateless between attempts: no counters, no lockout.
#[derive(Debug, Clone, Default)]
pub struct AccessGate {
    config: GateConfig,
}

impl AccessGate {
    /// Create gate from configuration
    #[inline]
    #[must_use]
    pub fn new(config: GateConfig) -> Self {
        Self { config }
    }

    /// Create gate after validating the configuration
    pub fn try_new(config: GateConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Compare trimmed `input` with the expected password
    #[must_use]
    pub fn check(&self, input: &str) -> GateDecision {
        if input.trim() == self.config.password {
            GateDecision::Granted
        } else {
            GateDecision::Denied
        }
    }

    /// Handle a login submit on `surface`
    ///
    /// Granted: hide the prompt, unlock the content, hide the error.
    /// Denied: show the fixed error message and leave the content locked.
    pub fn handle_login<S: GateSurface + ?Sized>(&self, surface: &mut S) -> GateDecision {
        let decision = self.check(&surface.password_input());
        match decision {
            GateDecision::Granted => {
                surface.hide_login();
                surface.unlock_content(&self.config.locked_class);
                surface.hide_login_error();
                tracing::info!("Access gate unlocked");
            }
            GateDecision::Denied => {
                surface.show_login_error(&self.config.error_message);
                tracing::warn!("Access gate: incorrect password");
            }
        }
        decision
    }

    /// Flip the password input between masked and plain text
    pub fn toggle_password_visibility<S: GateSurface + ?Sized>(surface: &mut S) -> InputType {
        let next = surface.input_type().toggled();
        surface.set_input_type(next);
        next
    }

    /// Configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &GateConfig {
        &self.config
    }
}
