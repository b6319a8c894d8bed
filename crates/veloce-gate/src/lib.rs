//! Veloce Access Gate
//!
//! Password prompt that unlocks the page content.
//!
//! This is a cosmetic UI gate, not a security boundary: the expected password
//! ships with the page and comparison is plain string equality. No attempt
//! counting, lockout or hashing.
//!
//! # Example
//!
//! ```rust
//! use veloce_gate::{AccessGate, GateConfig, GateDecision};
//!
//! let gate = AccessGate::new(GateConfig::new());
//! assert_eq!(gate.check("  veloce "), GateDecision::Granted);
//! assert_eq!(gate.check("guess"), GateDecision::Denied);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod gate;
pub mod surface;

// Re-exports
pub use config::GateConfig;
pub use error::ConfigError;
pub use gate::{AccessGate, GateDecision};
pub use surface::{GateSurface, InputType};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
