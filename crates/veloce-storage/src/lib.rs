//! Veloce Storage
//!
//! The local key-value storage boundary used by the contact form recorder.
//!
//! # Overview
//!
//! - **KeyValueStore**: origin-scoped string store (the browser's local storage)
//! - **MemoryStore**: map-backed store for tests and embedding
//! - **FileStore**: one file per key inside a directory
//!
//! # Example
//!
//! ```rust
//! use veloce_storage::{KeyValueStore, MemoryStore};
//!
//! let mut store = MemoryStore::new();
//! store.set_item("veloceCredentials", "[]").unwrap();
//! assert_eq!(store.get_item("veloceCredentials").unwrap().as_deref(), Some("[]"));
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod file;
pub mod memory;
pub mod store;

// Re-exports
pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::KeyValueStore;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
