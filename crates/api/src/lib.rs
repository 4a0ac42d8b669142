// File: crates/api/src/lib.rs
//! Public API traits and types for the dhkam library
//!
//! This crate provides the public API surface shared by the dhkam crates:
//! the flat error type, validation guards and the key-agreement and
//! serialization traits.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};

pub use traits::{KeyAgreement, Serialize, SerializeSecret};

// Re-export trait modules for direct access
pub use traits::{key_agreement, serialize};
