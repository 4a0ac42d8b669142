// File: crates/kem/src/lib.rs
//! Blinded Diffie-Hellman key agreement and RFC 2631 KEK derivation
//!
//! Two layers live here:
//!
//! - [`dh`]: key agreement over the RFC 3526 Group 14 modulus. Every
//!   exponentiation that touches a private exponent is blinded.
//! - [`kek`]: the X9.42 / RFC 2631 counter-mode KDF that turns a shared
//!   secret into a sequence of content-encryption keys.

#![forbid(unsafe_code)]

pub mod dh;
pub mod kek;

// Re-exports
pub use dh::{Dh2048, DhPrivateKey, DhPublicKey, DhSharedSecret};
pub use dhkam_api::{Error, Result};
pub use kek::{KekPreset, KekState, ObjectIdentifier};
