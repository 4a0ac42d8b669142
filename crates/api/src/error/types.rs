// File: crates/api/src/error/types.rs
//! Error type definitions for key agreement and key derivation

use thiserror::Error;

/// Primary error type for dhkam operations.
///
/// Every failure a caller can observe maps onto exactly one variant.
/// `context` names the operation that raised the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Private-key regeneration or structural validation failed
    #[error("invalid private key: {context}")]
    InvalidPrivateKey { context: &'static str },

    /// An imported or peer public key failed the positivity/bit-length check
    #[error("invalid public key: {context}")]
    InvalidPublicKey { context: &'static str },

    /// Random sampling failed or the blinded exponentiation left the group
    #[error("blinding failed: {context}")]
    BlindingFailed { context: &'static str },

    /// The computed shared secret is shorter than the requested output
    #[error("invalid shared key: requested {requested} bytes, only {available} available")]
    InvalidSharedKey { requested: usize, available: usize },

    /// KEK parameters could not be initialised, encoded or parsed
    #[error("invalid KEK parameters: {context}")]
    InvalidKekParams { context: &'static str },
}

/// Result type for dhkam operations
pub type Result<T> = core::result::Result<T, Error>;
