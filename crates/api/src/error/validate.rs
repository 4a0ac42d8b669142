// File: crates/api/src/error/validate.rs
//! Validation guards that turn a failed condition into the matching error

use super::types::{Error, Result};

/// Validate a private key property
pub fn private_key(condition: bool, context: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidPrivateKey { context });
    }
    Ok(())
}

/// Validate a public key property
pub fn public_key(condition: bool, context: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidPublicKey { context });
    }
    Ok(())
}

/// Validate the outcome of a blinded exponentiation
pub fn blinding(condition: bool, context: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::BlindingFailed { context });
    }
    Ok(())
}

/// Validate that a shared secret can supply `requested` bytes
pub fn shared_key(requested: usize, available: usize) -> Result<()> {
    if available < requested {
        return Err(Error::InvalidSharedKey { requested, available });
    }
    Ok(())
}

/// Validate a KEK parameter
pub fn kek_params(condition: bool, context: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidKekParams { context });
    }
    Ok(())
}
