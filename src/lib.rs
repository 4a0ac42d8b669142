// File: src/lib.rs
//! # dhkam
//!
//! Blinded Diffie-Hellman key agreement over the RFC 3526 Group 14 modulus,
//! with RFC 2631 (X9.42) key-encryption-key derivation on top.
//!
//! ## Usage
//!
//! ```rust
//! use dhkam::prelude::*;
//! use rand::rngs::OsRng;
//! use sha2::Sha256;
//!
//! # fn main() -> dhkam::Result<()> {
//! let mut rng = OsRng;
//! let alice = DhPrivateKey::generate(&mut rng)?;
//! let bob = DhPrivateKey::generate(&mut rng)?;
//!
//! let mut kek_alice = KekState::from_preset(&presets::AES256_GCM, None)?;
//! let mut kek_bob = KekState::from_preset(&presets::AES256_GCM, None)?;
//!
//! let cek_alice = alice.cek::<Sha256, _>(&mut rng, bob.public_key(), &mut kek_alice)?;
//! let cek_bob = bob.cek::<Sha256, _>(&mut rng, alice.public_key(), &mut kek_bob)?;
//! assert_eq!(cek_alice, cek_bob);
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`dhkam-api`]: error type and the key-agreement traits
//! - [`dhkam-params`]: group and KEK constants
//! - [`dhkam-internal`]: constant-time and byte helpers
//! - [`dhkam-kem`]: the DH engine and the KEK derivation

#![forbid(unsafe_code)]

pub use dhkam_api as api;
pub use dhkam_internal as internal;
pub use dhkam_kem as kem;
pub use dhkam_params as params;

pub use dhkam_api::{Error, Result};

/// Common imports for dhkam users
pub mod prelude {
    pub use crate::api::{Error, KeyAgreement, Result, Serialize, SerializeSecret};

    pub use crate::kem::kek::{oid, presets};
    pub use crate::kem::{
        Dh2048, DhPrivateKey, DhPublicKey, DhSharedSecret, KekPreset, KekState, ObjectIdentifier,
    };

    pub use zeroize::Zeroizing;
}
