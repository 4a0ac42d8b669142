// File: crates/kem/src/dh/mod.rs
//! Diffie-Hellman over RFC 3526 MODP Group 14
//!
//! This module provides key generation, key import/export and shared-secret
//! computation over the fixed 2048-bit Group 14 prime with generator 2.
//!
//! # Security Features
//!
//! - Every modular exponentiation with a private exponent is blinded: the
//!   exponent is split into two randomized halves per call, so the work done
//!   does not track the bit pattern of the secret.
//! - Peer public keys are validated before use (positive, no wider than P).
//! - Exported private bytes and shared secrets are zeroized on drop.
//!
//! The validity check on public keys is a sanity check only. It does not
//! prove subgroup membership, and the protocol is unauthenticated.

mod blinding;
mod keys;

pub use keys::{DhPrivateKey, DhPublicKey, DhSharedSecret};

use dhkam_api::{KeyAgreement, Result};
use dhkam_params::{DH_2048_GENERATOR, DH_2048_PRIME, DH_BLINDING_BITS, DH_BLINDING_OFFSET_BITS};
use num_bigint::BigUint;
use num_traits::One;
use once_cell::sync::Lazy;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

static PRIME: Lazy<BigUint> = Lazy::new(|| BigUint::from_bytes_be(&DH_2048_PRIME));

static PRIME_MINUS_ONE: Lazy<BigUint> = Lazy::new(|| &*PRIME - BigUint::one());

static GENERATOR: Lazy<BigUint> = Lazy::new(|| BigUint::from(DH_2048_GENERATOR));

/// 2^256, the fixed floor of every blinding exponent
static BLINDING_FLOOR: Lazy<BigUint> = Lazy::new(|| BigUint::one() << DH_BLINDING_BITS);

/// 2^258, added to the private exponent before it is split
static BLINDING_OFFSET: Lazy<BigUint> = Lazy::new(|| BigUint::one() << DH_BLINDING_OFFSET_BITS);

/// The Group 14 prime modulus P
pub fn prime() -> &'static BigUint {
    &PRIME
}

/// The group generator g
pub fn generator() -> &'static BigUint {
    &GENERATOR
}

pub(crate) fn prime_minus_one() -> &'static BigUint {
    &PRIME_MINUS_ONE
}

/// Width in bytes of a fully padded group element, `ceil(bits(P) / 8)`
pub fn modulus_byte_len() -> usize {
    (PRIME.bits() as usize).div_ceil(8)
}

/// Diffie-Hellman key agreement over the 2048-bit Group 14 modulus
pub struct Dh2048;

impl KeyAgreement for Dh2048 {
    type PublicKey = DhPublicKey;
    type PrivateKey = DhPrivateKey;
    type SharedSecret = DhSharedSecret;

    fn name() -> &'static str {
        "DH-2048-Group14-Blinded"
    }

    fn generate_keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::PrivateKey> {
        DhPrivateKey::generate(rng)
    }

    fn public_key(private_key: &Self::PrivateKey) -> Self::PublicKey {
        private_key.public_key().clone()
    }

    fn import_private_key<R: CryptoRng + RngCore>(
        rng: &mut R,
        bytes: &[u8],
    ) -> Result<Self::PrivateKey> {
        DhPrivateKey::from_bytes(rng, bytes)
    }

    fn export_private_key(private_key: &Self::PrivateKey) -> Zeroizing<Vec<u8>> {
        private_key.export_private()
    }

    fn shared_secret<R: CryptoRng + RngCore>(
        rng: &mut R,
        private_key: &Self::PrivateKey,
        peer_public_key: &Self::PublicKey,
        length: usize,
    ) -> Result<Self::SharedSecret> {
        private_key.shared_secret(rng, peer_public_key, length)
    }
}
