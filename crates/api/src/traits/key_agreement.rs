// File: crates/api/src/traits/key_agreement.rs
//! Trait definition for Diffie-Hellman style key agreement
//!
//! Unlike a KEM there is no ciphertext: both parties publish a public key and
//! each combines its own private key with the peer's public key to reach the
//! same shared secret.

use super::serialize::{Serialize, SerializeSecret};
use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

/// Trait for key agreement schemes with domain-specific types.
pub trait KeyAgreement {
    /// Public key type. Implements `Serialize`, so `from_bytes` must validate.
    type PublicKey: Clone + Serialize;

    /// Private key type. Carries its own public key.
    type PrivateKey: Clone;

    /// Shared secret type.
    ///
    /// # Security Note
    /// Should be fed into a KDF immediately after generation.
    type SharedSecret: Zeroize + Clone + SerializeSecret;

    /// Returns the scheme name.
    fn name() -> &'static str;

    /// Generate a new private key together with its public key.
    ///
    /// # Security Requirements
    /// - Must use the provided CSPRNG for all randomness.
    fn generate_keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::PrivateKey>;

    /// Extract the public key belonging to a private key.
    fn public_key(private_key: &Self::PrivateKey) -> Self::PublicKey;

    /// Load a private key from its byte encoding and regenerate its public key.
    ///
    /// An RNG is required because public-key regeneration is blinded.
    fn import_private_key<R: CryptoRng + RngCore>(
        rng: &mut R,
        bytes: &[u8],
    ) -> Result<Self::PrivateKey>;

    /// Export the private key bytes, zeroized on drop.
    fn export_private_key(private_key: &Self::PrivateKey) -> Zeroizing<Vec<u8>>;

    /// Load and validate a public key.
    fn import_public_key(bytes: &[u8]) -> Result<Self::PublicKey> {
        Self::PublicKey::from_bytes(bytes)
    }

    /// Export the public key bytes.
    fn export_public_key(public_key: &Self::PublicKey) -> Vec<u8> {
        public_key.to_bytes()
    }

    /// Combine the local private key with a peer public key.
    ///
    /// # Security Requirements
    /// - Must validate the peer public key first.
    /// - Must not leak timing information about the private key.
    fn shared_secret<R: CryptoRng + RngCore>(
        rng: &mut R,
        private_key: &Self::PrivateKey,
        peer_public_key: &Self::PublicKey,
        length: usize,
    ) -> Result<Self::SharedSecret>;
}
