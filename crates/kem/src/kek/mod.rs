// File: crates/kem/src/kek/mod.rs
//! RFC 2631 (X9.42) key-encryption-key derivation
//!
//! A [`KekState`] holds the parameters of one KEK: the algorithm the derived
//! keys are for, the key length, optional partyAInfo, and a 32-bit counter.
//! Each hash block of derived material is
//!
//! ```text
//! H(ZZ || OtherInfo(counter))
//! ```
//!
//! where `ZZ` is the shared secret left-padded to the modulus width and
//! `OtherInfo` is re-encoded with the current counter for every block. The
//! counter keeps advancing across calls, so every call on the same state
//! yields a new content-encryption key.
//!
//! # Concurrency
//! Derivation takes `&mut self`. A state shared between threads must sit
//! behind a lock so the counter sequence stays unique.

pub mod oid;
mod other_info;
pub mod presets;

pub use oid::ObjectIdentifier;
pub use presets::KekPreset;

use crate::dh::{modulus_byte_len, DhPrivateKey, DhPublicKey};
use dhkam_api::error::{validate, Error, Result};
use dhkam_internal::{increment_be_counter, left_pad, u32_from_be_bytes, u32_to_be_bytes};
use dhkam_params::traditional::kek::KEK_COUNTER_START;
use dhkam_params::{KEK_COUNTER_SIZE, KEK_KEY_LENGTH_SIZE, PARTY_A_INFO_SIZE};
use digest::Digest;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

/// Parameters and counter for one key-encryption key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KekState {
    algorithm: ObjectIdentifier,
    party_a_info: Option<[u8; PARTY_A_INFO_SIZE]>,
    supp_pub_info: Vec<u8>,
    counter: [u8; KEK_COUNTER_SIZE],
}

impl KekState {
    /// Initialise a KEK for `algorithm` producing `key_len`-byte keys
    ///
    /// # Arguments
    /// * `algorithm` - identifier of the algorithm the derived keys are for
    /// * `key_len` - output length in bytes, stored as a 4-byte big-endian
    ///   suppPubInfo
    /// * `party_a_info` - optional sender nonce; exactly 64 bytes if present
    ///
    /// A `key_len` of zero is accepted here and rejected on derivation.
    pub fn new(
        algorithm: ObjectIdentifier,
        key_len: usize,
        party_a_info: Option<&[u8]>,
    ) -> Result<Self> {
        let party_a_info = match party_a_info {
            Some(info) => Some(<[u8; PARTY_A_INFO_SIZE]>::try_from(info).map_err(|_| {
                tracing::debug!(len = info.len(), "rejected partyAInfo length");
                Error::InvalidKekParams {
                    context: "partyAInfo must be exactly 64 bytes",
                }
            })?),
            None => None,
        };
        let key_len = u32::try_from(key_len).map_err(|_| Error::InvalidKekParams {
            context: "key length does not fit in 32 bits",
        })?;

        Ok(Self {
            algorithm,
            party_a_info,
            supp_pub_info: u32_to_be_bytes(key_len).to_vec(),
            counter: KEK_COUNTER_START,
        })
    }

    /// Initialise a KEK from a predefined algorithm bundle
    pub fn from_preset(preset: &KekPreset, party_a_info: Option<&[u8]>) -> Result<Self> {
        Self::new(preset.algorithm, preset.key_len, party_a_info)
    }

    /// Decode a state from its DER `OtherInfo` encoding
    pub fn from_der(bytes: &[u8]) -> Result<Self> {
        other_info::decode_other_info(bytes)
    }

    /// DER `OtherInfo` encoding carrying the current counter
    pub fn to_der(&self) -> Result<Vec<u8>> {
        other_info::encode_other_info(self)
    }

    /// Algorithm the derived keys are for
    pub fn algorithm(&self) -> &ObjectIdentifier {
        &self.algorithm
    }

    /// The 64-byte partyAInfo, if any
    pub fn party_a_info(&self) -> Option<&[u8]> {
        self.party_a_info.as_ref().map(|info| info.as_slice())
    }

    /// Raw suppPubInfo bytes
    pub fn supp_pub_info(&self) -> &[u8] {
        &self.supp_pub_info
    }

    /// Current big-endian counter
    pub fn counter(&self) -> [u8; KEK_COUNTER_SIZE] {
        self.counter
    }

    /// Target key length recovered from suppPubInfo
    ///
    /// Fails with `InvalidKekParams` if the field is not exactly four bytes
    /// or encodes zero.
    pub fn key_len(&self) -> Result<usize> {
        validate::kek_params(
            self.supp_pub_info.len() == KEK_KEY_LENGTH_SIZE,
            "suppPubInfo must hold a 4-byte key length",
        )?;
        let key_len = u32_from_be_bytes(&self.supp_pub_info).ok_or(Error::InvalidKekParams {
            context: "suppPubInfo must hold a 4-byte key length",
        })?;
        validate::kek_params(key_len != 0, "key length is zero")?;
        Ok(key_len as usize)
    }

    /// Derive the next content-encryption key from a DH exchange
    ///
    /// Computes the shared secret between `private_key` and `peer_public_key`
    /// for exactly the target key length, then runs the counter-mode KDF with
    /// hash `D`. Engine errors are returned unchanged. The counter only moves
    /// once the shared secret has been obtained.
    pub fn derive_key<D, R>(
        &mut self,
        rng: &mut R,
        private_key: &DhPrivateKey,
        peer_public_key: &DhPublicKey,
    ) -> Result<Zeroizing<Vec<u8>>>
    where
        D: Digest,
        R: CryptoRng + RngCore,
    {
        let key_len = self.key_len().map_err(|err| {
            tracing::debug!(
                algorithm = %self.algorithm,
                %err,
                "KEK parameters carry no usable key length"
            );
            err
        })?;
        let zz = private_key.shared_secret(rng, peer_public_key, key_len)?;
        self.derive_from_secret::<D>(zz.as_bytes())
    }

    /// Derive the next content-encryption key from an existing shared secret
    ///
    /// `zz` is left-padded to the modulus width before hashing, so secrets
    /// that lost leading zero bytes still derive the same keys. Fails with
    /// `InvalidSharedKey` if `zz` is wider than the modulus.
    pub fn derive_from_secret<D: Digest>(&mut self, zz: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        let key_len = self.key_len()?;
        let width = modulus_byte_len();
        if zz.len() > width {
            return Err(Error::InvalidSharedKey {
                requested: zz.len(),
                available: width,
            });
        }
        let padded = left_pad(zz, width);

        let blocks = key_len.div_ceil(<D as Digest>::output_size());
        let mut key = Zeroizing::new(Vec::with_capacity(blocks * <D as Digest>::output_size()));
        for _ in 0..blocks {
            let other_info = self.to_der()?;
            let mut hasher = D::new();
            hasher.update(padded.as_slice());
            hasher.update(&other_info);
            key.extend_from_slice(&hasher.finalize());
            increment_be_counter(&mut self.counter);
        }
        key.truncate(key_len);

        tracing::trace!(
            algorithm = %self.algorithm,
            key_len,
            blocks,
            counter = u32::from_be_bytes(self.counter),
            "derived content-encryption key"
        );
        Ok(key)
    }
}

impl DhPrivateKey {
    /// Derive the next content-encryption key for `peer_public_key`
    ///
    /// Shorthand for [`KekState::derive_key`].
    pub fn cek<D, R>(
        &self,
        rng: &mut R,
        peer_public_key: &DhPublicKey,
        kek: &mut KekState,
    ) -> Result<Zeroizing<Vec<u8>>>
    where
        D: Digest,
        R: CryptoRng + RngCore,
    {
        kek.derive_key::<D, R>(rng, self, peer_public_key)
    }
}
