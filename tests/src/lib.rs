// File: tests/src/lib.rs
//! Shared fixtures for the dhkam integration tests
pub mod vectors;

use dhkam_api::Result;
use dhkam_kem::{DhPrivateKey, DhPublicKey, KekPreset, KekState};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sha2::Sha256;
use zeroize::Zeroizing;

/// Deterministic RNG for reproducible runs
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// One side of an exchange: a key pair and its own KEK state
pub struct Party {
    pub private: DhPrivateKey,
    pub kek: KekState,
}

impl Party {
    /// Fresh key pair with a KEK initialised from `preset`
    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R, preset: &KekPreset) -> Result<Self> {
        Ok(Self {
            private: DhPrivateKey::generate(rng)?,
            kek: KekState::from_preset(preset, None)?,
        })
    }

    /// Imported key pair with a KEK initialised from `preset`
    pub fn import<R: CryptoRng + RngCore>(
        rng: &mut R,
        exponent: &[u8],
        preset: &KekPreset,
    ) -> Result<Self> {
        Ok(Self {
            private: DhPrivateKey::from_bytes(rng, exponent)?,
            kek: KekState::from_preset(preset, None)?,
        })
    }

    pub fn public_key(&self) -> &DhPublicKey {
        self.private.public_key()
    }

    /// Next SHA-256 content-encryption key towards `peer`
    pub fn next_cek<R: CryptoRng + RngCore>(
        &mut self,
        rng: &mut R,
        peer: &DhPublicKey,
    ) -> Result<Zeroizing<Vec<u8>>> {
        self.private.cek::<Sha256, R>(rng, peer, &mut self.kek)
    }
}
