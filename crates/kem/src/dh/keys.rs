// File: crates/kem/src/dh/keys.rs
//! Key and shared-secret types for Group 14 Diffie-Hellman

use super::blinding::{blind, random_biguint};
use super::{generator, prime, prime_minus_one};
use core::fmt;
use dhkam_api::error::{validate, Error, Result, ResultExt};
use dhkam_api::{Serialize, SerializeSecret};
use dhkam_internal::ct_eq;
use dhkam_params::DH_PRIVATE_KEY_BYTES;
use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Public key: a single group element `A`
#[derive(Clone)]
pub struct DhPublicKey {
    element: BigUint,
}

/// Private key: the secret exponent `X` and the public key derived from it
#[derive(Clone)]
pub struct DhPrivateKey {
    exponent: BigUint,
    public: DhPublicKey,
}

/// Shared secret produced by one exchange
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DhSharedSecret(Vec<u8>);

impl DhPublicKey {
    /// Import a public key from minimal big-endian bytes
    ///
    /// # Returns
    /// * `Ok(PublicKey)` if the element passes [`DhPublicKey::is_valid`]
    /// * `Err(InvalidPublicKey)` otherwise
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let public = Self {
            element: BigUint::from_bytes_be(bytes),
        };
        validate::public_key(public.is_valid(), "DhPublicKey::from_bytes")?;
        Ok(public)
    }

    /// Export the public key as minimal big-endian bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        self.element.to_bytes_be()
    }

    /// Sanity check: `0 < A` and `bits(A) <= bits(P)`.
    ///
    /// # Security Note
    /// Necessary but not sufficient. Subgroup membership is not checked.
    pub fn is_valid(&self) -> bool {
        !self.element.is_zero() && self.element.bits() <= prime().bits()
    }

    pub(crate) fn element(&self) -> &BigUint {
        &self.element
    }

    #[cfg(test)]
    pub(crate) fn from_element_unchecked(element: BigUint) -> Self {
        Self { element }
    }
}

impl PartialEq for DhPublicKey {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.to_bytes(), other.to_bytes())
    }
}

impl Eq for DhPublicKey {}

impl fmt::Debug for DhPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DhPublicKey")
            .field("bits", &self.element.bits())
            .finish()
    }
}

impl Serialize for DhPublicKey {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        DhPublicKey::from_bytes(bytes)
    }

    fn to_bytes(&self) -> Vec<u8> {
        DhPublicKey::to_bytes(self)
    }
}

impl DhPrivateKey {
    /// Generate a fresh key pair
    ///
    /// Samples 256-bit candidates until one lies in `(0, P-1]`, then derives
    /// the public key with a blinded exponentiation of the generator.
    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self> {
        let exponent = loop {
            let candidate = random_biguint(rng, DH_PRIVATE_KEY_BYTES, "private key sampling")?;
            if candidate.is_zero() || &candidate > prime_minus_one() {
                tracing::debug!("private exponent candidate out of range, resampling");
                continue;
            }
            break candidate;
        };

        let public = derive_public(rng, &exponent)?;
        Ok(Self { exponent, public })
    }

    /// Import a private key from big-endian bytes and regenerate its public key
    ///
    /// # Security
    /// The input bytes should be treated as sensitive material and zeroized
    /// after use. Regeneration is blinded, hence the RNG.
    pub fn from_bytes<R: CryptoRng + RngCore>(rng: &mut R, bytes: &[u8]) -> Result<Self> {
        let exponent = BigUint::from_bytes_be(bytes);
        validate::private_key(
            !exponent.is_zero() && &exponent <= prime_minus_one(),
            "private exponent out of range",
        )?;

        let public = derive_public(rng, &exponent).wrap_err(|| Error::InvalidPrivateKey {
            context: "public key regeneration failed",
        })?;
        Ok(Self { exponent, public })
    }

    /// Recompute the public key for the stored exponent
    pub fn regenerate_public<R: CryptoRng + RngCore>(&mut self, rng: &mut R) -> Result<()> {
        self.public = derive_public(rng, &self.exponent).wrap_err(|| Error::InvalidPrivateKey {
            context: "public key regeneration failed",
        })?;
        Ok(())
    }

    /// The public key belonging to this private key
    pub fn public_key(&self) -> &DhPublicKey {
        &self.public
    }

    /// Export the private exponent as minimal big-endian bytes
    ///
    /// # Security
    /// The returned value is zeroized when dropped.
    pub fn export_private(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.exponent.to_bytes_be())
    }

    /// Export the public key as minimal big-endian bytes
    pub fn export_public(&self) -> Vec<u8> {
        self.public.to_bytes()
    }

    /// Compute `length` bytes of shared secret with a peer public key
    ///
    /// The peer key is validated first. The result is the leading `length`
    /// bytes of the minimal big-endian encoding of the blinded
    /// exponentiation; if that encoding is shorter than `length` the call
    /// fails with `InvalidSharedKey` instead of padding.
    pub fn shared_secret<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
        peer_public_key: &DhPublicKey,
        length: usize,
    ) -> Result<DhSharedSecret> {
        validate::public_key(peer_public_key.is_valid(), "peer public key")?;

        let z = blind(rng, peer_public_key.element(), &self.exponent)?;
        let bytes = Zeroizing::new(z.to_bytes_be());
        if bytes.len() < length {
            tracing::debug!(
                requested = length,
                available = bytes.len(),
                "shared secret shorter than requested"
            );
        }
        validate::shared_key(length, bytes.len())?;

        Ok(DhSharedSecret(bytes[..length].to_vec()))
    }
}

impl fmt::Debug for DhPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DhPrivateKey")
            .field("exponent", &"[REDACTED]")
            .field("public", &self.public)
            .finish()
    }
}

fn derive_public<R: CryptoRng + RngCore>(rng: &mut R, exponent: &BigUint) -> Result<DhPublicKey> {
    let public = DhPublicKey {
        element: blind(rng, generator(), exponent)?,
    };
    validate::public_key(public.is_valid(), "derived public key")?;
    Ok(public)
}

impl DhSharedSecret {
    /// Wrap raw shared-secret bytes
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Get the length of the shared secret
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the shared secret is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the shared secret bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl SerializeSecret for DhSharedSecret {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self(bytes.to_vec()))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.clone())
    }
}

impl fmt::Debug for DhSharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DhSharedSecret([REDACTED; {}])", self.0.len())
    }
}
