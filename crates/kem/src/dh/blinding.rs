// File: crates/kem/src/dh/blinding.rs
//! Blinded modular exponentiation
//!
//! `y = a^x mod P` is never computed directly for a private `x`. Each call
//! draws a fresh 256-bit `r` and evaluates
//!
//! ```text
//! blinding   = 2^256 + r
//! complement = (2^258 + x) - blinding
//! y          = a^blinding * a^complement mod P
//! ```
//!
//! The two exponents sum to `2^258 + x`, so the result is
//! `a^(2^258 + x) mod P`. The same offset is applied on the public-key and
//! shared-secret paths, which keeps the exchange symmetric.

use super::{prime, BLINDING_FLOOR, BLINDING_OFFSET};
use dhkam_api::error::{validate, Error, Result};
use dhkam_params::DH_BLINDING_BITS;
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

/// Draw `len` random bytes and read them as a big-endian integer.
pub(crate) fn random_biguint<R: CryptoRng + RngCore>(
    rng: &mut R,
    len: usize,
    context: &'static str,
) -> Result<BigUint> {
    let mut buf = Zeroizing::new(vec![0u8; len]);
    rng.try_fill_bytes(&mut buf).map_err(|err| {
        tracing::debug!(%err, context, "random source failed");
        Error::BlindingFailed { context }
    })?;
    Ok(BigUint::from_bytes_be(&buf))
}

/// Compute `base^(2^258 + exponent) mod P` with a per-call random split.
pub(crate) fn blind<R: CryptoRng + RngCore>(
    rng: &mut R,
    base: &BigUint,
    exponent: &BigUint,
) -> Result<BigUint> {
    let modulus = prime();

    let r = random_biguint(rng, DH_BLINDING_BITS / 8, "blinding draw")?;
    let blinding = &*BLINDING_FLOOR + r;

    // 2^258 > 2^256 + r for every 256-bit r, so this never underflows
    let complement = (&*BLINDING_OFFSET + exponent) - &blinding;

    let base = base % modulus;
    let r1 = base.modpow(&blinding, modulus);
    let r2 = base.modpow(&complement, modulus);
    let y = (r1 * r2) % modulus;

    validate::blinding(y.bits() <= modulus.bits(), "blinded result exceeds modulus")?;
    Ok(y)
}
