// File: crates/internal/src/padding.rs
//! Fixed-width padding

use zeroize::Zeroizing;

/// Right-align `input` in a zeroed buffer of `size` bytes.
///
/// Inputs longer than `size` keep only their first `size` bytes; callers
/// that must not lose data check the length beforehand.
pub fn left_pad(input: &[u8], size: usize) -> Zeroizing<Vec<u8>> {
    let n = input.len().min(size);
    let mut out = Zeroizing::new(vec![0u8; size]);
    out[size - n..].copy_from_slice(&input[..n]);
    out
}
