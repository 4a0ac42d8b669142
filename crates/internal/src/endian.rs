// File: crates/internal/src/endian.rs
//! Big-endian helpers

/// Read a big-endian u32.
///
/// Returns `None` unless the slice is exactly four bytes long.
pub fn u32_from_be_bytes(bytes: &[u8]) -> Option<u32> {
    let array: [u8; 4] = bytes.try_into().ok()?;
    Some(u32::from_be_bytes(array))
}

/// Convert a u32 to big-endian bytes
pub fn u32_to_be_bytes(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

/// Increment a big-endian counter by one, carrying from the last byte
/// towards the first. An all-`0xFF` counter wraps to all zeroes.
pub fn increment_be_counter(counter: &mut [u8]) {
    for byte in counter.iter_mut().rev() {
        let (next, carry) = byte.overflowing_add(1);
        *byte = next;
        if !carry {
            return;
        }
    }
}
