// File: tests/src/vectors.rs
//! Known-answer values for Group 14 with the blinding offset applied
//!
//! Computed independently as `g^(2^258 + x) mod P` and fed through the
//! RFC 2631 construction with SHA-256.

/// Private exponent 01 02 .. 20
pub fn exponent_a() -> Vec<u8> {
    (1u8..=32).collect()
}

/// Private exponent 20 1f .. 01
pub fn exponent_b() -> Vec<u8> {
    (1u8..=32).rev().collect()
}

/// SHA-256 of the public key for [`exponent_a`]
pub const PUBLIC_A_SHA256: &str =
    "aaf3b98424474a851c761c7ba2dbecf9ccdce7bd8e00dee6dd640ff105422fe2";

/// Leading 96 bytes of the shared secret between the two exponents
pub const SHARED_SECRET_96: &str = "\
38e4ec6b3b05a2769d33f774235b118c089d4a282b71e83f745b579f53ea747a\
b5ebf37c2e3374165c3b0ee5ea10f8241546a08b5d7c8ceb7e39be213b4f61ef\
672d71a95dfec16c91643f8ec339857360462a2fdab76c6ae122b02e271a5d47";

/// First two 96-byte AES-256-CBC CEKs of that exchange
pub const CEKS_AES256_CBC_96: [&str; 2] = [
    "ac1bf3df05e5e53bb388422c984ca9341a43ffcf3134622be556b726252f101d\
a95b68936847a69a88d6b5f364097c4013dd45fc94f43a622e49b4c0a3f29786\
efd3336b1904a659f78d7dfb6cf80948cc7591f067f39a66f8d1959030382b0c",
    "ad2ae271c2b7e073d5ddc7bcc18b7a20c3f3316297ce773d8ea50d11398b213a\
e693d10b7d2b2a9184977cdd6f881e376ca178a8941c202f6e486c539641e301\
0d791a9ed13cfde92b4c5be36107fc9b4c5083ea9ce6501be0cbc367079f5e52",
];
