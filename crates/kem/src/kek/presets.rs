// File: crates/kem/src/kek/presets.rs
//! Predefined algorithm bundles
//!
//! Each preset pairs a content-encryption algorithm with the total number of
//! key bytes a CEK must supply for it. CBC bundles carry an HMAC key after
//! the cipher key; GCM bundles need only the cipher key.

use super::oid::{self, ObjectIdentifier};
use dhkam_params::utils::hash::{SHA256_OUTPUT_SIZE, SHA384_OUTPUT_SIZE, SHA512_OUTPUT_SIZE};
use dhkam_params::utils::symmetric::{AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE};

/// An algorithm identifier together with its required key length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KekPreset {
    /// Human-readable bundle name
    pub name: &'static str,
    /// Algorithm placed in KeySpecificInfo
    pub algorithm: ObjectIdentifier,
    /// Key length in bytes placed in suppPubInfo
    pub key_len: usize,
}

/// AES-128-CBC with an HMAC-SHA256 key
pub const AES128_CBC_HMAC_SHA256: KekPreset = KekPreset {
    name: "AES128-CBC-HMAC-SHA256",
    algorithm: oid::AES128_CBC,
    key_len: AES128_KEY_SIZE + SHA256_OUTPUT_SIZE,
};

/// AES-192-CBC with an HMAC-SHA384 key
pub const AES192_CBC_HMAC_SHA384: KekPreset = KekPreset {
    name: "AES192-CBC-HMAC-SHA384",
    algorithm: oid::AES192_CBC,
    key_len: AES192_KEY_SIZE + SHA384_OUTPUT_SIZE,
};

/// AES-256-CBC with an HMAC-SHA512 key
pub const AES256_CBC_HMAC_SHA512: KekPreset = KekPreset {
    name: "AES256-CBC-HMAC-SHA512",
    algorithm: oid::AES256_CBC,
    key_len: AES256_KEY_SIZE + SHA512_OUTPUT_SIZE,
};

/// AES-128-GCM
pub const AES128_GCM: KekPreset = KekPreset {
    name: "AES128-GCM",
    algorithm: oid::AES128_GCM,
    key_len: AES128_KEY_SIZE,
};

/// AES-192-GCM
pub const AES192_GCM: KekPreset = KekPreset {
    name: "AES192-GCM",
    algorithm: oid::AES192_GCM,
    key_len: AES192_KEY_SIZE,
};

/// AES-256-GCM
pub const AES256_GCM: KekPreset = KekPreset {
    name: "AES256-GCM",
    algorithm: oid::AES256_GCM,
    key_len: AES256_KEY_SIZE,
};
