// File: crates/params/src/traditional/kek.rs
//! Constants for RFC 2631 KEK derivation

/// Required size of the optional partyAInfo field
pub const PARTY_A_INFO_SIZE: usize = 64;

/// Size of the big-endian counter in KeySpecificInfo
pub const KEK_COUNTER_SIZE: usize = 4;

/// Size of the big-endian key length carried in suppPubInfo
pub const KEK_KEY_LENGTH_SIZE: usize = 4;

/// Initial counter value
pub const KEK_COUNTER_START: [u8; KEK_COUNTER_SIZE] = [0, 0, 0, 1];

// NIST AES object identifiers (2.16.840.1.101.3.1.x)

/// id-aes128-CBC
pub const AES128_CBC_OID: &str = "2.16.840.1.101.3.1.2";

/// id-aes128-GCM
pub const AES128_GCM_OID: &str = "2.16.840.1.101.3.1.6";

/// id-aes192-CBC
pub const AES192_CBC_OID: &str = "2.16.840.1.101.3.1.22";

/// id-aes192-GCM
pub const AES192_GCM_OID: &str = "2.16.840.1.101.3.1.26";

/// id-aes256-CBC
pub const AES256_CBC_OID: &str = "2.16.840.1.101.3.1.42";

/// id-aes256-GCM
pub const AES256_GCM_OID: &str = "2.16.840.1.101.3.1.46";
