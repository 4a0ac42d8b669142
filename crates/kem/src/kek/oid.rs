// File: crates/kem/src/kek/oid.rs
//! ASN.1 object identifiers for KEK algorithms

pub use const_oid::ObjectIdentifier;

use dhkam_params::traditional::kek::{
    AES128_CBC_OID, AES128_GCM_OID, AES192_CBC_OID, AES192_GCM_OID, AES256_CBC_OID,
    AES256_GCM_OID,
};

/// id-aes128-CBC (2.16.840.1.101.3.1.2)
pub const AES128_CBC: ObjectIdentifier = ObjectIdentifier::new_unwrap(AES128_CBC_OID);
/// id-aes128-GCM (2.16.840.1.101.3.1.6)
pub const AES128_GCM: ObjectIdentifier = ObjectIdentifier::new_unwrap(AES128_GCM_OID);
/// id-aes192-CBC (2.16.840.1.101.3.1.22)
pub const AES192_CBC: ObjectIdentifier = ObjectIdentifier::new_unwrap(AES192_CBC_OID);
/// id-aes192-GCM (2.16.840.1.101.3.1.26)
pub const AES192_GCM: ObjectIdentifier = ObjectIdentifier::new_unwrap(AES192_GCM_OID);
/// id-aes256-CBC (2.16.840.1.101.3.1.42)
pub const AES256_CBC: ObjectIdentifier = ObjectIdentifier::new_unwrap(AES256_CBC_OID);
/// id-aes256-GCM (2.16.840.1.101.3.1.46)
pub const AES256_GCM: ObjectIdentifier = ObjectIdentifier::new_unwrap(AES256_GCM_OID);
