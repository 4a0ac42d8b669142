// File: crates/api/src/traits/mod.rs
//! Trait definitions shared by the dhkam crates

pub mod key_agreement;
pub mod serialize;

pub use key_agreement::KeyAgreement;
pub use serialize::{Serialize, SerializeSecret};
