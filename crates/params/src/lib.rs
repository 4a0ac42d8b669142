// File: crates/params/src/lib.rs
//! Constant values for dhkam
//!
//! Group parameters, blinding widths, KEK framing sizes, algorithm object
//! identifiers and symmetric/hash sizes shared across the workspace.

#![no_std]

pub mod traditional;
pub mod utils;

pub use traditional::dh::{
    DH_2048_BYTE_LENGTH, DH_2048_GENERATOR, DH_2048_PRIME, DH_BLINDING_BITS,
    DH_BLINDING_OFFSET_BITS, DH_MODULUS_2048, DH_PRIVATE_KEY_BYTES,
};
pub use traditional::kek::{KEK_COUNTER_SIZE, KEK_KEY_LENGTH_SIZE, PARTY_A_INFO_SIZE};
