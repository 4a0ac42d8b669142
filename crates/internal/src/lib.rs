// File: crates/internal/src/lib.rs
//! Internal utilities for dhkam
//!
//! Byte-level helpers shared by the engine and the KDF: constant-time
//! comparison, big-endian counters and fixed-width padding.

#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;
pub mod padding;

pub use constant_time::ct_eq;
pub use endian::{increment_be_counter, u32_from_be_bytes, u32_to_be_bytes};
pub use padding::left_pad;
