// File: crates/params/src/utils/mod.rs
//! Size constants for the symmetric algorithms the KEK presets target

pub mod hash;
pub mod symmetric;
