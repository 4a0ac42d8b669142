// File: crates/params/src/traditional/mod.rs
//! Constants for traditional key agreement

pub mod dh;
pub mod kek;
