// File: crates/api/src/error/traits.rs
//! Error handling traits

use super::types::Error;

/// Extension trait for Result types
pub trait ResultExt<T, E>: Sized {
    /// Replace any error with the one produced by `f`
    fn wrap_err<F>(self, f: F) -> core::result::Result<T, Error>
    where
        F: FnOnce() -> Error;
}

impl<T, E> ResultExt<T, E> for core::result::Result<T, E> {
    fn wrap_err<F>(self, f: F) -> core::result::Result<T, Error>
    where
        F: FnOnce() -> Error,
    {
        self.map_err(|_| f())
    }
}
