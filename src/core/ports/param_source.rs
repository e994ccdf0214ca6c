//! Form parameter port
//!
//! An external key-value source: read on startup, written on every change.

use crate::error::Result;

/// Key-value storage for form fields
pub trait ParamSource {
    /// Current value for `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Forget `key`
    fn remove(&mut self, key: &str) -> Result<()>;
}
