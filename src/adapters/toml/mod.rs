//! TOML-backed form parameters
//!
//! Implements `ParamSource` using a flat TOML table of strings.

mod form;

pub use form::FormFile;
