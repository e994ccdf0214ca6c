//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `file/` - JSON file checklist record
//! - `toml/` - TOML-backed form parameters
//! - `memory/` - In-memory record and parameters (tests, dry runs)

pub mod file;
pub mod memory;
pub mod toml;

pub use file::JsonFileRepository;
pub use memory::{MemoryParams, MemoryRepository};
pub use self::toml::FormFile;
