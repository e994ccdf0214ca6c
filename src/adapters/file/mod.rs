//! File-based checklist storage
//!
//! Implements `ChecklistRepository` using a single JSON file.

mod store;

pub use store::JsonFileRepository;
