//! Checklist repository port
//!
//! Defines the interface for loading and saving the persisted checklist record.

use super::super::models::ChecklistState;
use crate::error::Result;

/// Durable storage for the checklist record
///
/// Implementations decide where the single named record lives (a JSON file,
/// memory, ...). The store reads once at startup and writes after every
/// mutation; last writer wins.
#[cfg_attr(test, mockall::automock)]
pub trait ChecklistRepository {
    /// Read the record
    ///
    /// Returns `Ok(None)` when no record has been written yet.
    fn load(&self) -> Result<Option<ChecklistState>>;

    /// Replace the record
    fn save(&self, state: &ChecklistState) -> Result<()>;
}
