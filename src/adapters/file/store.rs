//! JSON file checklist repository
//!
//! The record is one JSON object:
//!
//! ```json
//! { "checkedItemIds": ["buildkite"], "checkedSubItemIds": ["buildkite-tests"] }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::models::ChecklistState;
use crate::core::ports::ChecklistRepository;
use crate::error::{RelmanError, Result};
use crate::paths;

/// Checklist record stored as a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository for the given file
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a repository at the default location in the state directory
    #[must_use]
    pub fn default_location() -> Self {
        Self::new(paths::checklist_record())
    }

    /// Path of the record
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ChecklistRepository for JsonFileRepository {
    fn load(&self) -> Result<Option<ChecklistState>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(|e| RelmanError::io(&self.path, e))?;
        if content.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn save(&self, state: &ChecklistState) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| RelmanError::io(parent, e))?;
        }
        let content = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, content).map_err(|e| RelmanError::io(&self.path, e))?;
        log::debug!("Saved checklist record to {}", self.path.display());
        Ok(())
    }
}
