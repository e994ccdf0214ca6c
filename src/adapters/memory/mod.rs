//! In-memory adapters

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::core::models::ChecklistState;
use crate::core::ports::{ChecklistRepository, ParamSource};
use crate::error::Result;

/// Checklist record held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    record: RefCell<Option<ChecklistState>>,
}

impl MemoryRepository {
    /// Start with an existing record
    #[must_use]
    pub const fn with_record(state: ChecklistState) -> Self {
        Self {
            record: RefCell::new(Some(state)),
        }
    }

    /// Current record, if one was saved
    #[must_use]
    pub fn record(&self) -> Option<ChecklistState> {
        self.record.borrow().clone()
    }
}

impl ChecklistRepository for MemoryRepository {
    fn load(&self) -> Result<Option<ChecklistState>> {
        Ok(self.record())
    }

    fn save(&self, state: &ChecklistState) -> Result<()> {
        *self.record.borrow_mut() = Some(state.clone());
        Ok(())
    }
}

/// Form parameters held in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryParams {
    values: BTreeMap<String, String>,
}

impl MemoryParams {
    /// All stored values
    #[must_use]
    pub const fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }
}

impl ParamSource for MemoryParams {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}
