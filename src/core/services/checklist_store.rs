//! Checklist store
//!
//! Owns the runtime checklist state, applies toggles and resets, and writes
//! the record through a [`ChecklistRepository`] after every mutation.
//!
//! Persistence failures never escape: an unreadable record opens as empty,
//! and a failed write keeps the in-memory change and marks the store as not
//! durable until the next successful write.

use crate::core::models::{Catalog, ChecklistState};
use crate::core::ports::ChecklistRepository;

/// Checklist state bound to a catalog and a repository
#[derive(Debug)]
pub struct ChecklistStore<'a, R> {
    catalog: &'a Catalog,
    repo: R,
    state: ChecklistState,
    durable: bool,
}

impl<'a, R: ChecklistRepository> ChecklistStore<'a, R> {
    /// Open the store, reading the persisted record once
    pub fn open(catalog: &'a Catalog, repo: R) -> Self {
        let state = match repo.load() {
            Ok(Some(state)) => state,
            Ok(None) => ChecklistState::default(),
            Err(e) => {
                log::warn!("Discarding unreadable checklist record: {e}");
                ChecklistState::default()
            },
        };
        log::debug!(
            "Opened checklist with {} item(s) and {} sub-item(s) checked",
            state.checked_item_ids.len(),
            state.checked_sub_item_ids.len()
        );

        Self {
            catalog,
            repo,
            state,
            durable: true,
        }
    }

    /// Flip an item, returning whether it is now checked
    pub fn toggle_item(&mut self, id: &str) -> bool {
        if !self.catalog.contains_item(id) {
            log::debug!("Toggling id '{id}' that is not a catalog item");
        }
        let checked = self.state.toggle_item(id);
        self.persist();
        checked
    }

    /// Flip a sub-item, returning whether it is now checked
    ///
    /// The parent item's own state is never affected.
    pub fn toggle_sub_item(&mut self, id: &str) -> bool {
        let checked = self.state.toggle_sub_item(id);
        self.persist();
        checked
    }

    /// Uncheck everything
    pub fn reset(&mut self) {
        self.state.clear();
        self.persist();
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &ChecklistState {
        &self.state
    }

    /// Catalog the store counts against
    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Whether an item is checked
    #[must_use]
    pub fn is_item_checked(&self, id: &str) -> bool {
        self.state.checked_item_ids.contains(id)
    }

    /// Whether a sub-item is checked
    #[must_use]
    pub fn is_sub_item_checked(&self, id: &str) -> bool {
        self.state.checked_sub_item_ids.contains(id)
    }

    /// Checked ids that are top-level catalog items
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.state.checked_item_ids.iter().filter(|id| self.catalog.contains_item(id)).count()
    }

    /// Number of top-level catalog items
    #[must_use]
    pub const fn total_count(&self) -> usize {
        self.catalog.len()
    }

    /// Whether every top-level item is checked
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_count() == self.total_count()
    }

    /// Whether the last write reached the repository
    #[must_use]
    pub const fn is_durable(&self) -> bool {
        self.durable
    }

    /// Give back the repository, e.g. to reopen from it
    pub fn into_repository(self) -> R {
        self.repo
    }

    fn persist(&mut self) {
        match self.repo.save(&self.state) {
            Ok(()) => self.durable = true,
            Err(e) => {
                log::warn!("Checklist change kept in memory but not saved: {e}");
                self.durable = false;
            },
        }
    }
}
