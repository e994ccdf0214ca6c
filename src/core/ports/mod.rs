//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and the outside world (state files, form parameters).
//!
//! Implementations live in the `adapters` module.

mod checklist_repo;
mod param_source;

#[cfg(test)]
pub use checklist_repo::MockChecklistRepository;
pub use checklist_repo::ChecklistRepository;
pub use param_source::ParamSource;
