//! Domain models for relman
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`ReleaseContext`] - What the message templates are filled with
//! - [`ComposedMessages`] - The security review and approval messages
//! - [`ReleaseForm`] - Form values as entered by the release manager
//! - [`Catalog`] - The static release checklist
//! - [`ChecklistState`] - Which checklist ids are checked

mod checklist;
mod form;
mod release;

pub use checklist::{
    Catalog, ChecklistItemDefinition, ChecklistState, ExternalLink, STANDARD_CATALOG, Section,
    SubItemDefinition, sections,
};
pub use form::{ReleaseForm, keys};
pub use release::{
    ComposedMessages, DEFAULT_PROJECT, KNOWN_PROJECTS, MessageKind, ReleaseContext,
    is_known_project,
};
