//! Business logic services
//!
//! - [`composer`] - Build the security review and approval messages
//! - [`schedule`] - Next release date rule and date formatting
//! - [`validation`] - Version and JSMOPS number predicates
//! - [`checklist_store`] - Toggle, reset and persist checklist state

pub mod checklist_store;
pub mod composer;
pub mod schedule;
pub mod validation;

pub use checklist_store::ChecklistStore;
pub use composer::compose;
pub use schedule::{format_release_date, next_release_date, parse_iso_date};
pub use validation::{is_valid_jsmops_number, is_valid_version, jsmops_url};
