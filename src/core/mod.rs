//! Core domain logic for relman
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`ReleaseContext`, `ReleaseForm`, checklist catalog and state)
//! - `services/` - Message composition, release date rule, validation, checklist store
//! - `ports/` - Trait definitions for the persisted record and form parameters

pub mod models;
pub mod ports;
pub mod services;
