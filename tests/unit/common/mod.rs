//! Shared test fixtures and helpers

use chrono::NaiveDate;
use relman::core::models::{
    Catalog, ChecklistItemDefinition, ReleaseContext, SubItemDefinition,
};

/// Build a date, panicking on invalid input
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// The release context used throughout the message tests
pub fn cornea_context() -> ReleaseContext {
    ReleaseContext::new("Cornea", "3.99.1", date(2025, 1, 7), "https://example/JSMOPS-123")
}

const DEPLOY_STEPS: &[SubItemDefinition] = &[
    SubItemDefinition::new("deploy-staging", "Deploy to staging"),
    SubItemDefinition::new("deploy-prod", "Deploy to production"),
];

const SMALL_ITEMS: &[ChecklistItemDefinition] = &[
    ChecklistItemDefinition::new("build", "Build", "Prepare"),
    ChecklistItemDefinition::new("deploy", "Deploy", "Ship").with_sub_items(DEPLOY_STEPS),
    ChecklistItemDefinition::new("announce", "Announce", "Ship"),
];

/// A three-item catalog with one nested item
pub static SMALL_CATALOG: Catalog = Catalog::new(SMALL_ITEMS);
