//! Tests for the JSON checklist record

use std::fs;

use relman::adapters::JsonFileRepository;
use relman::core::models::{ChecklistState, STANDARD_CATALOG};
use relman::core::ports::ChecklistRepository;
use relman::core::services::ChecklistStore;
use tempfile::TempDir;

fn repo_in(temp: &TempDir) -> JsonFileRepository {
    JsonFileRepository::new(temp.path().join("checklist-storage.json"))
}

// =============================================================================
// ROUND TRIP TESTS
// =============================================================================

#[test]
fn test_state_survives_reload() {
    let temp = TempDir::new().unwrap();

    let mut store = ChecklistStore::open(&STANDARD_CATALOG, repo_in(&temp));
    store.toggle_item("buildkite");
    store.toggle_item("jsmops");
    store.toggle_sub_item("buildkite-tests");
    let before = store.state().clone();
    drop(store);

    let reloaded = ChecklistStore::open(&STANDARD_CATALOG, repo_in(&temp));
    assert_eq!(reloaded.state(), &before);
    assert_eq!(reloaded.completed_count(), 2);
}

#[test]
fn test_reset_survives_reload() {
    let temp = TempDir::new().unwrap();

    let mut store = ChecklistStore::open(&STANDARD_CATALOG, repo_in(&temp));
    store.toggle_item("prod-deploy");
    store.reset();
    drop(store);

    let reloaded = ChecklistStore::open(&STANDARD_CATALOG, repo_in(&temp));
    assert!(reloaded.state().is_empty());
}

#[test]
fn test_record_layout() {
    let temp = TempDir::new().unwrap();
    let repo = repo_in(&temp);

    let mut state = ChecklistState::default();
    state.toggle_item("jsmops");
    state.toggle_sub_item("prod-sanity-login");
    repo.save(&state).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(repo.path()).unwrap()).unwrap();
    assert_eq!(json["checkedItemIds"], serde_json::json!(["jsmops"]));
    assert_eq!(json["checkedSubItemIds"], serde_json::json!(["prod-sanity-login"]));
}

// =============================================================================
// DEGRADED RECORD TESTS
// =============================================================================

#[test]
fn test_missing_record_opens_empty() {
    let temp = TempDir::new().unwrap();
    let store = ChecklistStore::open(&STANDARD_CATALOG, repo_in(&temp));
    assert!(store.state().is_empty());
}

#[test]
fn test_empty_record_opens_empty() {
    let temp = TempDir::new().unwrap();
    let repo = repo_in(&temp);
    fs::write(repo.path(), "").unwrap();

    assert!(repo.load().unwrap().is_none());
    let store = ChecklistStore::open(&STANDARD_CATALOG, repo);
    assert!(store.state().is_empty());
}

#[test]
fn test_corrupt_record_opens_empty() {
    let temp = TempDir::new().unwrap();
    let repo = repo_in(&temp);
    fs::write(repo.path(), r#"{"checkedItemIds": "buildkite"}"#).unwrap();

    let mut store = ChecklistStore::open(&STANDARD_CATALOG, repo);
    assert!(store.state().is_empty());

    // The next write replaces the corrupt record
    store.toggle_item("buildkite");
    let reloaded = ChecklistStore::open(&STANDARD_CATALOG, repo_in(&temp));
    assert!(reloaded.is_item_checked("buildkite"));
}

#[test]
fn test_record_missing_one_array() {
    let temp = TempDir::new().unwrap();
    let repo = repo_in(&temp);
    fs::write(repo.path(), r#"{"checkedSubItemIds": ["buildkite-build"]}"#).unwrap();

    let store = ChecklistStore::open(&STANDARD_CATALOG, repo);
    assert!(store.state().checked_item_ids.is_empty());
    assert!(store.is_sub_item_checked("buildkite-build"));
}

#[test]
fn test_unwritable_location_keeps_change_in_memory() {
    let temp = TempDir::new().unwrap();
    // A regular file where the parent directory should be
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, "").unwrap();
    let repo = JsonFileRepository::new(blocker.join("checklist-storage.json"));

    let mut store = ChecklistStore::open(&STANDARD_CATALOG, repo);
    assert!(store.toggle_item("jsmops"));
    assert!(store.is_item_checked("jsmops"));
    assert!(!store.is_durable());
}
