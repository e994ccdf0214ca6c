//! Integration tests for the relman CLI
//!
//! Each test runs the binary against its own state directory, covering the
//! form, message, checklist and settings commands end to end.


use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const URL_VARS: [&str; 5] = [
    "RELMAN_BUILDKITE_URL",
    "RELMAN_OCTOPUS_URL",
    "RELMAN_JIRA_URL",
    "RELMAN_JSMOPS_URL_PREFIX",
    "RELMAN_SLACK_URL",
];

/// Helper function to create a relman command bound to a state directory
fn relman(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("relman"));
    cmd.env("RELMAN_HOME", home.path()).env("NO_COLOR", "1");
    for var in URL_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// Parse a command's stdout as JSON
fn json_stdout(cmd: &mut assert_cmd::Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

// =============================================================================
// BASIC COMMAND TESTS
// =============================================================================

#[test]
fn test_version_flag() {
    let home = TempDir::new().unwrap();
    relman(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("relman"));
}

#[test]
fn test_version_command() {
    let home = TempDir::new().unwrap();
    relman(&home)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("relman v"));
}

#[test]
fn test_help() {
    let home = TempDir::new().unwrap();
    relman(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fill in the release form once"));
}

#[test]
fn test_no_command_prints_hint() {
    let home = TempDir::new().unwrap();
    relman(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("relman --help"));
}

// =============================================================================
// NEXT DATE TESTS
// =============================================================================

#[test]
fn test_next_date_thursday_to_monday() {
    let home = TempDir::new().unwrap();
    relman(&home)
        .args(["next-date", "--today", "2025-01-09"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-01-13 (13 Jan 2025)"));
}

#[test]
fn test_next_date_tuesday_to_wednesday() {
    let home = TempDir::new().unwrap();
    relman(&home)
        .args(["next-date", "--today", "2025-01-07"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-01-08"));
}

#[test]
fn test_next_date_json() {
    let home = TempDir::new().unwrap();
    let json = json_stdout(relman(&home).args(["--json", "next-date", "--today", "2025-01-11"]));
    assert_eq!(json["next_release_date"], "2025-01-13");
    assert_eq!(json["formatted"], "13 Jan 2025");
}

#[test]
fn test_next_date_rejects_bad_date() {
    let home = TempDir::new().unwrap();
    relman(&home).args(["next-date", "--today", "2025-13-01"]).assert().failure();
}

// =============================================================================
// FORM AND MESSAGE TESTS
// =============================================================================

#[test]
fn test_set_then_messages() {
    let home = TempDir::new().unwrap();

    relman(&home)
        .args(["set", "--version", "3.99.1", "--jsmops", "123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Form updated"));

    relman(&home)
        .args(["messages", "--today", "2025-01-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<Cornea next release security review>"))
        .stdout(predicate::str::contains("Version to deploy: 3.99.1"))
        .stdout(predicate::str::contains("Release Date: 07 Jan 2025"))
        .stdout(predicate::str::contains("JSMOPS-123"))
        .stdout(predicate::str::contains("@techops pls review the next Cornea release"));
}

#[test]
fn test_single_message_is_printed_bare() {
    let home = TempDir::new().unwrap();
    relman(&home)
        .args(["set", "--version", "1.2.3", "--jsmops", "9", "--date", "2025-02-03"])
        .assert()
        .success();

    relman(&home)
        .args(["messages", "--kind", "approval"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<Cornea next version release approval>"))
        .stdout(predicate::str::contains("security review").not())
        .stdout(predicate::str::contains("Release Date: 03 Feb 2025"));
}

#[test]
fn test_messages_fail_on_invalid_form() {
    let home = TempDir::new().unwrap();
    relman(&home).args(["set", "--version", "3.99", "--jsmops", "123"]).assert().success();

    relman(&home)
        .arg("messages")
        .assert()
        .failure()
        .stderr(predicate::str::contains("form is not complete"));
}

#[test]
fn test_draft_messages_on_invalid_form() {
    let home = TempDir::new().unwrap();
    relman(&home).args(["set", "--jsmops", "abc"]).assert().success();

    relman(&home)
        .args(["messages", "--draft", "--today", "2025-01-09"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Release Date: 13 Jan 2025"));
}

#[test]
fn test_show_reports_readiness() {
    let home = TempDir::new().unwrap();
    relman(&home).args(["set", "--version", "3.99.1", "--jsmops", "123"]).assert().success();

    let json = json_stdout(relman(&home).args(["--json", "show", "--today", "2025-01-06"]));
    assert_eq!(json["ready"], true);
    assert_eq!(json["project"], "Cornea");
    assert_eq!(json["release_date"], "2025-01-07");
    assert_eq!(json["date_is_default"], true);
    assert!(json["ticket_url"].as_str().unwrap().ends_with("JSMOPS-123"));
}

#[test]
fn test_show_warns_on_unknown_project() {
    let home = TempDir::new().unwrap();
    relman(&home).args(["set", "--project", "Pupil"]).assert().success();

    let json = json_stdout(relman(&home).args(["--json", "show"]));
    assert_eq!(json["project"], "Pupil");
    assert!(json["warnings"][0].as_str().unwrap().contains("unknown project"));
}

#[test]
fn test_clear_form() {
    let home = TempDir::new().unwrap();
    relman(&home).args(["set", "--version", "3.99.1", "--jsmops", "123"]).assert().success();
    relman(&home)
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("Form cleared."));

    let json = json_stdout(relman(&home).args(["--json", "show"]));
    assert_eq!(json["version"], "");
    assert_eq!(json["ready"], false);
}

// =============================================================================
// CHECKLIST TESTS
// =============================================================================

#[test]
fn test_fresh_checklist() {
    let home = TempDir::new().unwrap();
    relman(&home)
        .arg("checklist")
        .assert()
        .success()
        .stdout(predicate::str::contains("Release Checklist"))
        .stdout(predicate::str::contains("(0 / 10 completed)"));
}

#[test]
fn test_toggle_persists_across_runs() {
    let home = TempDir::new().unwrap();

    relman(&home)
        .args(["toggle", "jsmops"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Checked item jsmops"));

    let json = json_stdout(relman(&home).args(["--json", "checklist"]));
    assert_eq!(json["completed"], 1);
    assert_eq!(json["total"], 10);
    assert_eq!(json["sections"][0]["items"][1]["id"], "jsmops");
    assert_eq!(json["sections"][0]["items"][1]["checked"], true);

    relman(&home)
        .args(["toggle", "jsmops"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unchecked item jsmops"));
}

#[test]
fn test_sub_item_does_not_count() {
    let home = TempDir::new().unwrap();

    relman(&home)
        .args(["toggle", "prod-sanity-login"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Checked sub-item prod-sanity-login"));

    let json = json_stdout(relman(&home).args(["--json", "checklist"]));
    assert_eq!(json["completed"], 0);
}

#[test]
fn test_unknown_id_is_tracked_but_not_counted() {
    let home = TempDir::new().unwrap();
    let json = json_stdout(relman(&home).args(["--json", "toggle", "not-a-task"]));
    assert_eq!(json["checked"], true);
    assert_eq!(json["completed"], 0);
}

#[test]
fn test_reset() {
    let home = TempDir::new().unwrap();
    relman(&home).args(["toggle", "buildkite"]).assert().success();
    relman(&home).args(["toggle", "buildkite-tests"]).assert().success();

    relman(&home)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Checklist reset."));

    let record = fs::read_to_string(home.path().join("checklist-storage.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&record).unwrap();
    assert_eq!(json["checkedItemIds"], serde_json::json!([]));
    assert_eq!(json["checkedSubItemIds"], serde_json::json!([]));
}

#[test]
fn test_corrupt_record_is_tolerated() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("checklist-storage.json"), "{not json").unwrap();

    relman(&home)
        .arg("checklist")
        .assert()
        .success()
        .stdout(predicate::str::contains("(0 / 10 completed)"));
}

// =============================================================================
// SETTINGS TESTS
// =============================================================================

#[test]
fn test_env_development_mode() {
    let home = TempDir::new().unwrap();
    relman(&home)
        .arg("env")
        .assert()
        .success()
        .stdout(predicate::str::contains("Development mode"))
        .stdout(predicate::str::contains("BUILDKITE_URL"));
}

#[test]
fn test_env_override_reaches_messages() {
    let home = TempDir::new().unwrap();
    relman(&home).args(["set", "--version", "3.99.1", "--jsmops", "55"]).assert().success();

    relman(&home)
        .env("RELMAN_JSMOPS_URL_PREFIX", "https://tickets.example/JSMOPS-")
        .args(["messages", "--kind", "security"])
        .assert()
        .success()
        .stdout(predicate::str::contains("JSMOPS Ticket: https://tickets.example/JSMOPS-55"));
}

#[test]
fn test_config_file_override() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("config.toml"),
        "[urls]\nbuildkite = \"https://buildkite.com/acme\"\n",
    )
    .unwrap();

    let json = json_stdout(relman(&home).args(["--json", "env"]));
    assert_eq!(json["links"][0]["url"], "https://buildkite.com/acme");
    assert!(!json["missing"].as_array().unwrap().contains(&serde_json::json!("BUILDKITE_URL")));
}
