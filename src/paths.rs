//! Centralized path definitions for relman
//!
//! All state lives in a single per-user directory:
//!
//! ```text
//! ~/.relman/                      # or $RELMAN_HOME
//! ├── config.toml                 # URL overrides
//! ├── form.toml                   # Current form values (version, date, jsmops, project)
//! └── checklist-storage.json      # Checked item and sub-item ids
//! ```

use std::path::PathBuf;

/// Environment variable that relocates the state directory
pub const RELMAN_HOME_ENV: &str = "RELMAN_HOME";

/// Default state directory name under the user's home
const STATE_DIR: &str = ".relman";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Form values filename
const FORM_FILE: &str = "form.toml";

/// Persisted checklist record filename
const CHECKLIST_FILE: &str = "checklist-storage.json";

/// Get the state directory.
///
/// Returns `$RELMAN_HOME` when set and non-empty, otherwise `~/.relman/`.
#[must_use]
pub fn state_dir() -> PathBuf {
    match std::env::var_os(RELMAN_HOME_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(STATE_DIR),
    }
}

/// Get the config file path.
#[must_use]
pub fn config_file() -> PathBuf {
    state_dir().join(CONFIG_FILE)
}

/// Get the form values file path.
#[must_use]
pub fn form_file() -> PathBuf {
    state_dir().join(FORM_FILE)
}

/// Get the persisted checklist record path.
#[must_use]
pub fn checklist_record() -> PathBuf {
    state_dir().join(CHECKLIST_FILE)
}
