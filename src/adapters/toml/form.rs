//! Form parameter file
//!
//! Stores form fields as a flat TOML table, rewritten on every change:
//!
//! ```toml
//! date = "2025-01-07"
//! jsmops = "123"
//! version = "3.99.1"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::ports::ParamSource;
use crate::error::{RelmanError, Result};
use crate::paths;

/// Form parameters persisted in a TOML file
#[derive(Debug, Clone)]
pub struct FormFile {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FormFile {
    /// Open the file, starting empty if it is missing or malformed
    #[must_use]
    pub fn open(path: PathBuf) -> Self {
        let values = match Self::read_values(&path) {
            Ok(values) => values,
            Err(e) => {
                log::warn!("Starting with an empty form: {e}");
                BTreeMap::new()
            },
        };
        Self { path, values }
    }

    /// Open the file at the default location in the state directory
    #[must_use]
    pub fn default_location() -> Self {
        Self::open(paths::form_file())
    }

    /// Path of the file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_values(path: &Path) -> Result<BTreeMap<String, String>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(path).map_err(|e| RelmanError::io(path, e))?;
        toml::from_str(&content).map_err(|source| RelmanError::TomlDecode {
            path: path.to_path_buf(),
            source,
        })
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| RelmanError::io(parent, e))?;
        }
        let content = toml::to_string(&self.values)?;
        fs::write(&self.path, content).map_err(|e| RelmanError::io(&self.path, e))
    }
}

impl ParamSource for FormFile {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.values.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.values.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
