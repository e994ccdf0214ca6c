//! Release form
//!
//! The four values a release manager fills in. They are read from and
//! written back to a [`ParamSource`], so they survive between runs.

use chrono::NaiveDate;
use serde::Serialize;

use super::{DEFAULT_PROJECT, ReleaseContext, is_known_project};
use crate::core::ports::ParamSource;
use crate::core::services::{
    is_valid_jsmops_number, is_valid_version, jsmops_url, next_release_date, parse_iso_date,
};
use crate::error::{RelmanError, Result};

/// Parameter keys, as stored by the form layer
pub mod keys {
    /// Release version
    pub const VERSION: &str = "version";
    /// Release date (YYYY-MM-DD)
    pub const DATE: &str = "date";
    /// JSMOPS ticket number (digits only, not the URL)
    pub const JSMOPS: &str = "jsmops";
    /// Project name
    pub const PROJECT: &str = "project";
}

/// Current form values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReleaseForm {
    /// Project name; empty means the default project
    pub project: String,

    /// Raw version string
    pub version: String,

    /// Chosen release date; none means the next release date
    pub date: Option<NaiveDate>,

    /// Raw JSMOPS ticket number
    pub jsmops: String,
}

impl ReleaseForm {
    /// Read the form from a parameter source
    ///
    /// Absent keys read as empty. A date that does not parse is dropped
    /// so the next release date applies instead.
    #[must_use]
    pub fn read(source: &dyn ParamSource) -> Self {
        let date = source.get(keys::DATE).and_then(|raw| {
            let parsed = parse_iso_date(&raw).ok();
            if parsed.is_none() {
                log::warn!("Ignoring unparseable release date '{raw}'");
            }
            parsed
        });

        Self {
            project: source.get(keys::PROJECT).unwrap_or_default(),
            version: source.get(keys::VERSION).unwrap_or_default(),
            date,
            jsmops: source.get(keys::JSMOPS).unwrap_or_default(),
        }
    }

    /// Write every field back; empty fields are removed
    pub fn write(&self, sink: &mut dyn ParamSource) -> Result<()> {
        let date = self.date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default();
        for (key, value) in [
            (keys::PROJECT, self.project.as_str()),
            (keys::VERSION, self.version.as_str()),
            (keys::DATE, date.as_str()),
            (keys::JSMOPS, self.jsmops.as_str()),
        ] {
            if value.is_empty() {
                sink.remove(key)?;
            } else {
                sink.set(key, value)?;
            }
        }
        Ok(())
    }

    /// Project name with the default applied
    #[must_use]
    pub fn project_or_default(&self) -> &str {
        if self.project.is_empty() { DEFAULT_PROJECT } else { &self.project }
    }

    /// Release date with the next-release-date rule applied
    #[must_use]
    pub fn date_or_next(&self, today: NaiveDate) -> NaiveDate {
        self.date.unwrap_or_else(|| next_release_date(today))
    }

    /// Validation errors that keep the messages from being ready
    #[must_use]
    pub fn validate(&self) -> Vec<RelmanError> {
        let mut errors = Vec::new();
        if !is_valid_version(&self.version) {
            errors.push(RelmanError::InvalidVersion(self.version.clone()));
        }
        if !is_valid_jsmops_number(&self.jsmops) {
            errors.push(RelmanError::InvalidJsmops(self.jsmops.clone()));
        }
        errors
    }

    /// Whether the composed messages can be used as-is
    #[must_use]
    pub fn is_ready(&self) -> bool {
        is_valid_version(&self.version) && is_valid_jsmops_number(&self.jsmops)
    }

    /// Whether the project is one of the known ones
    #[must_use]
    pub fn has_known_project(&self) -> bool {
        is_known_project(self.project_or_default())
    }

    /// Build the message composer input
    #[must_use]
    pub fn context(&self, jsmops_prefix: &str, today: NaiveDate) -> ReleaseContext {
        ReleaseContext::new(
            self.project_or_default(),
            self.version.clone(),
            self.date_or_next(today),
            jsmops_url(jsmops_prefix, &self.jsmops),
        )
    }
}
