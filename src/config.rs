//! Settings management
//!
//! External URLs the release desk links to. Each has a fallback so the tool
//! works out of the box; values can be overridden in
//! `~/.relman/config.toml` and, with higher precedence, the environment:
//!
//! ```toml
//! [urls]
//! buildkite = "https://buildkite.com/acme"
//! jsmops_prefix = "https://acme.atlassian.net/browse/JSMOPS-"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::models::ExternalLink;
use crate::error::{RelmanError, Result};
use crate::paths;

/// A configurable setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SettingKey {
    /// CI pipelines
    BuildkiteUrl,
    /// Deployment tool
    OctopusUrl,
    /// Issue tracker
    JiraUrl,
    /// Prefix a JSMOPS ticket number is appended to
    JsmopsUrlPrefix,
    /// Messaging app
    SlackUrl,
}

impl SettingKey {
    /// Every setting, in display order
    pub const ALL: [Self; 5] = [
        Self::BuildkiteUrl,
        Self::OctopusUrl,
        Self::JiraUrl,
        Self::JsmopsUrlPrefix,
        Self::SlackUrl,
    ];

    /// Environment variable overriding the setting
    #[must_use]
    pub const fn env_var(self) -> &'static str {
        match self {
            Self::BuildkiteUrl => "RELMAN_BUILDKITE_URL",
            Self::OctopusUrl => "RELMAN_OCTOPUS_URL",
            Self::JiraUrl => "RELMAN_JIRA_URL",
            Self::JsmopsUrlPrefix => "RELMAN_JSMOPS_URL_PREFIX",
            Self::SlackUrl => "RELMAN_SLACK_URL",
        }
    }

    /// Value used when nothing is configured
    #[must_use]
    pub const fn fallback(self) -> &'static str {
        match self {
            Self::BuildkiteUrl => "https://buildkite.com/",
            Self::OctopusUrl => "https://octopus.com/",
            Self::JiraUrl => "https://blockone.atlassian.net/",
            Self::JsmopsUrlPrefix => {
                "https://blockone.atlassian.net/jira/servicedesk/projects/JSMOPS/queues/issue/JSMOPS-"
            },
            Self::SlackUrl => "slack://open",
        }
    }
}

impl std::fmt::Display for SettingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BuildkiteUrl => write!(f, "BUILDKITE_URL"),
            Self::OctopusUrl => write!(f, "OCTOPUS_URL"),
            Self::JiraUrl => write!(f, "JIRA_URL"),
            Self::JsmopsUrlPrefix => write!(f, "JSMOPS_URL_PREFIX"),
            Self::SlackUrl => write!(f, "SLACK_URL"),
        }
    }
}

/// Contents of `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// URL overrides
    #[serde(default)]
    pub urls: UrlOverrides,
}

/// URL overrides from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlOverrides {
    /// Buildkite URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buildkite: Option<String>,
    /// Octopus URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub octopus: Option<String>,
    /// Jira URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jira: Option<String>,
    /// JSMOPS ticket URL prefix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jsmops_prefix: Option<String>,
    /// Slack URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slack: Option<String>,
}

impl UrlOverrides {
    fn get(&self, key: SettingKey) -> Option<&str> {
        match key {
            SettingKey::BuildkiteUrl => self.buildkite.as_deref(),
            SettingKey::OctopusUrl => self.octopus.as_deref(),
            SettingKey::JiraUrl => self.jira.as_deref(),
            SettingKey::JsmopsUrlPrefix => self.jsmops_prefix.as_deref(),
            SettingKey::SlackUrl => self.slack.as_deref(),
        }
    }
}

impl ConfigFile {
    /// Parse a config file
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| RelmanError::io(path, e))?;
        toml::from_str(&content).map_err(|source| RelmanError::TomlDecode {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a config file, or defaults if it is missing or malformed
    #[must_use]
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        Self::read(path).unwrap_or_else(|e| {
            log::warn!("Ignoring config file: {e}");
            Self::default()
        })
    }
}

/// A quick link shown by `relman env`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickLink {
    /// Link label
    pub label: &'static str,
    /// Target URL
    pub url: String,
}

/// Resolved settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Buildkite URL
    pub buildkite_url: String,
    /// Octopus URL
    pub octopus_url: String,
    /// Jira URL
    pub jira_url: String,
    /// Prefix a JSMOPS ticket number is appended to
    pub jsmops_url_prefix: String,
    /// Slack URL
    pub slack_url: String,
    /// Settings supplied by neither the config file nor the environment
    pub missing: Vec<SettingKey>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(&ConfigFile::default(), |_| None)
    }
}

impl Settings {
    /// Load settings from `config.toml` and the process environment
    #[must_use]
    pub fn load() -> Self {
        let file = ConfigFile::load(&paths::config_file());
        Self::resolve(&file, |var| std::env::var(var).ok())
    }

    /// Resolve settings: environment over file over fallback
    ///
    /// Empty values count as not supplied.
    #[must_use]
    pub fn resolve(file: &ConfigFile, env: impl Fn(&str) -> Option<String>) -> Self {
        let mut missing = Vec::new();
        let mut values = SettingKey::ALL.map(|key| {
            env(key.env_var())
                .filter(|v| !v.is_empty())
                .or_else(|| file.urls.get(key).filter(|v| !v.is_empty()).map(String::from))
                .unwrap_or_else(|| {
                    missing.push(key);
                    key.fallback().to_string()
                })
        });

        Self {
            buildkite_url: std::mem::take(&mut values[0]),
            octopus_url: std::mem::take(&mut values[1]),
            jira_url: std::mem::take(&mut values[2]),
            jsmops_url_prefix: std::mem::take(&mut values[3]),
            slack_url: std::mem::take(&mut values[4]),
            missing,
        }
    }

    /// Value of one setting
    #[must_use]
    pub fn get(&self, key: SettingKey) -> &str {
        match key {
            SettingKey::BuildkiteUrl => &self.buildkite_url,
            SettingKey::OctopusUrl => &self.octopus_url,
            SettingKey::JiraUrl => &self.jira_url,
            SettingKey::JsmopsUrlPrefix => &self.jsmops_url_prefix,
            SettingKey::SlackUrl => &self.slack_url,
        }
    }

    /// Whether every setting was supplied explicitly
    #[must_use]
    pub fn is_fully_configured(&self) -> bool {
        self.missing.is_empty()
    }

    /// Resolve a checklist link; the ticket link needs a ticket URL
    #[must_use]
    pub fn link(&self, link: ExternalLink, ticket_reference: &str) -> Option<String> {
        match link {
            ExternalLink::Buildkite => Some(self.buildkite_url.clone()),
            ExternalLink::Octopus => Some(self.octopus_url.clone()),
            ExternalLink::Jira => Some(self.jira_url.clone()),
            ExternalLink::Ticket => {
                (!ticket_reference.is_empty()).then(|| ticket_reference.to_string())
            },
        }
    }

    /// Quick links to the release tooling
    #[must_use]
    pub fn external_links(&self) -> Vec<QuickLink> {
        vec![
            QuickLink {
                label: "Buildkite",
                url: self.buildkite_url.clone(),
            },
            QuickLink {
                label: "Octopus",
                url: self.octopus_url.clone(),
            },
            QuickLink {
                label: "Jira",
                url: self.jira_url.clone(),
            },
        ]
    }
}
