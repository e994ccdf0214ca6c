//! Release context and composed messages
//!
//! A release context is everything the message templates need: which project,
//! which version, when, and where the JSMOPS ticket lives.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Project used when the form does not name one
pub const DEFAULT_PROJECT: &str = "Cornea";

/// Projects the release desk knows about. Any other name is accepted as free text.
pub const KNOWN_PROJECTS: &[&str] = &["Cornea", "Iris"];

/// Whether `name` is one of [`KNOWN_PROJECTS`]
#[must_use]
pub fn is_known_project(name: &str) -> bool {
    KNOWN_PROJECTS.contains(&name)
}

/// Input to the message composer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseContext {
    /// Project name (e.g., "Cornea")
    pub project: String,

    /// Version to deploy, expected as digits.digits.digits
    pub version: String,

    /// Calendar day of the release
    pub release_date: NaiveDate,

    /// Full JSMOPS ticket URL, or empty
    pub ticket_reference: String,
}

impl ReleaseContext {
    /// Create a new release context
    #[must_use]
    pub fn new(
        project: impl Into<String>,
        version: impl Into<String>,
        release_date: NaiveDate,
        ticket_reference: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            version: version.into(),
            release_date,
            ticket_reference: ticket_reference.into(),
        }
    }

    /// Compose both notification messages for this context
    #[must_use]
    pub fn compose(&self) -> ComposedMessages {
        crate::core::services::compose(
            &self.project,
            &self.version,
            self.release_date,
            &self.ticket_reference,
        )
    }
}

/// Which of the two composed messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Message asking security reviewers to look at the release
    Security,
    /// Message asking techops to approve the release
    Approval,
}

impl MessageKind {
    /// Both kinds, in display order
    pub const ALL: [Self; 2] = [Self::Security, Self::Approval];

    /// Human-readable title of the message
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Security => "Security Review Message",
            Self::Approval => "Release Approval Message",
        }
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Security => write!(f, "security"),
            Self::Approval => write!(f, "approval"),
        }
    }
}

impl std::str::FromStr for MessageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "security" | "security-review" => Ok(Self::Security),
            "approval" => Ok(Self::Approval),
            _ => Err(format!("Invalid message kind: {s}. Use: security, approval")),
        }
    }
}

/// The security review and approval messages, in that order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposedMessages {
    /// Security review message
    pub security: String,

    /// Release approval message
    pub approval: String,
}

impl ComposedMessages {
    /// Select one of the two messages
    #[must_use]
    pub fn get(&self, kind: MessageKind) -> &str {
        match kind {
            MessageKind::Security => &self.security,
            MessageKind::Approval => &self.approval,
        }
    }
}
