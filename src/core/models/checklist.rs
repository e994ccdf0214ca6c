//! Release checklist model
//!
//! The catalog is static: a flat, ordered list of items, each naming its
//! section. Items may link somewhere, carry one of the composed messages,
//! or nest sub-steps. The runtime state is two flat id sets.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::MessageKind;

/// External destination an item links to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExternalLink {
    /// CI pipelines
    Buildkite,
    /// Deployment tool
    Octopus,
    /// Issue tracker
    Jira,
    /// The JSMOPS ticket of the current release
    Ticket,
}

/// A finer-grained step nested under a checklist item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubItemDefinition {
    /// Globally unique id
    pub id: &'static str,
    /// Step label
    pub label: &'static str,
}

impl SubItemDefinition {
    /// Create a sub-item definition
    #[must_use]
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }
}

/// One static release task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecklistItemDefinition {
    /// Globally unique id
    pub id: &'static str,
    /// Task label
    pub label: &'static str,
    /// Section heading the item is listed under
    pub section: &'static str,
    /// Optional longer description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    /// Optional external link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<ExternalLink>,
    /// Whether the item offers to open the messaging app
    pub slack: bool,
    /// Composed message this item carries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<MessageKind>,
    /// Nested steps, in display order
    pub sub_items: &'static [SubItemDefinition],
}

impl ChecklistItemDefinition {
    /// Create a plain item with only a label
    #[must_use]
    pub const fn new(id: &'static str, label: &'static str, section: &'static str) -> Self {
        Self {
            id,
            label,
            section,
            description: None,
            link: None,
            slack: false,
            message: None,
            sub_items: &[],
        }
    }

    /// Attach a description
    #[must_use]
    pub const fn with_description(self, description: &'static str) -> Self {
        Self {
            description: Some(description),
            ..self
        }
    }

    /// Attach an external link
    #[must_use]
    pub const fn with_link(self, link: ExternalLink) -> Self {
        Self {
            link: Some(link),
            ..self
        }
    }

    /// Attach a composed message; such items also open the messaging app
    #[must_use]
    pub const fn with_message(self, message: MessageKind) -> Self {
        Self {
            message: Some(message),
            slack: true,
            ..self
        }
    }

    /// Offer to open the messaging app
    #[must_use]
    pub const fn with_slack(self) -> Self {
        Self { slack: true, ..self }
    }

    /// Attach nested steps
    #[must_use]
    pub const fn with_sub_items(self, sub_items: &'static [SubItemDefinition]) -> Self {
        Self { sub_items, ..self }
    }
}

/// Items of one section, in catalog order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section<'a> {
    /// Section heading
    pub name: &'a str,
    /// Items listed under the heading
    pub items: Vec<&'a ChecklistItemDefinition>,
}

/// An ordered, static list of checklist items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    items: &'static [ChecklistItemDefinition],
}

impl Catalog {
    /// Wrap a static item list
    #[must_use]
    pub const fn new(items: &'static [ChecklistItemDefinition]) -> Self {
        Self { items }
    }

    /// All top-level items, in order
    #[must_use]
    pub const fn items(&self) -> &'static [ChecklistItemDefinition] {
        self.items
    }

    /// Number of top-level items
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog has no items
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a top-level item
    #[must_use]
    pub fn item(&self, id: &str) -> Option<&'static ChecklistItemDefinition> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Look up a sub-item and the item it nests under
    #[must_use]
    pub fn sub_item(
        &self,
        id: &str,
    ) -> Option<(&'static ChecklistItemDefinition, &'static SubItemDefinition)> {
        self.items
            .iter()
            .find_map(|item| item.sub_items.iter().find(|sub| sub.id == id).map(|sub| (item, sub)))
    }

    /// Whether `id` names a top-level item
    #[must_use]
    pub fn contains_item(&self, id: &str) -> bool {
        self.item(id).is_some()
    }

    /// Group items by section, sections ordered by first appearance
    #[must_use]
    pub fn sections(&self) -> Vec<Section<'static>> {
        let mut sections: Vec<Section<'static>> = Vec::new();
        for item in self.items {
            match sections.iter_mut().find(|s| s.name == item.section) {
                Some(section) => section.items.push(item),
                None => sections.push(Section {
                    name: item.section,
                    items: vec![item],
                }),
            }
        }
        sections
    }

    /// Every id in the catalog, top-level and nested, in order
    pub fn all_ids(&self) -> impl Iterator<Item = &'static str> {
        self.items
            .iter()
            .flat_map(|item| std::iter::once(item.id).chain(item.sub_items.iter().map(|s| s.id)))
    }
}

/// Section headings of the standard catalog
pub mod sections {
    /// Build and ticket preparation
    pub const PRE_RELEASE: &str = "Pre-Release Steps";
    /// Posting the composed messages
    pub const COMMUNICATION: &str = "Communication";
    /// Staging environment rollout
    pub const SIMNEXT: &str = "Simnext Deployment";
    /// Production rollout
    pub const PROD: &str = "Prod Deployment";
}

const BUILDKITE_STEPS: &[SubItemDefinition] = &[
    SubItemDefinition::new("buildkite-tests", "Run the full test suite"),
    SubItemDefinition::new("buildkite-build", "Build the release artifacts"),
    SubItemDefinition::new("buildkite-publish", "Publish images to the registry"),
];

const SIMNEXT_SANITY_STEPS: &[SubItemDefinition] = &[
    SubItemDefinition::new("simnext-sanity-login", "Log in and load the dashboard"),
    SubItemDefinition::new("simnext-sanity-version", "Confirm the deployed version number"),
    SubItemDefinition::new("simnext-sanity-flows", "Walk through the changed flows"),
];

const PROD_SANITY_STEPS: &[SubItemDefinition] = &[
    SubItemDefinition::new("prod-sanity-login", "Log in and load the dashboard"),
    SubItemDefinition::new("prod-sanity-version", "Confirm the deployed version number"),
    SubItemDefinition::new("prod-sanity-errors", "Check error monitoring for new issues"),
];

const STANDARD_ITEMS: &[ChecklistItemDefinition] = &[
    ChecklistItemDefinition::new("buildkite", "Trigger all steps in Buildkite", sections::PRE_RELEASE)
        .with_link(ExternalLink::Buildkite)
        .with_sub_items(BUILDKITE_STEPS),
    ChecklistItemDefinition::new("jsmops", "Update details in JSMOPS ticket", sections::PRE_RELEASE)
        .with_description("Version, release date and the generated Github diff")
        .with_link(ExternalLink::Ticket),
    ChecklistItemDefinition::new(
        "security-message",
        "Post Security Review Message in Slack",
        sections::COMMUNICATION,
    )
    .with_message(MessageKind::Security),
    ChecklistItemDefinition::new(
        "approval-message",
        "Post Release Approval Message in Slack",
        sections::COMMUNICATION,
    )
    .with_message(MessageKind::Approval),
    ChecklistItemDefinition::new(
        "dev-confirm",
        "Verify the developers confirmed their changes",
        sections::SIMNEXT,
    )
    .with_link(ExternalLink::Jira),
    ChecklistItemDefinition::new(
        "simnext-deploy",
        "Deploy to Simnext using OctopusDeploy",
        sections::SIMNEXT,
    )
    .with_link(ExternalLink::Octopus),
    ChecklistItemDefinition::new("simnext-sanity", "Sanity check in Simnext", sections::SIMNEXT)
        .with_sub_items(SIMNEXT_SANITY_STEPS),
    ChecklistItemDefinition::new("prod-deploy", "Deploy to PROD via OctopusDeploy", sections::PROD)
        .with_link(ExternalLink::Octopus),
    ChecklistItemDefinition::new("prod-sanity", "Perform sanity check in PROD", sections::PROD)
        .with_sub_items(PROD_SANITY_STEPS),
    ChecklistItemDefinition::new(
        "slack-complete",
        "Post message on slack about release completed",
        sections::PROD,
    )
    .with_slack(),
];

/// The standard release checklist
pub static STANDARD_CATALOG: Catalog = Catalog::new(STANDARD_ITEMS);

/// Checked ids, persisted as one record
///
/// Membership is all that matters; sets are ordered only so the record
/// serializes deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistState {
    /// Checked top-level item ids
    #[serde(default)]
    pub checked_item_ids: BTreeSet<String>,

    /// Checked sub-item ids, flat regardless of parent
    #[serde(default)]
    pub checked_sub_item_ids: BTreeSet<String>,
}

impl ChecklistState {
    /// Flip membership of an item id, returning the new membership
    pub fn toggle_item(&mut self, id: &str) -> bool {
        flip(&mut self.checked_item_ids, id)
    }

    /// Flip membership of a sub-item id, returning the new membership
    pub fn toggle_sub_item(&mut self, id: &str) -> bool {
        flip(&mut self.checked_sub_item_ids, id)
    }

    /// Empty both sets
    pub fn clear(&mut self) {
        self.checked_item_ids.clear();
        self.checked_sub_item_ids.clear();
    }

    /// Whether nothing is checked
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checked_item_ids.is_empty() && self.checked_sub_item_ids.is_empty()
    }
}

fn flip(set: &mut BTreeSet<String>, id: &str) -> bool {
    if set.remove(id) {
        false
    } else {
        set.insert(id.to_string());
        true
    }
}
