//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use chrono::NaiveDate;
use colored::Colorize;
use serde::Serialize;

use crate::config::{QuickLink, SettingKey};
use crate::core::models::MessageKind;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// Current form values and what they resolve to
#[derive(Debug, Serialize)]
pub struct FormView {
    /// Project name, default applied
    pub project: String,
    /// Raw version
    pub version: String,
    /// Release date in effect
    pub release_date: NaiveDate,
    /// Whether the date came from the next-release-date rule
    pub date_is_default: bool,
    /// Raw JSMOPS number
    pub jsmops: String,
    /// Derived ticket URL (empty when the number is invalid)
    pub ticket_url: String,
    /// Whether the messages are ready to post
    pub ready: bool,
    /// Validation errors
    pub errors: Vec<String>,
    /// Non-blocking remarks
    pub warnings: Vec<String>,
}

impl FormView {
    /// Render the view based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        let or_unset = |s: &str| if s.is_empty() { "(not set)".dimmed().to_string() } else { s.to_string() };
        println!("Project:       {}", self.project);
        println!("Version:       {}", or_unset(&self.version));
        let suffix = if self.date_is_default { " (next release date)" } else { "" };
        println!("Release Date:  {}{suffix}", self.release_date.format("%Y-%m-%d"));
        println!("JSMOPS:        {}", or_unset(&self.jsmops));
        println!("Ticket URL:    {}", or_unset(&self.ticket_url));
        println!();

        for warning in &self.warnings {
            println!("{} {warning}", "warning:".yellow());
        }
        if self.ready {
            println!("{}", "Messages are ready.".green());
        } else {
            for error in &self.errors {
                println!("{} {error}", "error:".red());
            }
        }
    }
}

/// One composed message
#[derive(Debug, Serialize)]
pub struct MessageEntry {
    /// Which message
    pub kind: MessageKind,
    /// Display title
    pub title: &'static str,
    /// Message text, verbatim
    pub text: String,
}

/// Composed messages
#[derive(Debug, Serialize)]
pub struct MessagesView {
    /// Whether the form was valid
    pub ready: bool,
    /// Messages, in display order
    pub messages: Vec<MessageEntry>,
}

impl MessagesView {
    /// Render the view based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        // A single message is printed bare so it can be piped to a clipboard tool
        if let [only] = self.messages.as_slice() {
            println!("{}", only.text);
            return;
        }
        for (i, entry) in self.messages.iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!("{}", format!("=== {} ===", entry.title).bold());
            println!("{}", entry.text);
        }
    }
}

/// Next release date
#[derive(Debug, Serialize)]
pub struct NextDateView {
    /// Date the rule was applied to
    pub today: NaiveDate,
    /// Resulting release date
    pub next_release_date: NaiveDate,
    /// Release date as it appears in messages
    pub formatted: String,
}

impl NextDateView {
    /// Render the view based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!(
                "{} ({})",
                self.next_release_date.format("%Y-%m-%d"),
                self.formatted
            ),
            OutputMode::Json => print_json(self),
        }
    }
}

/// A sub-item and whether it is checked
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SubItemView {
    /// Sub-item id
    pub id: &'static str,
    /// Step label
    pub label: &'static str,
    /// Checked state
    pub checked: bool,
}

/// A checklist item and its state
#[derive(Debug, Serialize)]
pub struct ItemView {
    /// Item id
    pub id: &'static str,
    /// Task label
    pub label: &'static str,
    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    /// Resolved external link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Messaging app URL, for items that post to Slack
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slack_url: Option<String>,
    /// Message this item carries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<MessageKind>,
    /// Message text, present only when the form is ready
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_text: Option<String>,
    /// Checked state
    pub checked: bool,
    /// Nested steps
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sub_items: Vec<SubItemView>,
}

/// A checklist section
#[derive(Debug, Serialize)]
pub struct SectionView {
    /// Section heading
    pub name: &'static str,
    /// Items under the heading
    pub items: Vec<ItemView>,
}

/// The whole checklist
#[derive(Debug, Serialize)]
pub struct ChecklistView {
    /// Checked top-level items
    pub completed: usize,
    /// Top-level items in the catalog
    pub total: usize,
    /// Whether the last write was saved
    pub durable: bool,
    /// Sections in catalog order
    pub sections: Vec<SectionView>,
}

fn checkbox(checked: bool) -> String {
    if checked { "[x]".green().to_string() } else { "[ ]".to_string() }
}

fn progress(completed: usize, total: usize) -> String {
    let text = format!("({completed} / {total} completed)");
    if completed == total { text.green().to_string() } else { text.dimmed().to_string() }
}

impl ChecklistView {
    /// Render the view based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("{} {}", "Release Checklist".bold(), progress(self.completed, self.total));
        for section in &self.sections {
            println!();
            println!("{}", section.name.dimmed());
            for item in &section.items {
                println!("  {} {}  {}", checkbox(item.checked), item.label, item.id.dimmed());
                if let Some(description) = item.description {
                    println!("        {}", description.dimmed());
                }
                if let Some(link) = &item.link {
                    println!("        open: {link}");
                }
                if let Some(kind) = item.message {
                    if item.message_text.is_some() {
                        println!("        message: relman messages --kind {kind}");
                    } else {
                        println!("        message: {}", "fill in the form first".dimmed());
                    }
                }
                if let Some(slack) = &item.slack_url {
                    println!("        slack: {slack}");
                }
                for sub in &item.sub_items {
                    println!("        {} {}  {}", checkbox(sub.checked), sub.label, sub.id.dimmed());
                }
            }
        }
        if !self.durable {
            println!();
            println!("{} checklist changes could not be saved", "warning:".yellow());
        }
    }
}

/// Result of a toggle
#[derive(Debug, Serialize)]
pub struct ToggleResult {
    /// Toggled id
    pub id: String,
    /// Whether the id is a sub-item
    pub sub_item: bool,
    /// Label from the catalog, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
    /// New checked state
    pub checked: bool,
    /// Checked top-level items
    pub completed: usize,
    /// Top-level items in the catalog
    pub total: usize,
    /// Whether the change was saved
    pub durable: bool,
}

impl ToggleResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                let what = if self.sub_item { "sub-item" } else { "item" };
                let state = if self.checked { "Checked" } else { "Unchecked" };
                let label = self.label.unwrap_or(self.id.as_str());
                println!("{state} {what} {}: {label}", self.id);
                println!("{}", progress(self.completed, self.total));
                if !self.durable {
                    println!("{} change could not be saved", "warning:".yellow());
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Resolved settings
#[derive(Debug, Serialize)]
pub struct EnvView {
    /// Each setting and its value
    pub settings: Vec<(SettingKey, String)>,
    /// Settings running on fallbacks
    pub missing: Vec<SettingKey>,
    /// Quick links to the release tooling
    pub links: Vec<QuickLink>,
}

impl EnvView {
    /// Render the view based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        for (key, value) in &self.settings {
            println!("{:<18} {value}", key.to_string());
        }
        if !self.missing.is_empty() {
            let names: Vec<String> = self.missing.iter().map(ToString::to_string).collect();
            println!();
            println!(
                "{} running with fallback URLs. Not configured: {}",
                "Development mode:".yellow(),
                names.join(", ")
            );
        }
        println!();
        println!("Links:");
        for link in &self.links {
            println!("  {:<10} {}", link.label, link.url);
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
