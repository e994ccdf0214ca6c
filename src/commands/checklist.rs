//! Checklist commands - show, toggle and reset the release checklist

use chrono::NaiveDate;

use relman::adapters::{FormFile, JsonFileRepository};
use relman::config::Settings;
use relman::core::models::{ReleaseForm, STANDARD_CATALOG};
use relman::core::services::ChecklistStore;
use relman::output::{
    ChecklistView, ItemView, OperationResult, OutputMode, SectionView, SubItemView, ToggleResult,
};

use super::today_or_local;

fn open_store() -> ChecklistStore<'static, JsonFileRepository> {
    ChecklistStore::open(&STANDARD_CATALOG, JsonFileRepository::default_location())
}

/// Show the release checklist
pub fn checklist(today: Option<NaiveDate>, mode: OutputMode) -> anyhow::Result<()> {
    let settings = Settings::load();
    let form = ReleaseForm::read(&FormFile::default_location());
    let context = form.context(&settings.jsmops_url_prefix, today_or_local(today));
    let composed = form.is_ready().then(|| context.compose());
    let store = open_store();

    let sections = store
        .catalog()
        .sections()
        .into_iter()
        .map(|section| SectionView {
            name: section.name,
            items: section
                .items
                .into_iter()
                .map(|item| ItemView {
                    id: item.id,
                    label: item.label,
                    description: item.description,
                    link: item.link.and_then(|link| settings.link(link, &context.ticket_reference)),
                    slack_url: item.slack.then(|| settings.slack_url.clone()),
                    message: item.message,
                    message_text: item
                        .message
                        .zip(composed.as_ref())
                        .map(|(kind, messages)| messages.get(kind).to_string()),
                    checked: store.is_item_checked(item.id),
                    sub_items: item
                        .sub_items
                        .iter()
                        .map(|sub| SubItemView {
                            id: sub.id,
                            label: sub.label,
                            checked: store.is_sub_item_checked(sub.id),
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect();

    ChecklistView {
        completed: store.completed_count(),
        total: store.total_count(),
        durable: store.is_durable(),
        sections,
    }
    .render(mode);
    Ok(())
}

/// Check or uncheck an item or sub-item
///
/// Ids that name a catalog sub-item toggle the sub-item; anything else is
/// toggled as a top-level item.
pub fn toggle(id: &str, mode: OutputMode) -> anyhow::Result<()> {
    let mut store = open_store();
    let catalog = store.catalog();

    let (sub_item, label, checked) = if let Some((parent, sub)) = catalog.sub_item(id) {
        log::debug!("'{id}' is a step of '{}'", parent.id);
        (true, Some(sub.label), store.toggle_sub_item(id))
    } else {
        let label = catalog.item(id).map(|item| item.label);
        if label.is_none() {
            log::warn!("'{id}' is not in the release checklist");
        }
        (false, label, store.toggle_item(id))
    };

    ToggleResult {
        id: id.to_string(),
        sub_item,
        label,
        checked,
        completed: store.completed_count(),
        total: store.total_count(),
        durable: store.is_durable(),
    }
    .render(mode);
    Ok(())
}

/// Uncheck every item and sub-item
pub fn reset(mode: OutputMode) -> anyhow::Result<()> {
    let mut store = open_store();
    store.reset();

    OperationResult {
        success: store.is_durable(),
        message: if store.is_durable() {
            "Checklist reset.".to_string()
        } else {
            "Checklist reset, but the change could not be saved.".to_string()
        },
    }
    .render(mode);
    Ok(())
}
