//! Messages command - print the composed release messages

use chrono::NaiveDate;

use relman::adapters::FormFile;
use relman::config::Settings;
use relman::core::models::{MessageKind, ReleaseForm};
use relman::output::{MessageEntry, MessagesView, OutputMode};

use super::today_or_local;

/// Print the composed messages
///
/// Fails when the form is invalid, unless `draft` is set.
pub fn messages(
    kind: Option<MessageKind>,
    draft: bool,
    today: Option<NaiveDate>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let settings = Settings::load();
    let form = ReleaseForm::read(&FormFile::default_location());

    let errors = form.validate();
    if !errors.is_empty() && !draft {
        for error in &errors {
            log::error!("{error}");
        }
        anyhow::bail!("form is not complete; fix it with 'relman set' or pass --draft");
    }

    let composed = form.context(&settings.jsmops_url_prefix, today_or_local(today)).compose();
    let kinds = kind.map_or_else(|| MessageKind::ALL.to_vec(), |k| vec![k]);

    MessagesView {
        ready: errors.is_empty(),
        messages: kinds
            .into_iter()
            .map(|kind| MessageEntry {
                kind,
                title: kind.title(),
                text: composed.get(kind).to_string(),
            })
            .collect(),
    }
    .render(mode);
    Ok(())
}
