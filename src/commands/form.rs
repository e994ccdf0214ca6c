//! Form commands - set, clear and show form values

use chrono::NaiveDate;

use relman::adapters::FormFile;
use relman::config::Settings;
use relman::core::models::{KNOWN_PROJECTS, ReleaseForm};
use relman::core::services::{is_valid_jsmops_number, is_valid_version};
use relman::output::{FormView, OperationResult, OutputMode};

use super::today_or_local;

/// Field updates from `relman set`
#[derive(Debug, Default)]
pub struct FormUpdate {
    /// New version
    pub version: Option<String>,
    /// New release date
    pub date: Option<NaiveDate>,
    /// New JSMOPS number
    pub jsmops: Option<String>,
    /// New project
    pub project: Option<String>,
}

/// Update form values
pub fn set(update: FormUpdate, mode: OutputMode) -> anyhow::Result<()> {
    let mut params = FormFile::default_location();
    let mut form = ReleaseForm::read(&params);

    if let Some(version) = update.version {
        let version = version.trim().to_string();
        if !is_valid_version(&version) {
            log::warn!("Version '{version}' is not in format digits.digits.digits");
        }
        form.version = version;
    }
    if let Some(date) = update.date {
        form.date = Some(date);
    }
    if let Some(jsmops) = update.jsmops {
        let jsmops = jsmops.trim().to_string();
        if !is_valid_jsmops_number(&jsmops) {
            log::warn!("JSMOPS ticket number '{jsmops}' should contain digits only");
        }
        form.jsmops = jsmops;
    }
    if let Some(project) = update.project {
        form.project = project.trim().to_string();
        if !form.has_known_project() {
            log::warn!("Unknown project '{}'. Known: {}", form.project, KNOWN_PROJECTS.join(", "));
        }
    }

    form.write(&mut params)?;
    log::debug!("Form saved to {}", params.path().display());

    OperationResult {
        success: true,
        message: "Form updated. Run 'relman show' to review.".to_string(),
    }
    .render(mode);
    Ok(())
}

/// Clear all form values
pub fn clear(mode: OutputMode) -> anyhow::Result<()> {
    let mut params = FormFile::default_location();
    ReleaseForm::default().write(&mut params)?;

    OperationResult {
        success: true,
        message: "Form cleared.".to_string(),
    }
    .render(mode);
    Ok(())
}

/// Show form values and whether the messages are ready
pub fn show(today: Option<NaiveDate>, mode: OutputMode) -> anyhow::Result<()> {
    let settings = Settings::load();
    let form = ReleaseForm::read(&FormFile::default_location());
    form_view(&form, &settings, today_or_local(today)).render(mode);
    Ok(())
}

pub(super) fn form_view(form: &ReleaseForm, settings: &Settings, today: NaiveDate) -> FormView {
    let context = form.context(&settings.jsmops_url_prefix, today);

    let mut warnings = Vec::new();
    if !form.has_known_project() {
        warnings.push(format!(
            "unknown project '{}' (known: {})",
            context.project,
            KNOWN_PROJECTS.join(", ")
        ));
    }
    if context.release_date < today {
        warnings.push("release date is in the past".to_string());
    }

    FormView {
        project: context.project,
        version: form.version.clone(),
        release_date: context.release_date,
        date_is_default: form.date.is_none(),
        jsmops: form.jsmops.clone(),
        ticket_url: context.ticket_reference,
        ready: form.is_ready(),
        errors: form.validate().iter().map(ToString::to_string).collect(),
        warnings,
    }
}
