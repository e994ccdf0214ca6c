//! Env command - show configured URLs

use relman::config::{SettingKey, Settings};
use relman::output::{EnvView, OutputMode};

/// Show configured URLs and which ones run on fallbacks
pub fn env(mode: OutputMode) -> anyhow::Result<()> {
    let settings = Settings::load();

    EnvView {
        settings: SettingKey::ALL.iter().map(|&key| (key, settings.get(key).to_string())).collect(),
        missing: settings.missing.clone(),
        links: settings.external_links(),
    }
    .render(mode);
    Ok(())
}
