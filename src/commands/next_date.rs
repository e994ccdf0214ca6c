//! Next date command - print the next release date

use chrono::NaiveDate;

use relman::core::services::{format_release_date, next_release_date};
use relman::output::{NextDateView, OutputMode};

use super::today_or_local;

/// Print the next release date
pub fn next_date(today: Option<NaiveDate>, mode: OutputMode) -> anyhow::Result<()> {
    let today = today_or_local(today);
    let next = next_release_date(today);

    NextDateView {
        today,
        next_release_date: next,
        formatted: format_release_date(next),
    }
    .render(mode);
    Ok(())
}
