//! Release date rule and date formatting

use chrono::{Datelike, Days, NaiveDate};

use crate::error::{RelmanError, Result};

/// Date the next release goes out, given today's date
///
/// Sunday through Wednesday release the following day. Thursday through
/// Saturday roll to the next Monday.
#[must_use]
pub fn next_release_date(today: NaiveDate) -> NaiveDate {
    let weekday = today.weekday().num_days_from_sunday();
    let offset = if weekday <= 3 { 1 } else { (8 - weekday) % 7 };
    today.checked_add_days(Days::new(u64::from(offset))).unwrap_or(NaiveDate::MAX)
}

/// Render a date as `DD MMM YYYY`, e.g. `07 Jan 2025`
#[must_use]
pub fn format_release_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// Parse an ISO calendar date (`YYYY-MM-DD`)
pub fn parse_iso_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| RelmanError::InvalidDate(raw.to_string()))
}
