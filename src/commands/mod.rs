//! Command implementations

mod checklist;
mod env;
mod form;
mod messages;
mod next_date;

pub use checklist::{checklist, reset, toggle};
pub use env::env;
pub use form::{FormUpdate, clear, set, show};
pub use messages::messages;
pub use next_date::next_date;

use chrono::NaiveDate;

/// Today's local calendar date, unless overridden
fn today_or_local(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| chrono::Local::now().date_naive())
}
