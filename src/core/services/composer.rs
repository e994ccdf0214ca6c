//! Message composer
//!
//! Turns release metadata into the two notification messages posted to Slack.
//! Pure: no validation, no I/O. Malformed input is rendered verbatim.

use chrono::NaiveDate;

use super::format_release_date;
use crate::core::models::ComposedMessages;

/// Compose the security review and approval messages
#[must_use]
pub fn compose(
    project: &str,
    version: &str,
    release_date: NaiveDate,
    ticket_reference: &str,
) -> ComposedMessages {
    let date = format_release_date(release_date);
    let details = format!(
        "Version to deploy: {version}\n\
         Release Date: {date}\n\
         JSMOPS Ticket: {ticket_reference}\n\
         Github Diff in the JSMOPS ticket automatically generated"
    );

    let security = format!(
        "<{project} next release security review>\n\n\
         {details}\n\n\
         @security-reviewers Pls review {project} above mentioned version. This is a standard release."
    );

    let approval = format!(
        "<{project} next version release approval>\n\n\
         {details}\n\n\
         @techops pls review the next {project} release"
    );

    ComposedMessages { security, approval }
}
