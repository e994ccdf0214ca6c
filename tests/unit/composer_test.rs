//! Tests for message composition

use relman::core::models::MessageKind;
use relman::core::services::compose;

use crate::common::{cornea_context, date};

#[test]
fn test_security_message_contents() {
    let messages = cornea_context().compose();
    let security = &messages.security;

    assert!(security.starts_with("<Cornea next release security review>"));
    assert!(security.contains("\nVersion to deploy: 3.99.1\n"));
    assert!(security.contains("\nRelease Date: 07 Jan 2025\n"));
    assert!(security.contains("\nJSMOPS Ticket: https://example/JSMOPS-123\n"));
    assert!(security.contains("Github Diff in the JSMOPS ticket automatically generated"));

    let last = security.lines().last().unwrap();
    assert!(last.contains("@security-reviewers"));
    assert!(last.contains("Cornea"));
}

#[test]
fn test_approval_message_contents() {
    let messages = cornea_context().compose();
    let approval = &messages.approval;

    assert!(approval.starts_with("<Cornea next version release approval>"));
    assert!(approval.contains("\nVersion to deploy: 3.99.1\n"));
    assert!(approval.contains("\nRelease Date: 07 Jan 2025\n"));
    assert!(approval.contains("\nJSMOPS Ticket: https://example/JSMOPS-123\n"));
    assert_eq!(approval.lines().last(), Some("@techops pls review the next Cornea release"));
    assert!(!approval.contains("@security-reviewers"));
}

#[test]
fn test_messages_share_layout() {
    let messages = cornea_context().compose();
    let security: Vec<&str> = messages.security.lines().collect();
    let approval: Vec<&str> = messages.approval.lines().collect();

    assert_eq!(security.len(), 8);
    assert_eq!(approval.len(), 8);
    assert_eq!(security[1], "");
    assert_eq!(security[6], "");
    assert_eq!(security[2..6], approval[2..6]);
}

#[test]
fn test_compose_is_pure() {
    let ctx = cornea_context();
    let first = compose(&ctx.project, &ctx.version, ctx.release_date, &ctx.ticket_reference);
    let second = compose(&ctx.project, &ctx.version, ctx.release_date, &ctx.ticket_reference);
    assert_eq!(first, second);
    assert_eq!(first, ctx.compose());
}

#[test]
fn test_malformed_input_rendered_verbatim() {
    let messages = compose("Iris", "not-a-version", date(2025, 3, 3), "");
    assert!(messages.security.contains("Version to deploy: not-a-version"));
    assert!(messages.security.contains("JSMOPS Ticket: \n"));
    assert!(messages.approval.starts_with("<Iris next version release approval>"));
}

#[test]
fn test_select_by_kind() {
    let messages = cornea_context().compose();
    assert_eq!(messages.get(MessageKind::Security), messages.security);
    assert_eq!(messages.get(MessageKind::Approval), messages.approval);
}
