//! Validation predicates for form values

use std::sync::LazyLock;

use regex::Regex;

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+$").expect("version pattern is valid"));

static JSMOPS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("jsmops pattern is valid"));

/// Whether `version` is three dot-separated non-negative integers
#[must_use]
pub fn is_valid_version(version: &str) -> bool {
    VERSION_RE.is_match(version)
}

/// Whether `number` is a bare JSMOPS ticket number
#[must_use]
pub fn is_valid_jsmops_number(number: &str) -> bool {
    JSMOPS_RE.is_match(number)
}

/// Full ticket URL for a JSMOPS number, or empty when the number is invalid
#[must_use]
pub fn jsmops_url(prefix: &str, number: &str) -> String {
    if is_valid_jsmops_number(number) {
        format!("{prefix}{number}")
    } else {
        String::new()
    }
}
