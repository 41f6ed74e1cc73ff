use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::AppError;

// Spoken stand-ins for the symbols an email address needs.
static SPOKEN_DOT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:dot|punkt)\b").expect("valid spoken dot pattern"));
static SPOKEN_AT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:snabel-a|snabela|at)\b").expect("valid spoken at pattern")
});

/// Trims `value` and fails with the given requirement message when nothing is left.
pub fn require_field(value: &str, requirement: impl FnOnce() -> String) -> Result<&str, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::Validation(requirement()));
    }
    Ok(value)
}

/// Turns a transcribed email ("john dot doe at example dot com") into an address.
/// Spoken words are only replaced when they stand alone, then all whitespace is dropped.
pub fn normalize_email(raw: &str) -> String {
    let email = SPOKEN_DOT.replace_all(raw, ".");
    let email = SPOKEN_AT.replace_all(&email, "@");

    email.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Drops the spaces and hyphens a recognizer puts into spoken numbers.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect()
}
