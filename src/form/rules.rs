//! Field validation rules.
//!
//! Each rule is a pure function from a field's current textual value to
//! either pass (`None`) or a fixed error message. Rules are stateless; the
//! display lifecycle lives in [`FormValidator`](super::FormValidator).

use once_cell::sync::Lazy;
use regex::Regex;

/// A pure validation function: `None` means valid, `Some` carries the error
/// message to display.
pub type FieldRule = fn(&str) -> Option<&'static str>;

/// The fixed set of validated field names, in display order.
pub const FIELDS: [&str; 4] = ["name", "email", "subject", "message"];

pub const NAME_REQUIRED: &str = "Name is required";
pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const SUBJECT_REQUIRED: &str = "Please select a subject";
pub const MESSAGE_REQUIRED: &str = "Message is required";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters";

// One or more non-space-non-@ runs around "@" and ".".
static EMAIL_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Returns the rule registered for `field`, if any.
///
/// Fields outside the fixed set have no rule and are treated as always
/// valid, so optional fields need no special-casing by callers.
pub fn rule_for(field: &str) -> Option<FieldRule> {
    match field {
        "name" => Some(name),
        "email" => Some(email),
        "subject" => Some(subject),
        "message" => Some(message),
        _ => None,
    }
}

fn name(value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(NAME_REQUIRED);
    }
    if trimmed.chars().count() < 2 {
        return Some(NAME_TOO_SHORT);
    }
    None
}

fn email(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        return Some(EMAIL_REQUIRED);
    }
    // The format check runs on the raw value; leading or trailing spaces
    // fail the pattern rather than being forgiven.
    if !EMAIL_FORMAT.is_match(value) {
        return Some(EMAIL_INVALID);
    }
    None
}

fn subject(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some(SUBJECT_REQUIRED);
    }
    None
}

fn message(value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(MESSAGE_REQUIRED);
    }
    if trimmed.chars().count() < 10 {
        return Some(MESSAGE_TOO_SHORT);
    }
    None
}
