//! # Email Module
//!
//! A structural email check, not an RFC 5322 grammar.

use crate::account::trim_blank;

const MIN_EMAIL_LENGTH: usize = 5;

/// Returns `true` when the trimmed input has an `@` that is not the first
/// character, a `.` somewhere after that `@`, and at least 5 characters.
///
/// # Examples
/// ```
/// use securbank_core::is_valid_email;
///
/// assert!(is_valid_email(Some("a@b.c")));
/// assert!(!is_valid_email(Some("@example.com")));
/// assert!(!is_valid_email(None));
/// ```
pub fn is_valid_email(email: Option<&str>) -> bool {
    let Some(trimmed) = email.map(trim_blank).filter(|t| !t.is_empty()) else {
        return false;
    };

    let (Some(at), Some(last_dot)) = (trimmed.find('@'), trimmed.rfind('.')) else {
        return false;
    };

    at > 0 && last_dot > at && trimmed.chars().count() >= MIN_EMAIL_LENGTH
}
