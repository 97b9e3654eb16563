//! # Account Module
//!
//! Validation, display formatting and masking of bank account numbers.
//!
//! All three operations work on the digit-only projection of the input, so
//! punctuation such as dashes or spaces never affects the result.

use serde::Serialize;

/// Minimum number of digits in a valid account number.
pub const MIN_ACCOUNT_LENGTH: usize = 8;

/// Maximum number of digits in a valid account number.
pub const MAX_ACCOUNT_LENGTH: usize = 16;

/// Returned by [`mask_account_number`] when there are 4 digits or fewer.
pub const MASK_SENTINEL: &str = "****";

const GROUP_SIZE: usize = 4;
const VISIBLE_DIGITS: usize = 4;
const SEPARATOR: char = '-';

/// Strips every character that is not an ASCII digit.
///
/// # Examples
/// ```
/// use securbank_core::normalize_digits;
///
/// assert_eq!(normalize_digits(" 1234-5678 "), "12345678");
/// assert_eq!(normalize_digits("abc"), "");
/// ```
pub fn normalize_digits(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Trims ASCII spaces and control characters (everything up to U+0020).
/// Other Unicode whitespace such as U+3000 is kept.
pub(crate) fn trim_blank(text: &str) -> &str {
    text.trim_matches(|c: char| c <= ' ')
}

/// Absent, empty and blank input all count as missing.
fn non_blank(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !trim_blank(t).is_empty())
}

/// Inserts a separator before every 4th character, counting from the start.
/// A length that is not a multiple of 4 leaves a shorter final group.
fn group_by_four(chars: &str) -> String {
    let mut grouped = String::with_capacity(chars.len() + chars.len() / GROUP_SIZE);
    for (i, c) in chars.chars().enumerate() {
        if i > 0 && i % GROUP_SIZE == 0 {
            grouped.push(SEPARATOR);
        }
        grouped.push(c);
    }
    grouped
}

/// Returns `true` when the input carries between 8 and 16 digits inclusive.
///
/// Absent, empty and whitespace-only input is never valid.
pub fn validate_account_number(account_number: Option<&str>) -> bool {
    let Some(text) = non_blank(account_number) else {
        return false;
    };

    let digits = normalize_digits(text).len();
    (MIN_ACCOUNT_LENGTH..=MAX_ACCOUNT_LENGTH).contains(&digits)
}

/// Formats an account number as `XXXX-XXXX-...`.
///
/// Fewer than 4 digits are returned as-is, and blank input yields an empty
/// string.
///
/// # Examples
/// ```
/// use securbank_core::format_account_number;
///
/// assert_eq!(format_account_number(Some("1234567890123456")), "1234-5678-9012-3456");
/// assert_eq!(format_account_number(Some("1234567890")), "1234-5678-90");
/// assert_eq!(format_account_number(Some("123")), "123");
/// ```
pub fn format_account_number(account_number: Option<&str>) -> String {
    let Some(text) = non_blank(account_number) else {
        return String::new();
    };

    let digits = normalize_digits(text);
    if digits.len() < GROUP_SIZE {
        return digits;
    }
    group_by_four(&digits)
}

/// Masks all but the last 4 digits, one `*` per hidden digit, grouped like
/// [`format_account_number`].
///
/// # Examples
/// ```
/// use securbank_core::mask_account_number;
///
/// assert_eq!(mask_account_number(Some("1234567890123456")), "****-****-****-3456");
/// assert_eq!(mask_account_number(Some("12")), "****");
/// assert_eq!(mask_account_number(None), "");
/// ```
pub fn mask_account_number(account_number: Option<&str>) -> String {
    let Some(text) = non_blank(account_number) else {
        return String::new();
    };

    let digits = normalize_digits(text);
    if digits.len() <= VISIBLE_DIGITS {
        return MASK_SENTINEL.to_string();
    }

    let masked_len = digits.len() - VISIBLE_DIGITS;
    let mut masked = "*".repeat(masked_len);
    masked.push_str(&digits[masked_len..]);
    group_by_four(&masked)
}

/// All three account-number views computed from one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountNumberReport {
    pub valid: bool,
    pub formatted: String,
    pub masked: String,
}

impl AccountNumberReport {
    pub fn from_input(account_number: Option<&str>) -> Self {
        Self {
            valid: validate_account_number(account_number),
            formatted: format_account_number(account_number),
            masked: mask_account_number(account_number),
        }
    }
}
