//! Email shape check

use anyhow::Result;
use securbank_core::is_valid_email;
use serde_json::json;

use super::to_json;

pub fn check(address: &str, json: bool) -> Result<String> {
    let valid = is_valid_email(Some(address));
    if json {
        to_json(&json!({ "email": address.trim(), "valid": valid }))
    } else if valid {
        Ok("valid".to_string())
    } else {
        Ok("invalid".to_string())
    }
}
