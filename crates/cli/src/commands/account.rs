//! Account number commands

use anyhow::Result;
use securbank_core::{
    format_account_number, mask_account_number, validate_account_number, AccountNumberReport,
};
use serde_json::json;
use tracing::debug;

use super::to_json;
use crate::AccountAction;

/// Handle account subcommands
pub fn handle(action: AccountAction, json: bool) -> Result<String> {
    match action {
        AccountAction::Validate { number } => {
            let valid = validate_account_number(Some(number.as_str()));
            debug!(valid, "Validated account number");
            if json {
                to_json(&json!({ "valid": valid }))
            } else if valid {
                Ok("valid".to_string())
            } else {
                Ok("invalid (expected 8 to 16 digits)".to_string())
            }
        }
        AccountAction::Format { number } => {
            let formatted = format_account_number(Some(number.as_str()));
            if json {
                to_json(&json!({ "formatted": formatted }))
            } else {
                Ok(formatted)
            }
        }
        AccountAction::Mask { number } => {
            let masked = mask_account_number(Some(number.as_str()));
            if json {
                to_json(&json!({ "masked": masked }))
            } else {
                Ok(masked)
            }
        }
        AccountAction::Inspect { number } => {
            let report = AccountNumberReport::from_input(Some(number.as_str()));
            if json {
                to_json(&report)
            } else {
                Ok(format!(
                    "Valid:     {}\nFormatted: {}\nMasked:    {}",
                    report.valid, report.formatted, report.masked
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_text_and_json() {
        let action = AccountAction::Validate {
            number: "1234-5678-9012-3456".to_string(),
        };
        assert_eq!(handle(action, false).unwrap(), "valid");

        let action = AccountAction::Validate {
            number: "1234567".to_string(),
        };
        let output = handle(action, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["valid"], false);
    }

    #[test]
    fn test_format_and_mask() {
        let formatted = handle(
            AccountAction::Format {
                number: "1234567890".to_string(),
            },
            false,
        )
        .unwrap();
        assert_eq!(formatted, "1234-5678-90");

        let masked = handle(
            AccountAction::Mask {
                number: "1234567890123456".to_string(),
            },
            false,
        )
        .unwrap();
        assert_eq!(masked, "****-****-****-3456");
    }

    #[test]
    fn test_inspect_json() {
        let output = handle(
            AccountAction::Inspect {
                number: "12345678".to_string(),
            },
            true,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["formatted"], "1234-5678");
        assert_eq!(value["masked"], "****-5678");
    }
}
