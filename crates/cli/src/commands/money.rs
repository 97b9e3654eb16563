//! Interest and currency commands

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use securbank_core::{format_currency, InterestParameters};
use serde_json::json;
use tracing::debug;

use super::to_json;

/// Rate fraction as a percentage, without float noise (0.07 -> "7")
fn percent(rate: f64) -> String {
    match rate.to_string().parse::<Decimal>() {
        Ok(rate) => (rate * Decimal::ONE_HUNDRED).normalize().to_string(),
        Err(_) => (rate * 100.0).to_string(),
    }
}

/// Simple interest for the given inputs
pub fn interest(principal: f64, rate: f64, years: i32, json: bool) -> Result<String> {
    let params =
        InterestParameters::new(principal, rate, years).context("Cannot calculate interest")?;
    let interest = params.interest();
    debug!(principal, rate, years, interest, "Calculated simple interest");

    if json {
        to_json(&json!({
            "parameters": params,
            "interest": interest,
            "display": format_currency(interest),
        }))
    } else {
        Ok(format!(
            "Interest on {} at {}% for {} year(s): {}",
            format_currency(principal),
            percent(rate),
            years,
            format_currency(interest)
        ))
    }
}

pub fn currency(amount: f64, json: bool) -> Result<String> {
    let formatted = format_currency(amount);
    if json {
        to_json(&json!({ "amount": amount, "formatted": formatted }))
    } else {
        Ok(formatted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interest_text() {
        let output = interest(1000.0, 0.05, 2, false).unwrap();
        assert!(output.ends_with("$100.00"));
        assert!(output.contains("$1000.00"));
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(0.07), "7");
        assert_eq!(percent(0.055), "5.5");
        assert_eq!(percent(0.0), "0");
        let output = interest(1000.0, 0.07, 1, false).unwrap();
        assert!(output.contains(" at 7% "));
    }

    #[test]
    fn test_interest_json() {
        let output = interest(1000.0, 0.05, 2, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["interest"], 100.0);
        assert_eq!(value["parameters"]["years"], 2);
        assert_eq!(value["display"], "$100.00");
    }

    #[test]
    fn test_interest_negative_input() {
        let err = interest(1000.0, 0.05, -2, false).unwrap_err();
        assert!(format!("{err:#}").contains("must be non-negative"));
    }

    #[test]
    fn test_currency() {
        assert_eq!(currency(-1234.56, false).unwrap(), "-$1234.56");
        assert_eq!(currency(100.999, false).unwrap(), "$101.00");
    }
}
