//! # Money Module
//!
//! Simple interest and currency display.
//!
//! Amounts are plain `f64`. Display rounding parses the shortest decimal
//! representation of the float into a `rust_decimal::Decimal`, so midpoints
//! round half-up on the value the caller wrote (`2.675` displays as `$2.68`)
//! instead of on its binary approximation.

use crate::error::{CoreError, CoreResult};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

const NEGATIVE_INPUT: &str = "Principal, rate, and years must be non-negative";

/// Validated inputs for a simple interest calculation.
///
/// # Invariant
/// principal, rate and years are all >= 0. This is enforced by the constructor.
///
/// # Example
/// ```
/// use securbank_core::InterestParameters;
///
/// let params = InterestParameters::new(1000.0, 0.05, 2).unwrap();
/// assert_eq!(params.interest(), 100.0);
///
/// assert!(InterestParameters::new(-1.0, 0.05, 2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InterestParameters {
    principal: f64,
    rate: f64,
    years: i32,
}

impl InterestParameters {
    /// Any negative component is rejected; the error does not say which one.
    pub fn new(principal: f64, rate: f64, years: i32) -> CoreResult<Self> {
        if principal < 0.0 || rate < 0.0 || years < 0 {
            return Err(CoreError::invalid_argument(NEGATIVE_INPUT));
        }
        Ok(Self {
            principal,
            rate,
            years,
        })
    }

    pub fn principal(&self) -> f64 {
        self.principal
    }

    /// Rate as a decimal fraction, e.g. 0.05 for 5%
    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn years(&self) -> i32 {
        self.years
    }

    /// Simple interest: I = P * r * t
    pub fn interest(&self) -> f64 {
        self.principal * self.rate * f64::from(self.years)
    }
}

/// Computes simple (non-compounding) interest.
///
/// Fails with [`CoreError::InvalidArgument`] when any input is negative. Large
/// inputs are not bounded and may overflow to infinity.
pub fn calculate_interest(principal: f64, rate: f64, years: i32) -> CoreResult<f64> {
    InterestParameters::new(principal, rate, years).map(|params| params.interest())
}

/// Rounds an amount to cents, half away from zero.
///
/// Returns `None` for NaN, infinities and magnitudes beyond what `Decimal`
/// can hold.
pub fn round_currency(amount: f64) -> Option<Decimal> {
    let value: Decimal = amount.to_string().parse().ok()?;
    Some(value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// Two decimals, half away from zero, without a currency symbol.
///
/// Values `Decimal` cannot hold are written from the shortest decimal form of
/// the float, and infinities as `Infinity`.
///
/// # Examples
/// ```
/// use securbank_core::format_amount;
///
/// assert_eq!(format_amount(2.675), "2.68");
/// assert_eq!(format_amount(-42.5), "-42.50");
/// ```
pub fn format_amount(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}{}", unsigned_amount(amount.abs()))
}

fn unsigned_amount(magnitude: f64) -> String {
    if let Some(rounded) = round_currency(magnitude) {
        return format!("{rounded:.2}");
    }
    if magnitude.is_nan() {
        return "NaN".to_string();
    }
    if magnitude.is_infinite() {
        return "Infinity".to_string();
    }
    if magnitude < 1.0 {
        return format!("{magnitude:.2}");
    }
    // Past Decimal::MAX every f64 is a whole number
    format!("{magnitude}.00")
}

/// Formats an amount as `$X.XX`, or `-$X.XX` when negative.
///
/// No thousands separators are added.
///
/// # Examples
/// ```
/// use securbank_core::format_currency;
///
/// assert_eq!(format_currency(1234.56), "$1234.56");
/// assert_eq!(format_currency(-100.0), "-$100.00");
/// assert_eq!(format_currency(100.999), "$101.00");
/// ```
pub fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${}", unsigned_amount(amount.abs()))
}
