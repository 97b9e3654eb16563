//! Service trait and default implementation

use crate::account::{format_account_number, mask_account_number, validate_account_number};
use crate::email::is_valid_email;
use crate::error::CoreResult;
use crate::money::{calculate_interest, format_currency};

/// SecurBank business operations.
pub trait SecurBankService: Send + Sync {
    fn validate_account_number(&self, account_number: Option<&str>) -> bool;

    fn format_account_number(&self, account_number: Option<&str>) -> String;

    fn calculate_interest(&self, principal: f64, rate: f64, years: i32) -> CoreResult<f64>;

    fn mask_account_number(&self, account_number: Option<&str>) -> String {
        mask_account_number(account_number)
    }

    fn is_valid_email(&self, email: Option<&str>) -> bool {
        is_valid_email(email)
    }

    fn format_currency(&self, amount: f64) -> String {
        format_currency(amount)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSecurBankService;

impl DefaultSecurBankService {
    pub fn new() -> Self {
        Self
    }
}

impl SecurBankService for DefaultSecurBankService {
    fn validate_account_number(&self, account_number: Option<&str>) -> bool {
        validate_account_number(account_number)
    }

    fn format_account_number(&self, account_number: Option<&str>) -> String {
        format_account_number(account_number)
    }

    fn calculate_interest(&self, principal: f64, rate: f64, years: i32) -> CoreResult<f64> {
        calculate_interest(principal, rate, years)
    }
}
