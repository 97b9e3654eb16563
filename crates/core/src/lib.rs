//! # SecurBank Core
//!
//! Pure account-number and money helpers shared by the SecurBank services:
//! - `account`: validation, display formatting and masking of account numbers
//! - `money`: simple interest and currency display
//! - `email`: a lightweight email shape check
//! - `service`: the `SecurBankService` trait for callers that want a collaborator
//!
//! Nothing in this crate performs I/O or holds state.

pub mod account;
pub mod email;
pub mod error;
pub mod money;
pub mod service;

pub use account::{
    format_account_number, mask_account_number, normalize_digits, validate_account_number,
    AccountNumberReport, MASK_SENTINEL, MAX_ACCOUNT_LENGTH, MIN_ACCOUNT_LENGTH,
};
pub use email::is_valid_email;
pub use error::{CoreError, CoreResult};
pub use money::{calculate_interest, format_amount, format_currency, round_currency, InterestParameters};
pub use service::{DefaultSecurBankService, SecurBankService};
