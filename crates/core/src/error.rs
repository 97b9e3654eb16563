//! # Error Module
//!
//! Domain errors for the core crate, built with thiserror.

use thiserror::Error;

/// Core domain errors.
///
/// String helpers in this crate are total and never fail; only numeric
/// preconditions surface here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: &str) -> Self {
        Self::InvalidArgument(message.to_string())
    }

    /// Check whether this is an invalid argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CoreError::InvalidArgument(_))
    }
}
