//! Subcommand handlers
//!
//! Each handler returns the text to print, so it can be tested without
//! capturing stdout.

pub mod account;
pub mod email;
pub mod forms;
pub mod money;

use anyhow::{Context, Result};
use serde::Serialize;

/// Pretty JSON for `--json` output
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}
