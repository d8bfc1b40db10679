//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying ledger
//! state in various formats (JSON, table, plain text).

mod json;
mod text;

// Re-export public API
pub use json::{reminders_json, status_json, week_json};
pub use text::{print_reminders, print_status, print_week};
