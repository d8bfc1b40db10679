//! Small UI helpers: terminal context and string formatting.

mod format;

pub use format::{format_ml, progress_bar, short_id};

use std::io::IsTerminal;

/// Terminal context for UI decisions.
#[derive(Debug, Clone, Copy)]
pub struct UiContext {
    /// Whether color output is enabled
    pub color: bool,
}

impl UiContext {
    /// Detect the terminal context from the environment.
    ///
    /// Color is disabled when stdout is not a TTY, `NO_COLOR` is set,
    /// or `TERM=dumb`.
    pub fn from_env() -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let no_color = std::env::var("NO_COLOR").is_ok();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        Self {
            color: is_tty && !no_color && !term_is_dumb,
        }
    }
}
