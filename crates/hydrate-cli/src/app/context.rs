//! Application context for the Hydrate CLI.
//!
//! Bundles the parsed CLI arguments with the lazily-resolved data
//! directory, so handlers don't each re-run path resolution.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use hydrate_core::JsonFileStore;

use crate::cli::Cli;

use super::resolver::resolve_data_dir;

/// Application context shared by all command handlers.
pub struct AppContext<'a> {
    cli: &'a Cli,
    data_dir: OnceCell<PathBuf>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            data_dir: OnceCell::new(),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the resolved data directory, resolving it lazily.
    pub fn data_dir(&self) -> anyhow::Result<&PathBuf> {
        self.data_dir
            .get_or_try_init(|| resolve_data_dir(self.cli))
    }

    /// Open the JSON snapshot store rooted at the data directory.
    pub fn store(&self) -> anyhow::Result<JsonFileStore> {
        Ok(JsonFileStore::new(self.data_dir()?))
    }
}
