//! Path resolution for the config file and data directory.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{default_config_path, default_data_dir, read_config};

/// Resolve the config file path, checking HYDRATE_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("HYDRATE_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the data directory from CLI args, config, or the default.
///
/// Precedence: `--data-dir` / `HYDRATE_PATH` (clap handles the env
/// fallback), then `storage.data_dir` from the config file when one
/// exists, then the XDG data dir. A missing config file is not an
/// error; the tracker bootstraps itself on first save.
pub fn resolve_data_dir(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(PathBuf::from(dir));
    }

    let config_path = resolve_config_path()?;
    if config_path.exists() {
        let config = read_config(&config_path)?;
        if let Some(dir) = config.storage.data_dir {
            return Ok(PathBuf::from(dir));
        }
    }

    default_data_dir()
}
