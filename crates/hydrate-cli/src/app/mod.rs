//! Application-level utilities for the Hydrate CLI.
//!
//! This module provides:
//! - Path resolution for the config file and data directory
//! - The application context bundling CLI args with the opened store

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
pub use resolver::{resolve_config_path, resolve_data_dir};
