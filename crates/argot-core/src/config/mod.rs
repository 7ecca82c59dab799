//! Configuration management for Argot
//!
//! Settings come from a TOML or JSON file, then environment variables with
//! the `ARGOT_` prefix override individual fields, then values given on the
//! command line override both.

mod console_config;
mod env_loader;
mod file_loader;
mod logging_config;

pub use console_config::ConsoleConfig;
pub use env_loader::{apply_env_overrides, load_config_from_env};
pub use file_loader::load_config_from_file;
pub use logging_config::LoggingConfig;

use std::path::{Path, PathBuf};

use crate::error::ArgotResult;

/// Default configuration file, `<config dir>/argot/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join("argot")
        .join("config.toml")
}

/// Load configuration from `path` (or the default path), then apply
/// environment overrides
pub fn load_config(path: Option<&Path>) -> ArgotResult<ConsoleConfig> {
    let config = match path {
        Some(path) => load_config_from_file(path)?,
        None => load_config_from_file(&default_config_path())?,
    };
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

/// Like [`load_config`], then merge `overrides` on top
///
/// Only fields of `overrides` that differ from the defaults take effect.
pub fn load_config_with_overrides(
    path: Option<&Path>,
    overrides: ConsoleConfig,
) -> ArgotResult<ConsoleConfig> {
    let mut config = load_config(path)?;
    config.merge(overrides);
    Ok(config)
}
