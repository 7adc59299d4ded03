//! XDG-style location of the configuration directory.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "translate";

/// Returns the configuration directory.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/translate` if `XDG_CONFIG_HOME` is set and non-empty
/// 2. `~/.config/translate` otherwise
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join(APP_DIR)),
        _ => Ok(dirs::home_dir()
            .context("Failed to determine home directory")?
            .join(".config")
            .join(APP_DIR)),
    }
}
