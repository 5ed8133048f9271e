//! Path utilities.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::LOCAL_CONFIG_FILE;

/// Resolve the directory detection starts from.
///
/// Uses `path` when given, otherwise the current directory. The result is
/// canonical, so walking up with [`Path::parent`] visits real ancestors.
///
/// # Errors
///
/// Returns an error if the directory does not exist or is not accessible.
pub fn resolve_start_dir(path: Option<&Path>) -> Result<PathBuf> {
    let start = match path {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().context("Failed to get current directory")?,
    };

    let canonical = start.canonicalize().with_context(|| {
        format!(
            "Cannot access directory '{}': path does not exist or is not accessible",
            start.display()
        )
    })?;

    if !canonical.is_dir() {
        anyhow::bail!("'{}' is not a directory", start.display());
    }

    Ok(canonical)
}

/// Get the config directory for auto.
///
/// Returns `~/.config/auto` on Unix-like systems.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("auto"))
}

/// Get the global config file path.
///
/// Returns `~/.config/auto/config.toml`.
pub fn global_config_file() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

/// Find local config file in the start directory.
///
/// Looks for `.autorc.toml` in the given directory.
pub fn local_config_file(dir: &Path) -> Option<PathBuf> {
    let config_file = dir.join(LOCAL_CONFIG_FILE);
    if config_file.is_file() {
        Some(config_file)
    } else {
        None
    }
}
