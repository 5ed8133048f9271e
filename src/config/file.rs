//! Configuration file loading and parsing.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::types::Config;
use crate::error::AutoError;
use crate::utils::local_config_file;

/// File name of the per-project config file.
pub const LOCAL_CONFIG_FILE: &str = ".autorc.toml";

/// Load configuration from the specified path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).map_err(|e| AutoError::InvalidConfig {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Load configuration with proper priority and merging.
///
/// Searches for config files in order of priority (lowest to highest):
/// 1. `~/.config/auto/config.toml` (user-level, lowest priority)
/// 2. `.autorc.toml` in the start directory (project-level)
/// 3. CLI argument `--config <path>` (highest priority)
///
/// Configs are merged with higher priority configs overriding lower priority ones.
/// Missing config files are handled gracefully (defaults are used).
///
/// # Arguments
///
/// * `cli_config_path` - Optional path to config file specified via CLI argument
/// * `start_dir` - The directory auto was started in
///
/// # Errors
///
/// Returns an error if a specified config file (via CLI) cannot be read or parsed.
/// Missing or broken default config files are not treated as errors.
pub fn load_config(cli_config_path: Option<&Path>, start_dir: &Path) -> Result<Config> {
    let mut config = Config::default();

    if let Some(user_config_path) = Config::user_config_path() {
        merge_optional(&mut config, &user_config_path, "user");
    }

    if let Some(project_config_path) = local_config_file(start_dir) {
        merge_optional(&mut config, &project_config_path, "project");
    }

    if let Some(cli_path) = cli_config_path {
        let cli_config = load_config_from_path(cli_path).with_context(|| {
            format!(
                "Failed to load config from CLI-specified path: {}",
                cli_path.display()
            )
        })?;
        config.merge(cli_config);
    }

    Ok(config)
}

/// Merge a default-location config if it exists, warning when it is broken.
fn merge_optional(config: &mut Config, path: &Path, level: &str) {
    if !path.is_file() {
        return;
    }

    match load_config_from_path(path) {
        Ok(loaded) => config.merge(loaded),
        Err(e) => warn!(
            path = %path.display(),
            "Failed to load {level} config: {e:#}"
        ),
    }
}

/// Generate an example configuration file with all options documented.
pub fn generate_example_config() -> String {
    r#"# auto Configuration File
# Place this file at ~/.config/auto/config.toml for global settings
# or .autorc.toml in your project directory for project-specific settings

[general]
# Force a package manager instead of detecting one
# Options: "npm", "yarn", "pnpm", "bun", "deno", "jspm", "rome"
# runner = "pnpm"

# Command routing: "scripts" or "classic"
# scripts: commands matching a package.json script run as `<pm> run <name>`
# classic: only `build` (as `<pm> run build`) and `create` are special
mode = "scripts"

# Print the detected package manager and detection time
timing = true

[detection]
# Maximum number of directories to examine, the current one included
max_depth = 20
"#
    .to_string()
}
