//! Configuration module for auto.
//!
//! Handles loading and merging configuration from multiple sources:
//! - CLI arguments (highest priority)
//! - Project-level `.autorc.toml`
//! - User-level `~/.config/auto/config.toml`

pub mod file;
mod types;

pub use file::{generate_example_config, load_config, LOCAL_CONFIG_FILE};
pub use types::{Config, DetectionConfig, GeneralConfig};
