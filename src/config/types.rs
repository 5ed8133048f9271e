//! Configuration type definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::package::{PackageManager, MAX_SEARCH_DEPTH};
use crate::runner::DispatchMode;

/// General configuration settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Override package manager detection.
    #[serde(default)]
    pub runner: Option<PackageManager>,
    /// How commands are routed.
    #[serde(default)]
    pub mode: Option<DispatchMode>,
    /// Print the detected package manager and how long detection took.
    #[serde(default)]
    pub timing: Option<bool>,
}

/// Detection settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Maximum number of directories to examine.
    #[serde(default)]
    pub max_depth: Option<usize>,
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Detection settings.
    #[serde(default)]
    pub detection: DetectionConfig,
}

impl Config {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the config file path for the user's home directory.
    pub fn user_config_path() -> Option<PathBuf> {
        crate::utils::global_config_file()
    }

    /// Merge another config into this one (other takes precedence for set values).
    pub fn merge(&mut self, other: Config) {
        if other.general.runner.is_some() {
            self.general.runner = other.general.runner;
        }
        if other.general.mode.is_some() {
            self.general.mode = other.general.mode;
        }
        if other.general.timing.is_some() {
            self.general.timing = other.general.timing;
        }

        if other.detection.max_depth.is_some() {
            self.detection.max_depth = other.detection.max_depth;
        }
    }

    /// Dispatch mode, defaulting to scripts-aware routing.
    pub fn mode(&self) -> DispatchMode {
        self.general.mode.unwrap_or_default()
    }

    /// Whether to print the detection line.
    pub fn timing(&self) -> bool {
        self.general.timing.unwrap_or(true)
    }

    /// Traversal ceiling, defaulting to [`MAX_SEARCH_DEPTH`].
    pub fn max_depth(&self) -> usize {
        self.detection.max_depth.unwrap_or(MAX_SEARCH_DEPTH)
    }
}
