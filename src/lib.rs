//! auto - run commands through the project's package manager
//!
//! `auto <command> [args...]` works out which JavaScript package manager
//! governs the current project and re-executes the command through it.
//!
//! # Detection
//!
//! Starting in the working directory and walking up, each directory is
//! checked for:
//!
//! 1. Lock files: `yarn.lock`, `package-lock.json`, `pnpm-lock.yaml`,
//!    `bun.lockb`, `bun.lock`
//! 2. A `packageManager` field in `package.json`
//! 3. Toolchain configs: `deno.json`, `deno.jsonc`, `jspm.config.js`,
//!    `rome.json`
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface argument parsing
//! - [`config`] - Configuration file loading and types
//! - [`error`] - Error types and result helpers
//! - [`package`] - Manifest reading and package manager detection
//! - [`runner`] - Command dispatch and execution
//! - [`utils`] - Path and logging utilities
//!
//! # Example
//!
//! ```no_run
//! use auto_pm::package::detect;
//! use auto_pm::runner::{resolve_invocation, DispatchMode};
//! use std::path::Path;
//!
//! let detection = detect(Path::new("./my-project")).expect("no project found");
//! let args = vec!["--fix".to_string()];
//! let invocation = resolve_invocation(
//!     detection.manager,
//!     "lint",
//!     &args,
//!     &detection.manifest,
//!     DispatchMode::Scripts,
//! );
//! println!("Command: {invocation}");
//! ```

/// CLI argument definitions.
pub mod cli;

/// Configuration system for loading and merging settings.
pub mod config;

/// Error types and result helpers.
pub mod error;

/// Package.json reading and package manager detection.
pub mod package;

/// Command dispatch and execution.
pub mod runner;

/// Path and logging utilities.
pub mod utils;

// Re-export commonly used types
pub use cli::Cli;
pub use config::Config;
pub use error::{AutoError, Result};
pub use package::{Detection, Detector, PackageManager};
