//! Custom error types for auto.
//!
//! Uses thiserror for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// Exit codes for auto.
pub mod exit_code {
    /// Success.
    pub const SUCCESS: i32 = 0;
    /// Any failure: usage, detection, spawn, or a failing child process.
    pub const GENERAL_ERROR: i32 = 1;
}

/// Main error type for auto.
#[derive(Error, Debug)]
pub enum AutoError {
    /// No command was given on the command line.
    #[error("Usage: auto <command> [args...]")]
    Usage,

    /// The walk reached the filesystem root without finding any marker.
    #[error("No project root found from {path} (searched {})\n\nTip: Run auto inside a project containing package.json or a lock file.", directory_count(.searched))]
    NoProjectRoot { path: PathBuf, searched: usize },

    /// The walk examined the maximum number of directories without a match.
    #[error("Reached maximum directory traversal limit ({depth}) from {path}\n\nTip: Run auto closer to your project root or raise --max-depth.")]
    TraversalLimit { path: PathBuf, depth: usize },

    /// The package manager binary could not be launched.
    #[error("Failed to run '{program}': {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The package manager ran but did not succeed.
    #[error("{}", command_failed_message(.command, .code))]
    CommandFailed { command: String, code: Option<i32> },

    /// Invalid configuration file.
    #[error("Invalid config at {path}:\n  {message}\n\nTip: Check the config file syntax and ensure all values are valid.")]
    InvalidConfig { path: PathBuf, message: String },

    /// IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AutoError {
    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AutoError::Usage
            | AutoError::NoProjectRoot { .. }
            | AutoError::TraversalLimit { .. }
            | AutoError::SpawnFailed { .. }
            | AutoError::CommandFailed { .. }
            | AutoError::InvalidConfig { .. }
            | AutoError::Io(_) => exit_code::GENERAL_ERROR,
        }
    }

    /// Whether this error means no package manager could be detected.
    pub fn is_detection_failure(&self) -> bool {
        matches!(
            self,
            AutoError::NoProjectRoot { .. } | AutoError::TraversalLimit { .. }
        )
    }
}

fn directory_count(count: &usize) -> String {
    match *count {
        1 => "1 directory".to_string(),
        n => format!("{n} directories"),
    }
}

fn command_failed_message(command: &str, code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("'{command}' failed with exit code {code}"),
        None => format!("'{command}' was terminated by a signal"),
    }
}

/// Result type alias for auto operations.
pub type Result<T> = std::result::Result<T, AutoError>;
