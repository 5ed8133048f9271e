//! CLI argument definitions for auto.
//!
//! Uses clap with derive macros for argument parsing. Options must come
//! before the command; everything from the command on is forwarded to the
//! package manager untouched.
//!
//! # Example
//!
//! ```no_run
//! use auto_pm::cli::Cli;
//!
//! let cli = Cli::parse_args();
//! println!("Command: {:?}", cli.command_name());
//! ```

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::{generate, Shell};

use crate::package::PackageManager;
use crate::runner::DispatchMode;
use crate::utils::resolve_start_dir;

/// Run a command through the project's package manager.
#[derive(Parser, Debug)]
#[command(name = "auto")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Command to run, followed by its arguments
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub argv: Vec<String>,

    /// Start in PATH instead of the current directory
    #[arg(short = 'C', long = "cwd", value_name = "PATH")]
    pub cwd: Option<PathBuf>,

    /// Override package manager
    #[arg(short, long, value_name = "RUNNER", value_enum)]
    pub runner: Option<CliRunner>,

    /// How commands are routed to the package manager
    #[arg(long, value_name = "MODE", value_enum)]
    pub mode: Option<CliMode>,

    /// Maximum number of directories to search
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Show command without executing
    #[arg(short, long)]
    pub dry_run: bool,

    /// Print the detected package manager and exit
    #[arg(long)]
    pub detect: bool,

    /// Do not print the detection line
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long)]
    pub no_config: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<CliShell>,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliShell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    Powershell,
    /// Elvish shell
    Elvish,
}

/// Dispatch mode for CLI parsing.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliMode {
    /// Commands naming a package.json script run as `<pm> run <name>`.
    Scripts,
    /// Only `build` and `create` are special-cased.
    Classic,
}

impl From<CliMode> for DispatchMode {
    fn from(mode: CliMode) -> Self {
        match mode {
            CliMode::Scripts => DispatchMode::Scripts,
            CliMode::Classic => DispatchMode::Classic,
        }
    }
}

/// Package manager for CLI parsing.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliRunner {
    Npm,
    Yarn,
    Pnpm,
    Bun,
    Deno,
    Jspm,
    Rome,
}

impl From<CliRunner> for PackageManager {
    fn from(runner: CliRunner) -> Self {
        match runner {
            CliRunner::Npm => PackageManager::Npm,
            CliRunner::Yarn => PackageManager::Yarn,
            CliRunner::Pnpm => PackageManager::Pnpm,
            CliRunner::Bun => PackageManager::Bun,
            CliRunner::Deno => PackageManager::Deno,
            CliRunner::Jspm => PackageManager::Jspm,
            CliRunner::Rome => PackageManager::Rome,
        }
    }
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// The command to dispatch, if one was given.
    pub fn command_name(&self) -> Option<&str> {
        self.argv.first().map(String::as_str)
    }

    /// Arguments following the command, verbatim.
    pub fn command_args(&self) -> &[String] {
        self.argv.get(1..).unwrap_or(&[])
    }

    /// Resolve the canonical start directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory does not exist.
    pub fn start_dir(&self) -> Result<PathBuf> {
        resolve_start_dir(self.cwd.as_deref())
    }

    /// Get the runner override.
    pub fn runner_override(&self) -> Option<PackageManager> {
        self.runner.map(Into::into)
    }

    /// Get the dispatch mode override.
    pub fn mode_override(&self) -> Option<DispatchMode> {
        self.mode.map(Into::into)
    }

    /// Config file given with `--config`.
    pub fn config_path(&self) -> Option<&Path> {
        self.config.as_deref()
    }

    /// Generate shell completions and write to stdout.
    pub fn generate_completions(shell: CliShell) {
        let mut cmd = Cli::command();
        let shell = match shell {
            CliShell::Bash => Shell::Bash,
            CliShell::Zsh => Shell::Zsh,
            CliShell::Fish => Shell::Fish,
            CliShell::Powershell => Shell::PowerShell,
            CliShell::Elvish => Shell::Elvish,
        };
        generate(shell, &mut cmd, "auto", &mut std::io::stdout());
    }
}
