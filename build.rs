//! Build script for auto.
//!
//! Generates man pages using clap_mangen.

use std::env;
use std::fs;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};

/// Minimal CLI struct for man page generation.
///
/// This duplicates the CLI definition to avoid build dependency issues.
#[derive(Parser)]
#[command(name = "auto")]
#[command(
    author,
    version,
    about = "Run a command through the project's package manager"
)]
#[command(
    long_about = "auto finds the JavaScript package manager that governs the current project \
    and re-executes the given command through it.\n\n\
    Starting in the current directory and walking up, each directory is checked for lock \
    files (yarn.lock, package-lock.json, pnpm-lock.yaml, bun.lockb, bun.lock), then a \
    packageManager field in package.json, then toolchain configs (deno.json, deno.jsonc, \
    jspm.config.js, rome.json). `auto x` runs the manager's package executor, and commands \
    naming a package.json script run as `<pm> run <script>`."
)]
struct Cli {
    /// Command to run, followed by its arguments
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    argv: Vec<String>,

    /// Start in PATH instead of the current directory
    #[arg(short = 'C', long = "cwd", value_name = "PATH")]
    cwd: Option<PathBuf>,

    /// Override package manager
    #[arg(short, long, value_name = "RUNNER", value_enum)]
    runner: Option<Runner>,

    /// How commands are routed to the package manager
    #[arg(long, value_name = "MODE", value_enum)]
    mode: Option<Mode>,

    /// Maximum number of directories to search
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// Show command without executing
    #[arg(short, long)]
    dry_run: bool,

    /// Print the detected package manager and exit
    #[arg(long)]
    detect: bool,

    /// Do not print the detection line
    #[arg(short, long)]
    quiet: bool,

    /// Path to config file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long)]
    no_config: bool,

    /// Enable debug output
    #[arg(long)]
    debug: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL", value_enum)]
    completions: Option<Shell>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Scripts,
    Classic,
}

#[derive(Clone, Copy, ValueEnum)]
enum Runner {
    Npm,
    Yarn,
    Pnpm,
    Bun,
    Deno,
    Jspm,
    Rome,
}

#[derive(Clone, Copy, ValueEnum)]
enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
    Elvish,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Only generate man pages for release builds or when explicitly requested
    let profile = env::var("PROFILE").unwrap_or_default();
    if profile != "release" && env::var("AUTO_GEN_MANPAGE").is_err() {
        return;
    }

    let out_dir = match env::var_os("OUT_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => return,
    };

    let cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd);

    let mut buffer = Vec::new();
    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to generate man page: {e}");
        return;
    }

    let man_path = out_dir.join("auto.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {e}");
        return;
    }

    // Also copy to docs directory for distribution
    if let Some(manifest_dir) = env::var_os("CARGO_MANIFEST_DIR") {
        let docs_dir = PathBuf::from(manifest_dir).join("docs");
        if docs_dir.exists() {
            let _ = fs::copy(&man_path, docs_dir.join("auto.1"));
        }
    }
}
