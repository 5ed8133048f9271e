//! auto - run commands through the project's package manager
//!
//! Entry point for the auto CLI application.

use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::debug;

use auto_pm::cli::Cli;
use auto_pm::config::{load_config, Config};
use auto_pm::error::{exit_code, AutoError};
use auto_pm::package::{Detection, Detector, OsFs, MANIFEST_FILE};
use auto_pm::runner::{execute, resolve_invocation};
use auto_pm::utils::{global_config_file, local_config_file, logging};

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            if let Some(auto_err) = err.downcast_ref::<AutoError>() {
                match auto_err {
                    AutoError::Usage => eprintln!("{auto_err}"),
                    _ if auto_err.is_detection_failure() => {
                        eprintln!("Error: no package manager detected");
                        eprintln!("{auto_err}");
                    }
                    _ => eprintln!("Error: {auto_err}"),
                }
                return ExitCode::from(auto_err.exit_code() as u8);
            }
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code::GENERAL_ERROR as u8)
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse_args();

    // Handle shell completions early
    if let Some(shell) = cli.completions {
        Cli::generate_completions(shell);
        return Ok(exit_code::SUCCESS);
    }

    logging::init(cli.debug);

    if cli.debug {
        print_debug_header();
        eprintln!("Debug: CLI arguments = {cli:#?}");
    }

    if cli.command_name().is_none() && !cli.detect {
        return Err(AutoError::Usage.into());
    }

    let start_dir = cli.start_dir().context("Failed to resolve start directory")?;

    if cli.debug {
        eprintln!("Debug: Start directory = {}", start_dir.display());
        print_debug_paths(&start_dir);
    }

    let config = if cli.no_config {
        Config::default()
    } else {
        load_config(cli.config_path(), &start_dir)?
    };
    debug!(?config, "effective config");

    let started = Instant::now();
    let detection = resolve_detection(&cli, &config, &start_dir)?;
    let elapsed = started.elapsed();

    debug!(%detection, "resolved");

    if cli.detect {
        println!("{detection}");
        return Ok(exit_code::SUCCESS);
    }

    if !cli.quiet && config.timing() {
        eprintln!(
            "Package manager detected: {} (took {:.2?})",
            detection.manager, elapsed
        );
    }

    let Some(command) = cli.command_name() else {
        return Err(AutoError::Usage.into());
    };

    let mode = cli.mode_override().unwrap_or_else(|| config.mode());
    let invocation = resolve_invocation(
        detection.manager,
        command,
        cli.command_args(),
        &detection.manifest,
        mode,
    );
    debug!(%invocation, %mode, "dispatching");

    execute(&invocation, &start_dir, cli.dry_run)?.into_result()?;

    Ok(exit_code::SUCCESS)
}

/// Pick the package manager: CLI override, then config override, then
/// detection.
fn resolve_detection(cli: &Cli, config: &Config, start_dir: &Path) -> Result<Detection> {
    if let Some(manager) = cli.runner_override() {
        return Ok(Detection::overridden(
            &OsFs,
            manager,
            start_dir,
            "CLI --runner flag",
        ));
    }

    if let Some(manager) = config.general.runner {
        return Ok(Detection::overridden(
            &OsFs,
            manager,
            start_dir,
            "config general.runner",
        ));
    }

    let max_depth = cli.max_depth.unwrap_or_else(|| config.max_depth());
    let detection = Detector::default()
        .with_max_depth(max_depth)
        .detect(start_dir)?;

    Ok(detection)
}

// ==================== Debug Functions ====================

/// Print debug header with version info.
fn print_debug_header() {
    eprintln!("=== auto debug mode ===");
    eprintln!("Version: {}", env!("CARGO_PKG_VERSION"));
    eprintln!();
}

/// Print debug information about file paths.
fn print_debug_paths(start_dir: &Path) {
    eprintln!("Debug: File locations:");

    // Global config
    if let Some(cfg) = global_config_file() {
        let exists = cfg.exists();
        eprintln!("  Global config: {} (exists: {})", cfg.display(), exists);
    } else {
        eprintln!("  Global config: <not available>");
    }

    // Local config
    if let Some(cfg) = local_config_file(start_dir) {
        eprintln!("  Local config: {} (exists: true)", cfg.display());
    } else {
        eprintln!(
            "  Local config: {}/.autorc.toml (exists: false)",
            start_dir.display()
        );
    }

    let package_json = start_dir.join(MANIFEST_FILE);
    eprintln!(
        "  package.json: {} (exists: {})",
        package_json.display(),
        package_json.exists()
    );

    eprintln!();
}
