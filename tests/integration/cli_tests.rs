//! CLI integration tests for auto.
//!
//! These tests verify the command-line interface behavior using assert_cmd.
//! Dispatch is checked with `--dry-run`; child process outcomes use stub
//! executables placed on `PATH`.

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

use crate::integration::fixtures::{
    create_empty_project, create_project, create_project_with_config,
    create_project_with_lockfile, create_project_with_package_manager, create_workspace, nest,
    standard_scripts, LockfileType,
};

/// Get a Command for the auto binary.
fn auto() -> Command {
    cargo_bin_cmd!("auto")
}

/// Command running in `dir`, isolated from the user's config directory.
fn auto_in(dir: &Path) -> Command {
    let mut cmd = auto();
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".no-user-config"))
        .env("HOME", dir)
        .env_remove("AUTO_LOG");
    cmd
}

// ==================== Help and Version ====================

#[test]
fn test_help_output() {
    auto()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("package manager"))
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--runner"))
        .stdout(predicate::str::contains("--detect"));
}

#[test]
fn test_version_output() {
    auto()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("auto"))
        .stdout(predicate::str::is_match(r"\d+\.\d+\.\d+").unwrap());
}

// ==================== Usage ====================

#[test]
fn test_no_command_is_usage_error() {
    let project = create_project_with_lockfile(&[], LockfileType::Npm);

    auto_in(&project.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage: auto <command> [args...]"));
}

#[test]
fn test_options_only_is_usage_error() {
    let project = create_project_with_lockfile(&[], LockfileType::Npm);

    auto_in(&project.path())
        .args(["--dry-run", "--quiet"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage:"));
}

// ==================== Dispatch ====================

#[test]
fn test_x_uses_package_executor() {
    let project = create_project_with_lockfile(&[], LockfileType::Pnpm);

    auto_in(&project.path())
        .args(["--dry-run", "x", "vite", "--port=3000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run: pnpmx vite --port=3000"));
}

#[test]
fn test_script_runs_through_run() {
    let project = create_project_with_lockfile(&[("lint", "eslint .")], LockfileType::Npm);

    auto_in(&project.path())
        .args(["-d", "lint", "--fix"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run: npm run lint --fix"));
}

#[test]
fn test_non_script_passes_through() {
    let project = create_project_with_lockfile(&[("lint", "eslint .")], LockfileType::Npm);

    auto_in(&project.path())
        .args(["-d", "install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run: npm install"));
}

#[test]
fn test_classic_mode_build() {
    let project = create_project_with_lockfile(&[], LockfileType::Yarn);

    auto_in(&project.path())
        .args(["-d", "--mode", "classic", "build"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run: yarn run build"));
}

#[test]
fn test_classic_mode_create() {
    let project = create_project_with_lockfile(&[("create", "node create.js")], LockfileType::Bun);

    auto_in(&project.path())
        .args(["-d", "--mode", "classic", "create", "vite"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run: bun create vite"));
}

#[test]
fn test_classic_mode_ignores_scripts() {
    let project = create_project_with_lockfile(&[("lint", "eslint .")], LockfileType::Npm);

    auto_in(&project.path())
        .args(["-d", "--mode", "classic", "lint"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run: npm lint"));
}

#[test]
fn test_args_after_command_are_not_options() {
    let project = create_project_with_lockfile(&[], LockfileType::Pnpm);

    auto_in(&project.path())
        .args(["-d", "add", "-D", "typescript", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run: pnpm add -D typescript --quiet"))
        .stderr(predicate::str::contains("Package manager detected: pnpm"));
}

#[test]
fn test_workspace_member_scripts() {
    let project = create_workspace(LockfileType::Pnpm, &[("storybook", "storybook dev")]);
    let member = project.dir("packages/app");

    auto_in(&member)
        .args(["-d", "storybook"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run: pnpm run storybook"));
}

// ==================== Detection Line ====================

#[test]
fn test_detection_line_on_stderr() {
    let project = create_project_with_package_manager(&standard_scripts(), "bun@1.1.0");

    auto_in(&project.path())
        .args(["-d", "dev"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Package manager detected: bun (took "))
        .stdout(predicate::str::contains("Package manager detected").not());
}

#[test]
fn test_quiet_hides_detection_line() {
    let project = create_project_with_lockfile(&[], LockfileType::Npm);

    auto_in(&project.path())
        .args(["-q", "-d", "ci"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Package manager detected").not());
}

// ==================== --detect ====================

#[test]
fn test_detect_flag() {
    let project = create_project_with_lockfile(&[], LockfileType::Yarn);

    auto_in(&project.path())
        .arg("--detect")
        .assert()
        .success()
        .stdout(predicate::str::contains("yarn (found yarn.lock, root "));
}

#[test]
fn test_detect_flag_from_subdirectory() {
    let project = create_project_with_lockfile(&[], LockfileType::Pnpm);
    let sub = nest(&project.path(), 2);

    auto_in(&sub)
        .arg("--detect")
        .assert()
        .success()
        .stdout(predicate::str::contains("pnpm (found pnpm-lock.yaml"));
}

// ==================== Overrides ====================

#[test]
fn test_runner_override_skips_detection() {
    let project = create_project(&[("dev", "vite")]);

    auto_in(&project.path())
        .args(["-d", "--runner", "deno", "dev"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run: deno run dev"));
}

#[test]
fn test_runner_invalid() {
    let project = create_project_with_lockfile(&[], LockfileType::Npm);

    auto_in(&project.path())
        .args(["--runner", "cargo", "build"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_cwd_option() {
    let project = create_project_with_lockfile(&[], LockfileType::Bun);
    let elsewhere = create_empty_project();

    auto_in(&elsewhere.path())
        .arg("-C")
        .arg(project.path())
        .args(["-d", "install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run: bun install"));
}

#[test]
fn test_cwd_nonexistent() {
    let project = create_empty_project();

    auto_in(&project.path())
        .args(["-C", "does/not/exist", "-d", "install"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

// ==================== Detection Failures ====================

#[test]
fn test_traversal_limit_exits_one() {
    let project = create_project_with_lockfile(&[], LockfileType::Npm);
    let deep = nest(&project.path(), 3);

    auto_in(&deep)
        .args(["--max-depth", "2", "-d", "install"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no package manager detected"))
        .stderr(predicate::str::contains("maximum directory traversal limit (2)"))
        .stdout(predicate::str::contains("Would run").not());
}

#[test]
fn test_max_depth_from_config() {
    let project = create_project_with_lockfile(&[], LockfileType::Npm);
    let deep = nest(&project.path(), 3);
    std::fs::write(deep.join(".autorc.toml"), "[detection]\nmax_depth = 2\n").unwrap();

    auto_in(&deep)
        .args(["-d", "install"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("traversal limit (2)"));
}

// ==================== Child Process Failures ====================

#[cfg(unix)]
#[test]
fn test_failing_child_exits_one() {
    let project = create_project_with_lockfile(&[], LockfileType::Npm);
    let bin = project.path().join("bin");
    crate::integration::fixtures::stub_binary(&bin, "npm", 3);

    auto_in(&project.path())
        .env("PATH", &bin)
        .args(["-q", "install"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("'npm install' failed with exit code 3"));
}

#[cfg(unix)]
#[test]
fn test_succeeding_child_exits_zero() {
    let project = create_project_with_lockfile(&[], LockfileType::Npm);
    let bin = project.path().join("bin");
    crate::integration::fixtures::stub_binary(&bin, "npm", 0);

    auto_in(&project.path())
        .env("PATH", &bin)
        .args(["-q", "ci"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Error").not());
}

#[test]
fn test_missing_package_manager_binary_exits_one() {
    let project = create_project(&[]);
    let empty_bin = project.dir("empty-bin");

    auto_in(&project.path())
        .env("PATH", &empty_bin)
        .args(["-q", "-r", "rome", "check"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to run 'rome'"));
}

#[test]
fn test_filesystem_root_without_markers() {
    let project = create_empty_project();

    auto_in(&project.path())
        .args(["-C", "/", "--detect"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no package manager detected"));
}

// ==================== Config ====================

#[test]
fn test_config_runner() {
    let project = create_project_with_config(&[], "[general]\nrunner = \"yarn\"\n");
    project.lockfile("", LockfileType::Npm);

    auto_in(&project.path())
        .args(["-d", "install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run: yarn install"));
}

#[test]
fn test_cli_runner_beats_config_runner() {
    let project = create_project_with_config(&[], "[general]\nrunner = \"yarn\"\n");

    auto_in(&project.path())
        .args(["-d", "-r", "pnpm", "install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run: pnpm install"));
}

#[test]
fn test_config_mode_and_timing() {
    let project = create_project_with_config(
        &[("lint", "eslint .")],
        "[general]\nmode = \"classic\"\ntiming = false\n",
    );
    project.lockfile("", LockfileType::Npm);

    auto_in(&project.path())
        .args(["-d", "lint"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run: npm lint"))
        .stderr(predicate::str::contains("Package manager detected").not());
}

#[test]
fn test_cli_mode_beats_config_mode() {
    let project =
        create_project_with_config(&[("lint", "eslint .")], "[general]\nmode = \"classic\"\n");
    project.lockfile("", LockfileType::Npm);

    auto_in(&project.path())
        .args(["-d", "--mode", "scripts", "lint"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run: npm run lint"));
}

#[test]
fn test_no_config_flag() {
    let project = create_project_with_config(&[], "[general]\nrunner = \"yarn\"\n");
    project.lockfile("", LockfileType::Pnpm);

    auto_in(&project.path())
        .args(["--no-config", "-d", "install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run: pnpm install"));
}

#[test]
fn test_explicit_config_file() {
    let project = create_project_with_lockfile(&[], LockfileType::Npm);
    project.file("custom.toml", "[general]\nrunner = \"bun\"\n");

    auto_in(&project.path())
        .args(["-c", "custom.toml", "-d", "install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run: bun install"));
}

#[test]
fn test_invalid_explicit_config_exits_one() {
    let project = create_project_with_lockfile(&[], LockfileType::Npm);
    project.file("custom.toml", "[general]\nmode = \"sideways\"\n");

    auto_in(&project.path())
        .args(["-c", "custom.toml", "-d", "install"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn test_broken_project_config_is_skipped() {
    let project = create_project_with_config(&[], "this is = = not toml");
    project.lockfile("", LockfileType::Pnpm);

    auto_in(&project.path())
        .args(["-d", "install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run: pnpm install"));
}

// ==================== Debug ====================

#[test]
fn test_debug_mode() {
    let project = create_project_with_lockfile(&[], LockfileType::Npm);

    auto_in(&project.path())
        .args(["--debug", "-d", "install"])
        .assert()
        .success()
        .stderr(predicate::str::contains("=== auto debug mode ==="))
        .stderr(predicate::str::contains("Local config:"))
        .stdout(predicate::str::contains("Would run: npm install"));
}

// ==================== Completions ====================

#[test]
fn test_completions_bash() {
    auto()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("auto"));
}
