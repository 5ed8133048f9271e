//! Child process execution.
//!
//! The resolved invocation runs with the parent's stdin, stdout and stderr
//! attached, in the directory the user started from.

use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use tracing::debug;

use super::dispatch::Invocation;
use crate::error::{AutoError, Result};

/// Result of running an invocation.
#[derive(Debug)]
pub struct ExecutionResult {
    /// Exit status of the child, `None` for a dry run.
    pub status: Option<ExitStatus>,
    /// The command that was executed.
    pub command: String,
}

impl ExecutionResult {
    /// Check if the execution was successful. Dry runs always succeed.
    pub fn success(&self) -> bool {
        self.status.map_or(true, |status| status.success())
    }

    /// Get the exit code. `None` if the child was killed by a signal.
    pub fn code(&self) -> Option<i32> {
        match self.status {
            Some(status) => status.code(),
            None => Some(0),
        }
    }

    /// Turn an unsuccessful run into [`AutoError::CommandFailed`].
    ///
    /// # Errors
    ///
    /// Returns an error if the child exited non-zero or by a signal.
    pub fn into_result(self) -> Result<Self> {
        if self.success() {
            Ok(self)
        } else {
            Err(AutoError::CommandFailed {
                code: self.code(),
                command: self.command,
            })
        }
    }
}

/// Run `invocation` in `cwd`.
///
/// With `dry_run`, prints `Would run: <command>` and spawns nothing.
///
/// # Errors
///
/// Returns [`AutoError::SpawnFailed`] if the program cannot be started.
/// A child that starts and then fails is not an error here; check
/// [`ExecutionResult::success`].
pub fn execute(invocation: &Invocation, cwd: &Path, dry_run: bool) -> Result<ExecutionResult> {
    let command_str = invocation.to_string();

    if dry_run {
        println!("{}", format_dry_run_command(invocation));
        return Ok(ExecutionResult {
            status: None,
            command: command_str,
        });
    }

    debug!(command = %command_str, cwd = %cwd.display(), "spawning");

    let mut command = Command::new(&invocation.program);
    command.args(&invocation.args);
    command.current_dir(cwd);

    command.stdin(Stdio::inherit());
    command.stdout(Stdio::inherit());
    command.stderr(Stdio::inherit());

    let status = command.status().map_err(|source| AutoError::SpawnFailed {
        program: invocation.program.clone(),
        source,
    })?;

    debug!(command = %command_str, code = ?status.code(), "child exited");

    Ok(ExecutionResult {
        status: Some(status),
        command: command_str,
    })
}

/// Format an invocation the way dry-run mode prints it.
pub fn format_dry_run_command(invocation: &Invocation) -> String {
    format!("Would run: {invocation}")
}
