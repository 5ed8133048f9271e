//! Runner module for auto.
//!
//! Resolves a command into a package manager invocation and executes it.

mod dispatch;
mod executor;

pub use dispatch::{resolve_invocation, DispatchMode, Invocation};
pub use executor::{execute, format_dry_run_command, ExecutionResult};
