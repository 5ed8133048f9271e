//! Mapping a user command onto a package manager invocation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::package::{Manifest, PackageManager};

/// How commands other than `x` are routed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchMode {
    /// Commands naming a script in package.json run through `<pm> run`.
    #[default]
    Scripts,
    /// `build` runs through `<pm> run build`, `create` through `<pm> create`.
    Classic,
}

impl fmt::Display for DispatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchMode::Scripts => write!(f, "scripts"),
            DispatchMode::Classic => write!(f, "classic"),
        }
    }
}

/// A fully resolved child process command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program to execute.
    pub program: String,
    /// Arguments, in order.
    pub args: Vec<String>,
}

impl Invocation {
    /// Create an invocation.
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// The program followed by its arguments.
    pub fn to_vec(&self) -> Vec<String> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Resolve `command` and `args` into the invocation for `manager`.
///
/// - `x` runs `<pm>x` with the arguments and no subcommand.
/// - In [`DispatchMode::Scripts`], a command naming a script in `manifest`
///   runs `<pm> run <command>`.
/// - In [`DispatchMode::Classic`], `build` runs `<pm> run build` and
///   `create` runs `<pm> create`.
/// - Anything else runs `<pm> <command>`.
///
/// Arguments are forwarded untouched.
///
/// # Examples
///
/// ```
/// use auto_pm::package::{Manifest, PackageManager};
/// use auto_pm::runner::{resolve_invocation, DispatchMode};
///
/// let args = vec!["vite".to_string(), "--port=3000".to_string()];
/// let inv = resolve_invocation(PackageManager::Pnpm, "x", &args, &Manifest::Absent, DispatchMode::Scripts);
/// assert_eq!(inv.to_string(), "pnpmx vite --port=3000");
/// ```
pub fn resolve_invocation(
    manager: PackageManager,
    command: &str,
    args: &[String],
    manifest: &Manifest,
    mode: DispatchMode,
) -> Invocation {
    if command == "x" {
        return Invocation::new(manager.exec_program(), args.to_vec());
    }

    let pm = manager.executable();
    let leading: Vec<&str> = match mode {
        DispatchMode::Scripts if manifest.has_script(command) => vec!["run", command],
        DispatchMode::Classic if command == "build" => vec!["run", "build"],
        DispatchMode::Classic if command == "create" => vec!["create"],
        _ => vec![command],
    };

    let mut cmd_args: Vec<String> = leading.into_iter().map(String::from).collect();
    cmd_args.extend(args.iter().cloned());

    Invocation::new(pm, cmd_args)
}
