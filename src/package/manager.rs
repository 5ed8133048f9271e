//! Package manager identities and the marker tables that select them.
//!
//! Markers are checked per directory in three tiers:
//! 1. Lock files
//! 2. `packageManager` field in package.json
//! 3. Auxiliary toolchain config files
//!
//! Within a tier the first entry of the table that matches wins.

use serde::{Deserialize, Serialize};

/// Supported package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    /// Node Package Manager (npm)
    Npm,
    /// Yarn package manager
    Yarn,
    /// pnpm - Fast, disk space efficient package manager
    Pnpm,
    /// Bun - Fast all-in-one JavaScript runtime
    Bun,
    /// Deno runtime
    Deno,
    /// JSPM import map package manager
    Jspm,
    /// Rome toolchain
    Rome,
}

/// Lock files in precedence order.
pub const LOCK_FILES: &[(&str, PackageManager)] = &[
    ("yarn.lock", PackageManager::Yarn),
    ("package-lock.json", PackageManager::Npm),
    ("pnpm-lock.yaml", PackageManager::Pnpm),
    ("bun.lockb", PackageManager::Bun),
    ("bun.lock", PackageManager::Bun),
];

/// Auxiliary toolchain config files in precedence order.
pub const AUX_CONFIG_FILES: &[(&str, PackageManager)] = &[
    ("deno.json", PackageManager::Deno),
    ("deno.jsonc", PackageManager::Deno),
    ("jspm.config.js", PackageManager::Jspm),
    ("rome.json", PackageManager::Rome),
];

/// Managers that can be pinned through `packageManager`, in trial order.
pub const DECLARABLE: &[PackageManager] = &[
    PackageManager::Npm,
    PackageManager::Yarn,
    PackageManager::Pnpm,
    PackageManager::Bun,
];

impl PackageManager {
    /// Get the executable name for this package manager.
    pub fn executable(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
            PackageManager::Deno => "deno",
            PackageManager::Jspm => "jspm",
            PackageManager::Rome => "rome",
        }
    }

    /// Program used for the `x` command: the executable name with an `x`
    /// appended (`pnpm` -> `pnpmx`, `bun` -> `bunx`).
    pub fn exec_program(&self) -> String {
        format!("{}x", self.executable())
    }

    /// Get all supported package managers.
    pub fn all() -> &'static [PackageManager] {
        &[
            PackageManager::Npm,
            PackageManager::Yarn,
            PackageManager::Pnpm,
            PackageManager::Bun,
            PackageManager::Deno,
            PackageManager::Jspm,
            PackageManager::Rome,
        ]
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.executable())
    }
}

impl std::str::FromStr for PackageManager {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.to_lowercase();
        PackageManager::all()
            .iter()
            .copied()
            .find(|pm| pm.executable() == name)
            .ok_or_else(|| {
                let valid: Vec<&str> = PackageManager::all()
                    .iter()
                    .map(|pm| pm.executable())
                    .collect();
                format!(
                    "Unknown package manager: '{s}'. Valid options are: {}",
                    valid.join(", ")
                )
            })
    }
}

/// Parse the `packageManager` field value to extract the package manager.
///
/// The name is matched as a plain prefix, trying npm, yarn, pnpm and bun in
/// that order, so `"pnpm@8.0.0"`, `"yarn@4.0.0+sha256.abc"` and `"bun"` all
/// resolve. An empty value never matches.
///
/// # Examples
///
/// ```
/// use auto_pm::package::{parse_declaration, PackageManager};
///
/// assert_eq!(parse_declaration("pnpm@8.0.0"), Some(PackageManager::Pnpm));
/// assert_eq!(parse_declaration(""), None);
/// assert_eq!(parse_declaration("cnpm@9"), None);
/// ```
pub fn parse_declaration(value: &str) -> Option<PackageManager> {
    if value.is_empty() {
        return None;
    }

    DECLARABLE
        .iter()
        .copied()
        .find(|pm| value.starts_with(pm.executable()))
}
