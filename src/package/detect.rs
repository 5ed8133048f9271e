//! Project root resolution and package manager detection.
//!
//! Starting from a directory, each level is tested in order:
//! 1. Lock files (`yarn.lock`, `package-lock.json`, `pnpm-lock.yaml`,
//!    `bun.lockb`, `bun.lock`)
//! 2. A recognized `packageManager` declaration in package.json
//! 3. Auxiliary configs (`deno.json`, `deno.jsonc`, `jspm.config.js`,
//!    `rome.json`)
//!
//! The first directory with a match is the project root. A package.json
//! without a recognized declaration does not stop the walk: a workspace
//! root further up may still hold the lock file.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::fs::{OsFs, ProjectFs};
use super::manager::{PackageManager, AUX_CONFIG_FILES, LOCK_FILES};
use super::manifest::{read_manifest, Manifest, MANIFEST_FILE};
use crate::error::{AutoError, Result};

/// Maximum number of directories examined, the start directory included.
pub const MAX_SEARCH_DEPTH: usize = 20;

/// The evidence a detection was based on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectionSource {
    /// A lock file with this name.
    LockFile(&'static str),
    /// The `packageManager` field with this value.
    Manifest(String),
    /// An auxiliary toolchain config with this name.
    AuxConfig(&'static str),
    /// Forced by the user (CLI flag or config file).
    Override(String),
}

impl fmt::Display for DetectionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectionSource::LockFile(name) => write!(f, "found {name}"),
            DetectionSource::Manifest(value) => {
                write!(f, "packageManager \"{value}\" in {MANIFEST_FILE}")
            }
            DetectionSource::AuxConfig(name) => write!(f, "found {name}"),
            DetectionSource::Override(origin) => write!(f, "{origin}"),
        }
    }
}

/// A resolved package manager and the directory it governs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// The package manager to dispatch through.
    pub manager: PackageManager,
    /// The directory at which detection resolved.
    pub root: PathBuf,
    /// Why this package manager was chosen.
    pub source: DetectionSource,
    /// The package.json closest to the start directory, if any was seen.
    pub manifest: Manifest,
}

impl Detection {
    /// Build a detection for a package manager forced by the user.
    ///
    /// The root is `start` and the manifest is read from there.
    pub fn overridden(
        fs: &impl ProjectFs,
        manager: PackageManager,
        start: &Path,
        origin: impl Into<String>,
    ) -> Self {
        Self {
            manager,
            root: start.to_path_buf(),
            source: DetectionSource::Override(origin.into()),
            manifest: read_manifest(fs, &start.join(MANIFEST_FILE)),
        }
    }
}

impl fmt::Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, root {})",
            self.manager,
            self.source,
            self.root.display()
        )
    }
}

/// Walks up from a start directory looking for package manager markers.
#[derive(Debug, Clone)]
pub struct Detector<F = OsFs> {
    fs: F,
    max_depth: usize,
}

impl Default for Detector<OsFs> {
    fn default() -> Self {
        Self::new(OsFs)
    }
}

impl<F: ProjectFs> Detector<F> {
    /// Create a detector over the given filesystem.
    pub fn new(fs: F) -> Self {
        Self {
            fs,
            max_depth: MAX_SEARCH_DEPTH,
        }
    }

    /// Set how many directories may be examined. Values below 1 are
    /// treated as 1.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }

    /// The configured traversal ceiling.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Detect the package manager governing `start`.
    ///
    /// # Errors
    ///
    /// Returns [`AutoError::NoProjectRoot`] when the filesystem root is
    /// reached without a match, and [`AutoError::TraversalLimit`] when the
    /// depth ceiling is exhausted first.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use auto_pm::package::{Detector, MemoryFs, PackageManager};
    ///
    /// let fs = MemoryFs::new()
    ///     .with_file("/repo/pnpm-lock.yaml", "")
    ///     .with_dir("/repo/packages/web");
    ///
    /// let detection = Detector::new(fs).detect(Path::new("/repo/packages/web")).unwrap();
    /// assert_eq!(detection.manager, PackageManager::Pnpm);
    /// assert_eq!(detection.root, Path::new("/repo"));
    /// ```
    pub fn detect(&self, start: &Path) -> Result<Detection> {
        let mut nearest_manifest = Manifest::Absent;
        let mut current = start;

        for depth in 0..self.max_depth {
            debug!(dir = %current.display(), depth, "checking directory");

            let manifest = self.dir_manifest(current);
            let resolved = self.check_dir(current, &manifest);
            if !nearest_manifest.is_present() {
                nearest_manifest = manifest;
            }

            if let Some((manager, source)) = resolved {
                debug!(%manager, %source, root = %current.display(), "package manager detected");
                return Ok(Detection {
                    manager,
                    root: current.to_path_buf(),
                    source,
                    manifest: nearest_manifest,
                });
            }

            match current.parent() {
                Some(parent) if parent != current => current = parent,
                _ => {
                    debug!(searched = depth + 1, "reached filesystem root");
                    return Err(AutoError::NoProjectRoot {
                        path: start.to_path_buf(),
                        searched: depth + 1,
                    });
                }
            }
        }

        debug!(depth = self.max_depth, "traversal limit reached");
        Err(AutoError::TraversalLimit {
            path: start.to_path_buf(),
            depth: self.max_depth,
        })
    }

    fn dir_manifest(&self, dir: &Path) -> Manifest {
        let path = dir.join(MANIFEST_FILE);
        if self.fs.is_file(&path) {
            read_manifest(&self.fs, &path)
        } else {
            Manifest::Absent
        }
    }

    /// Test a single directory against all three tiers.
    fn check_dir(
        &self,
        dir: &Path,
        manifest: &Manifest,
    ) -> Option<(PackageManager, DetectionSource)> {
        if let Some((name, manager)) = self.first_marker(dir, LOCK_FILES) {
            return Some((manager, DetectionSource::LockFile(name)));
        }

        if let Some(info) = manifest.info() {
            if let Some(manager) = info.declared_manager() {
                let declaration = info.declaration.clone().unwrap_or_default();
                return Some((manager, DetectionSource::Manifest(declaration)));
            }
            debug!(dir = %dir.display(), "package.json declares no known package manager");
        }

        self.first_marker(dir, AUX_CONFIG_FILES)
            .map(|(name, manager)| (manager, DetectionSource::AuxConfig(name)))
    }

    fn first_marker(
        &self,
        dir: &Path,
        table: &[(&'static str, PackageManager)],
    ) -> Option<(&'static str, PackageManager)> {
        table
            .iter()
            .copied()
            .find(|(name, _)| self.fs.is_file(&dir.join(name)))
    }
}

/// Detect the package manager for `start` on the real filesystem with the
/// default depth.
///
/// # Errors
///
/// See [`Detector::detect`].
pub fn detect(start: &Path) -> Result<Detection> {
    Detector::default().detect(start)
}
