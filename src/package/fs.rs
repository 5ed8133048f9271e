//! Read-only filesystem access used by detection.
//!
//! Detection only ever asks two questions of the filesystem: does a regular
//! file exist at a path, and what does it contain. Both go through
//! [`ProjectFs`] so detection can run against the real disk ([`OsFs`]) or a
//! synthetic tree ([`MemoryFs`]).

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

/// Read-only view of a project tree.
pub trait ProjectFs {
    /// Returns true if `path` is a regular file. Errors count as "no".
    fn is_file(&self, path: &Path) -> bool;

    /// Read the whole file at `path` as UTF-8.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

impl<T: ProjectFs + ?Sized> ProjectFs for &T {
    fn is_file(&self, path: &Path) -> bool {
        (**self).is_file(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        (**self).read_to_string(path)
    }
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFs;

impl ProjectFs for OsFs {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// An in-memory tree of files and directories.
///
/// Adding a file also registers all of its ancestors as directories, so
/// a directory entry never shadows a file check.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use auto_pm::package::{MemoryFs, ProjectFs};
///
/// let fs = MemoryFs::new().with_file("/app/yarn.lock", "");
/// assert!(fs.is_file(Path::new("/app/yarn.lock")));
/// assert!(!fs.is_file(Path::new("/app")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
}

impl MemoryFs {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with the given content.
    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let path = path.into();
        for ancestor in path.ancestors().skip(1) {
            self.dirs.insert(ancestor.to_path_buf());
        }
        self.files.insert(path, content.into());
    }

    /// Builder form of [`MemoryFs::add_file`].
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.add_file(path, content);
        self
    }

    /// Add an empty directory.
    pub fn add_dir(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        for ancestor in path.ancestors() {
            self.dirs.insert(ancestor.to_path_buf());
        }
    }

    /// Builder form of [`MemoryFs::add_dir`].
    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.add_dir(path);
        self
    }
}

impl ProjectFs for MemoryFs {
    fn is_file(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        if self.dirs.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("{} is a directory", path.display()),
            ));
        }
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )
        })
    }
}
