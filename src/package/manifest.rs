//! package.json reading.
//!
//! Only two fields matter here: `packageManager` and the keys of `scripts`.
//! Reading never fails: a missing, unreadable or malformed manifest is
//! reported as [`Manifest::Absent`] so detection can carry on with other
//! markers.

use std::collections::BTreeSet;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use super::fs::ProjectFs;
use super::manager::{parse_declaration, PackageManager};

/// File name of the project manifest.
pub const MANIFEST_FILE: &str = "package.json";

/// The two fields extracted from a package.json.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestInfo {
    /// Raw `packageManager` value (e.g. "pnpm@8.0.0").
    pub declaration: Option<String>,
    /// Names of the scripts defined in `scripts`.
    pub scripts: BTreeSet<String>,
}

impl ManifestInfo {
    /// The package manager named by the declaration, if any.
    pub fn declared_manager(&self) -> Option<PackageManager> {
        self.declaration.as_deref().and_then(parse_declaration)
    }

    /// Check if a script with this name is defined.
    pub fn has_script(&self, name: &str) -> bool {
        self.scripts.contains(name)
    }
}

/// Outcome of reading a package.json.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Manifest {
    /// No usable manifest: missing, unreadable or not valid JSON.
    #[default]
    Absent,
    /// A parsed manifest.
    Present(ManifestInfo),
}

impl Manifest {
    /// Check if a manifest was found and parsed.
    pub fn is_present(&self) -> bool {
        matches!(self, Manifest::Present(_))
    }

    /// Get the parsed fields, if present.
    pub fn info(&self) -> Option<&ManifestInfo> {
        match self {
            Manifest::Present(info) => Some(info),
            Manifest::Absent => None,
        }
    }

    /// The package manager named by the declaration, if any.
    pub fn declared_manager(&self) -> Option<PackageManager> {
        self.info().and_then(ManifestInfo::declared_manager)
    }

    /// Check if a script with this name is defined.
    pub fn has_script(&self, name: &str) -> bool {
        self.info().is_some_and(|info| info.has_script(name))
    }

    /// Script names, empty when absent.
    pub fn scripts(&self) -> impl Iterator<Item = &str> {
        self.info()
            .into_iter()
            .flat_map(|info| info.scripts.iter().map(String::as_str))
    }
}

/// Read the package.json at `path`.
///
/// # Examples
///
/// ```
/// use auto_pm::package::{read_manifest, Manifest, MemoryFs};
///
/// let fs = MemoryFs::new().with_file("/app/package.json", r#"{"packageManager": "bun@1.1.0"}"#);
/// let manifest = read_manifest(&fs, "/app/package.json".as_ref());
/// assert!(manifest.is_present());
///
/// assert_eq!(read_manifest(&fs, "/other/package.json".as_ref()), Manifest::Absent);
/// ```
pub fn read_manifest(fs: &impl ProjectFs, path: &Path) -> Manifest {
    match fs.read_to_string(path) {
        Ok(content) => {
            let manifest = parse_manifest(&content);
            if !manifest.is_present() {
                debug!(path = %path.display(), "ignoring malformed manifest");
            }
            manifest
        }
        Err(err) => {
            debug!(path = %path.display(), error = %err, "manifest not readable");
            Manifest::Absent
        }
    }
}

/// Parse package.json content.
///
/// Anything that is not a JSON object is [`Manifest::Absent`]. A
/// `packageManager` that is not a string counts as no declaration, and a
/// `scripts` that is not an object counts as no scripts. Script keys
/// starting with `//` are comments and are skipped.
pub fn parse_manifest(content: &str) -> Manifest {
    let Ok(Value::Object(root)) = serde_json::from_str::<Value>(content) else {
        return Manifest::Absent;
    };

    let declaration = root
        .get("packageManager")
        .and_then(Value::as_str)
        .map(str::to_string);

    let scripts = root
        .get("scripts")
        .and_then(Value::as_object)
        .map(|scripts| {
            scripts
                .keys()
                .filter(|name| !name.starts_with("//"))
                .cloned()
                .collect()
        })
        .unwrap_or_default();

    Manifest::Present(ManifestInfo {
        declaration,
        scripts,
    })
}
