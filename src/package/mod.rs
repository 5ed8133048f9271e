//! Package module for auto.
//!
//! Handles package.json reading, marker tables, and package manager
//! detection.

mod detect;
mod fs;
mod manager;
mod manifest;

pub use detect::{detect, Detection, DetectionSource, Detector, MAX_SEARCH_DEPTH};
pub use fs::{MemoryFs, OsFs, ProjectFs};
pub use manager::{parse_declaration, PackageManager, AUX_CONFIG_FILES, DECLARABLE, LOCK_FILES};
pub use manifest::{parse_manifest, read_manifest, Manifest, ManifestInfo, MANIFEST_FILE};
