//! Utility module for auto.
//!
//! Path resolution and logging setup.

pub mod logging;
mod paths;

pub use paths::{config_dir, global_config_file, local_config_file, resolve_start_dir};
