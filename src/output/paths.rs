// src/output/paths.rs
//! Pure functions for export path calculation.

use std::path::{Path, PathBuf};

/// Where a download lands.
///
/// - no output given: `default_filename` in the working directory
/// - an existing directory, or a path ending in a separator: the default
///   file name inside it
/// - anything else: the path itself
pub fn resolve_output_path(output: Option<&Path>, default_filename: &str) -> PathBuf {
    match output {
        None => PathBuf::from(default_filename),
        Some(p) if p.as_os_str().is_empty() => PathBuf::from(default_filename),
        Some(p) if looks_like_dir_hint(p) || p.is_dir() => p.join(default_filename),
        Some(p) => p.to_path_buf(),
    }
}

/// A trailing `/` (or `\`) marks a directory even if it does not exist yet.
pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
