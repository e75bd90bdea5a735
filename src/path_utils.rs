//! Cross-platform path utilities for Shipwright
//!
//! This module provides utilities for handling paths across different platforms
//! (Windows, macOS, Linux) with consistent behavior.

use std::path::{Path, PathBuf};

/// Convert a path to a string with forward slashes, for log output
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Absolute form of `path` for display, without Windows verbatim prefixes.
///
/// Falls back to the path as given when the current directory is unavailable.
pub fn display_absolute(path: &Path) -> String {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    dunce::simplified(&absolute).display().to_string()
}

/// Expand a leading `~/` (or a bare `~`) to the user's home directory.
///
/// Paths without a tilde prefix, and all paths when no home directory can be
/// determined, are returned unchanged.
pub fn expand_home(path: &str) -> PathBuf {
    let rest = if path == "~" {
        Some("")
    } else {
        path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\"))
    };

    match (rest, dirs::home_dir()) {
        (Some(rest), Some(home)) if rest.is_empty() => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

/// Resolve `path` against `base` unless it is already absolute
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
