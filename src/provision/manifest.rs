//! Dependency manifest reading
//!
//! The manifest is plain text with one package name per line. Surrounding
//! whitespace is trimmed and blank lines are ignored; order is preserved.

use std::fs;
use std::path::Path;

use crate::error::{Result, config as config_error};

/// Read the package names listed in the manifest at `path`
pub fn read_manifest(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| {
        config_error::manifest_read_failed(path.display().to_string(), e.to_string())
    })?;
    Ok(parse_manifest(&content))
}

/// Package names in manifest order
pub fn parse_manifest(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
