//! Tree mirroring
//!
//! This module handles:
//! - Resolving a glob pattern (with recursive `**` segments) under a source root
//! - Copying every matched regular file to the same relative path under a destination root
//! - Forcing the owner-write bit on every copied file
//!
//! Copies are unconditional: every invocation re-copies every match, whatever the
//! state of the destination. Zero matches (including a missing source root) is not
//! an error; the destination root is still created.

mod copy;
mod resolve;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, fs as fs_error};
use crate::path_utils;

use copy::copy_file;
use resolve::resolve_matches;

/// One mirror request: copy everything `pattern` matches under `source_root`
/// into `destination_root`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorSpec {
    pub source_root: PathBuf,
    pub destination_root: PathBuf,
    pub pattern: String,
}

impl MirrorSpec {
    pub fn new(
        source_root: impl Into<PathBuf>,
        destination_root: impl Into<PathBuf>,
        pattern: impl Into<String>,
    ) -> Self {
        Self {
            source_root: source_root.into(),
            destination_root: destination_root.into(),
            pattern: pattern.into(),
        }
    }

    /// Execute this mirror request
    pub fn run(&self) -> Result<MirrorResult> {
        mirror(&self.source_root, &self.destination_root, &self.pattern)
    }
}

/// A file copied by a mirror operation, relative to both roots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirroredFile {
    pub relative_path: PathBuf,
}

/// Files copied during one mirror operation, in copy order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MirrorResult {
    pub files: Vec<MirroredFile>,
}

impl MirrorResult {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn relative_paths(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(|f| f.relative_path.as_path())
    }
}

/// Mirror every file matching `pattern` under `source_root` into `destination_root`.
///
/// The destination root is created first (if absent). Each match lands at
/// `destination_root / relative_path`, with intermediate directories created as
/// needed. The first I/O failure aborts the operation; files already copied stay.
pub fn mirror(source_root: &Path, destination_root: &Path, pattern: &str) -> Result<MirrorResult> {
    if !destination_root.is_dir() {
        fs::create_dir_all(destination_root)
            .map_err(|e| fs_error::create_dir_failed(destination_root, e))?;
    }

    tracing::info!(
        "Copying {} to {}",
        path_utils::display_absolute(&source_root.join(pattern)),
        destination_root.display()
    );

    let matches = resolve_matches(source_root, pattern)?;
    let mut result = MirrorResult::default();

    for source_file in matches {
        let relative_path = source_file
            .strip_prefix(source_root)
            .map_err(|e| {
                fs_error::io_error(format!(
                    "'{}' is not under '{}': {}",
                    source_file.display(),
                    source_root.display(),
                    e
                ))
            })?
            .to_path_buf();

        let destination_file = destination_root.join(&relative_path);
        copy_file(&source_file, &destination_file)?;

        tracing::debug!("  {}", path_utils::to_forward_slashes(&relative_path));
        result.files.push(MirroredFile { relative_path });
    }

    Ok(result)
}
