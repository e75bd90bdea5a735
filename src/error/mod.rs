//! Error types and handling for Shipwright
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`fs`]: File system errors raised while mirroring
//! - [`pattern`]: Glob pattern errors
//! - [`process`]: External program errors
//! - [`config`]: Configuration and manifest errors
//! - [`git`]: Git clone errors

pub mod config;
pub mod fs;
pub mod git;
pub mod pattern;
pub mod process;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Shipwright operations
#[derive(Error, Diagnostic, Debug)]
pub enum ShipwrightError {
    // File system errors
    #[error("Failed to copy '{from}' to '{to}': {reason}")]
    #[diagnostic(
        code(shipwright::fs::copy_failed),
        help("Check that the destination is not locked by another process and the disk is not full")
    )]
    CopyFailed {
        from: String,
        to: String,
        reason: String,
    },

    #[error("Failed to create directory: {path}: {reason}")]
    #[diagnostic(code(shipwright::fs::create_dir_failed))]
    CreateDirFailed { path: String, reason: String },

    #[error("Failed to update permissions of '{path}': {reason}")]
    #[diagnostic(code(shipwright::fs::permissions_failed))]
    PermissionsFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(shipwright::fs::io_error))]
    IoError { message: String },

    // Pattern errors
    #[error("Invalid glob pattern '{pattern}': {reason}")]
    #[diagnostic(
        code(shipwright::pattern::invalid),
        help("Patterns use '*' within a path component and '**' across directories")
    )]
    InvalidPattern { pattern: String, reason: String },

    #[error("Failed to walk '{root}' for pattern '{pattern}': {reason}")]
    #[diagnostic(code(shipwright::pattern::walk_failed))]
    WalkFailed {
        root: String,
        pattern: String,
        reason: String,
    },

    // Process errors
    #[error("Failed to launch '{program}': {reason}")]
    #[diagnostic(
        code(shipwright::process::spawn_failed),
        help("Make sure the program is installed and on PATH")
    )]
    SpawnFailed { program: String, reason: String },

    #[error("Build failed: '{program}' exited with {status}")]
    #[diagnostic(
        code(shipwright::process::build_failed),
        help("See the build output above; no artifacts were copied")
    )]
    BuildFailed { program: String, status: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(shipwright::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(shipwright::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(shipwright::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Failed to read dependency manifest: {path}: {reason}")]
    #[diagnostic(
        code(shipwright::config::manifest_read_failed),
        help("The manifest lists one vcpkg package per line; pass --skip-install to only mirror")
    )]
    ManifestReadFailed { path: String, reason: String },

    // Git errors
    #[error("Failed to clone repository: {url}: {reason}")]
    #[diagnostic(
        code(shipwright::git::clone_failed),
        help("Check that URL is correct and you have access to repository")
    )]
    GitCloneFailed { url: String, reason: String },
}

impl From<std::io::Error> for ShipwrightError {
    fn from(err: std::io::Error) -> Self {
        ShipwrightError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ShipwrightError {
    fn from(err: serde_yaml::Error) -> Self {
        ShipwrightError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ShipwrightError>;
