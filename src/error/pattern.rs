//! Glob pattern errors

use std::path::Path;

use super::ShipwrightError;

/// Creates an invalid pattern error
pub fn invalid(pattern: impl Into<String>, reason: impl ToString) -> ShipwrightError {
    ShipwrightError::InvalidPattern {
        pattern: pattern.into(),
        reason: reason.to_string(),
    }
}

/// Creates a walk failure error
pub fn walk_failed(root: &Path, pattern: impl Into<String>, reason: impl ToString) -> ShipwrightError {
    ShipwrightError::WalkFailed {
        root: root.display().to_string(),
        pattern: pattern.into(),
        reason: reason.to_string(),
    }
}
