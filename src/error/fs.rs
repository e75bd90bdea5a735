//! File system errors

use std::path::Path;

use super::ShipwrightError;

/// Creates a copy failed error
pub fn copy_failed(from: &Path, to: &Path, reason: impl ToString) -> ShipwrightError {
    ShipwrightError::CopyFailed {
        from: from.display().to_string(),
        to: to.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a directory creation error
pub fn create_dir_failed(path: &Path, reason: impl ToString) -> ShipwrightError {
    ShipwrightError::CreateDirFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a permissions update error
pub fn permissions_failed(path: &Path, reason: impl ToString) -> ShipwrightError {
    ShipwrightError::PermissionsFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> ShipwrightError {
    ShipwrightError::IoError {
        message: message.into(),
    }
}
