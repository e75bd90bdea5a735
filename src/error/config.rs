//! Configuration and manifest errors

use super::ShipwrightError;

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> ShipwrightError {
    ShipwrightError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> ShipwrightError {
    ShipwrightError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> ShipwrightError {
    ShipwrightError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates a manifest read failed error
pub fn manifest_read_failed(path: impl Into<String>, reason: impl Into<String>) -> ShipwrightError {
    ShipwrightError::ManifestReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
