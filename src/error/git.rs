//! Git clone errors

use super::ShipwrightError;

/// Creates a clone failed error
pub fn clone_failed(url: impl Into<String>, reason: impl Into<String>) -> ShipwrightError {
    ShipwrightError::GitCloneFailed {
        url: url.into(),
        reason: reason.into(),
    }
}
