//! External program errors

use super::ShipwrightError;

/// Creates a spawn failure error
pub fn spawn_failed(program: impl Into<String>, reason: impl ToString) -> ShipwrightError {
    ShipwrightError::SpawnFailed {
        program: program.into(),
        reason: reason.to_string(),
    }
}

/// Creates a build failure error
pub fn build_failed(program: impl Into<String>, status: impl ToString) -> ShipwrightError {
    ShipwrightError::BuildFailed {
        program: program.into(),
        status: status.to_string(),
    }
}
