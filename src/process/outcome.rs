//! Fatal vs recoverable step outcomes

use std::fmt;

use super::{Invocation, ProcessExit};
use crate::error::{Result, ShipwrightError, process as process_error};

/// A tolerated failure of one workflow step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepFailure {
    pub step: String,
    pub reason: String,
}

impl fmt::Display for StepFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.step, self.reason)
    }
}

/// Result of a best-effort step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Succeeded,
    Recovered(StepFailure),
}

impl StepOutcome {
    /// Classify a best-effort program run. Neither a nonzero exit nor a failure
    /// to launch the program stops the workflow; both are logged as warnings.
    pub fn tolerate_exit(step: impl Into<String>, result: Result<ProcessExit>) -> Self {
        let reason = match result {
            Ok(exit) if exit.is_success() => return StepOutcome::Succeeded,
            Ok(exit) => exit.to_string(),
            Err(e) => e.to_string(),
        };
        Self::recovered(step, reason)
    }

    /// Classify a best-effort in-process operation
    pub fn tolerate_error(step: impl Into<String>, result: std::result::Result<(), ShipwrightError>) -> Self {
        match result {
            Ok(()) => StepOutcome::Succeeded,
            Err(e) => Self::recovered(step, e.to_string()),
        }
    }

    fn recovered(step: impl Into<String>, reason: String) -> Self {
        let failure = StepFailure {
            step: step.into(),
            reason,
        };
        tracing::warn!("{} failed ({}); continuing", failure.step, failure.reason);
        StepOutcome::Recovered(failure)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, StepOutcome::Succeeded)
    }

    pub fn failure(&self) -> Option<&StepFailure> {
        match self {
            StepOutcome::Succeeded => None,
            StepOutcome::Recovered(failure) => Some(failure),
        }
    }
}

/// Classify a program run that must succeed: a launch failure or nonzero exit
/// becomes a fatal error.
pub fn require_success(invocation: &Invocation, result: Result<ProcessExit>) -> Result<()> {
    let exit = result?;
    if exit.is_success() {
        Ok(())
    } else {
        Err(process_error::build_failed(&invocation.program, exit))
    }
}
