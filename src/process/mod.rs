//! External program execution
//!
//! Every external program (the build orchestrator, the dependency tool and its
//! bootstrap script) is launched through the [`CommandRunner`] trait. Calls are
//! synchronous and inherit the parent's standard streams; there is no timeout.
//!
//! Outcomes are classified explicitly:
//! - a failure that must abort the workflow is an `Err(ShipwrightError)`
//! - a failure the workflow tolerates is a [`StepOutcome::Recovered`]

mod outcome;

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Result, process as process_error};

pub use outcome::{StepOutcome, require_success};

/// A fully described external program call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// How an external program ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessExit {
    /// Exit code, `None` when the process was terminated by a signal
    pub code: Option<i32>,
}

impl ProcessExit {
    #[cfg(test)]
    pub fn success() -> Self {
        Self { code: Some(0) }
    }

    pub fn with_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

impl fmt::Display for ProcessExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit status {code}"),
            None => write!(f, "termination by signal"),
        }
    }
}

/// Launches external programs
///
/// `Err` means the program could not be started at all; a started program that
/// fails is reported through its [`ProcessExit`].
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation) -> Result<ProcessExit>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, invocation: &Invocation) -> Result<ProcessExit> {
        (**self).run(invocation)
    }
}

/// Runs programs on the host with inherited stdio, blocking until they exit
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<ProcessExit> {
        tracing::debug!("Running: {}", invocation);

        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args);
        if let Some(cwd) = &invocation.cwd {
            command.current_dir(cwd);
        }

        let status = command
            .status()
            .map_err(|e| process_error::spawn_failed(&invocation.program, e))?;

        Ok(match status.code() {
            Some(code) => ProcessExit::with_code(code),
            None => ProcessExit { code: None },
        })
    }
}
