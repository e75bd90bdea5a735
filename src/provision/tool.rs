//! The dependency tool's on-disk layout and invocations

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::{DependencySpec, HostFlavor};
use crate::process::Invocation;

/// Lifecycle of the dependency tool's installation.
///
/// Recomputed from disk on every run; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolState {
    NotPresent,
    Cloned,
    Bootstrapped,
    Ready,
}

impl fmt::Display for ToolState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolState::NotPresent => write!(f, "not present"),
            ToolState::Cloned => write!(f, "cloned"),
            ToolState::Bootstrapped => write!(f, "bootstrapped"),
            ToolState::Ready => write!(f, "ready"),
        }
    }
}

/// A vcpkg checkout rooted at `dir`
#[derive(Debug, Clone)]
pub struct VcpkgTool {
    dir: PathBuf,
    host: HostFlavor,
}

impl VcpkgTool {
    pub fn new(dir: impl Into<PathBuf>, host: HostFlavor) -> Self {
        Self {
            dir: dir.into(),
            host,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn executable(&self) -> PathBuf {
        match self.host {
            HostFlavor::Windows => self.dir.join("vcpkg.exe"),
            HostFlavor::Unix => self.dir.join("vcpkg"),
        }
    }

    /// The tool is usable once its executable exists
    pub fn is_ready(&self) -> bool {
        self.executable().is_file()
    }

    /// Root of the packages installed for `triplet`
    pub fn installed_dir(&self, triplet: &str) -> PathBuf {
        self.dir.join("installed").join(triplet)
    }

    pub fn bootstrap_invocation(&self) -> Invocation {
        match self.host {
            HostFlavor::Windows => Invocation::new("cmd")
                .args(["/C", "bootstrap-vcpkg.bat"])
                .current_dir(&self.dir),
            HostFlavor::Unix => Invocation::new("sh")
                .arg("bootstrap-vcpkg.sh")
                .current_dir(&self.dir),
        }
    }

    pub fn install_invocation(&self, spec: &DependencySpec) -> Invocation {
        Invocation::new(self.executable().to_string_lossy())
            .arg("install")
            .arg(spec.to_string())
            .current_dir(&self.dir)
    }
}
