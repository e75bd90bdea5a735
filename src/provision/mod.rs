//! Native dependency provisioning
//!
//! This module handles:
//! - Bringing the vcpkg checkout to a usable state (clone, bootstrap) on first use
//! - Installing every manifest package for a triplet, in manifest order
//! - Mirroring installed libraries and headers into the project's third-party tree
//!
//! Clone, bootstrap and install failures are tolerated: each is recorded as a
//! [`StepOutcome::Recovered`] and the workflow moves on. The closing mirror is the
//! real gate; its failures are fatal.

mod manifest;
mod tool;

use std::path::{Path, PathBuf};

use crate::domain::artifact::dependency_artifact_classes;
use crate::domain::{ArtifactClass, DependencySpec, HostFlavor};
use crate::error::{Result, config as config_error};
use crate::git;
use crate::mirror::{MirrorResult, mirror};
use crate::process::{CommandRunner, StepOutcome};

use manifest::read_manifest;
use tool::VcpkgTool;

pub use tool::ToolState;

/// Everything the provisioner needs to know about its environment
#[derive(Debug, Clone)]
pub struct ProvisionerConfig {
    /// Where the vcpkg checkout lives (or will be cloned to)
    pub tool_dir: PathBuf,
    /// Repository cloned when the checkout is missing
    pub repository: String,
    /// Root of the mirrored third-party tree; each triplet gets a subdirectory
    pub third_party_root: PathBuf,
    pub host: HostFlavor,
}

/// What happened during one provisioning run
#[derive(Debug, Clone, Default)]
pub struct ProvisionReport {
    /// Tool state after the readiness check, `None` when no install was attempted
    pub tool_state: Option<ToolState>,
    /// Clone and bootstrap outcomes, in order
    pub tool_steps: Vec<StepOutcome>,
    /// One entry per manifest package, in manifest order
    pub installs: Vec<(DependencySpec, StepOutcome)>,
    /// One entry per dependency artifact class
    pub mirrored: Vec<(ArtifactClass, MirrorResult)>,
    pub destination: PathBuf,
}

impl ProvisionReport {
    pub fn failed_installs(&self) -> impl Iterator<Item = &DependencySpec> {
        self.installs
            .iter()
            .filter(|(_, outcome)| !outcome.is_success())
            .map(|(spec, _)| spec)
    }

    pub fn files_copied(&self) -> usize {
        self.mirrored.iter().map(|(_, result)| result.len()).sum()
    }
}

/// Drives the dependency tool for one project
pub struct Provisioner<R: CommandRunner> {
    config: ProvisionerConfig,
    tool: VcpkgTool,
    runner: R,
}

impl<R: CommandRunner> Provisioner<R> {
    pub fn new(config: ProvisionerConfig, runner: R) -> Self {
        let tool = VcpkgTool::new(&config.tool_dir, config.host);
        Self {
            config,
            tool,
            runner,
        }
    }

    /// Install the manifest's packages for `triplet` (unless `skip_install`) and
    /// mirror the installed tree into `{third_party_root}/{triplet}`.
    pub fn provision(
        &self,
        triplet: &str,
        manifest_path: &Path,
        skip_install: bool,
    ) -> Result<ProvisionReport> {
        if triplet.trim().is_empty() {
            return Err(config_error::invalid("triplet must not be empty"));
        }

        tracing::info!("Using vcpkg directory: {}", self.tool.dir().display());
        tracing::info!("Using triplet: {}", triplet);

        let mut report = ProvisionReport::default();

        if !skip_install {
            for package in read_manifest(manifest_path)? {
                if report.tool_state.is_none() {
                    report.tool_state = Some(self.ensure_ready(&mut report.tool_steps));
                }
                let spec = DependencySpec::new(package, triplet);
                let outcome = self.install(&spec);
                report.installs.push((spec, outcome));
            }
        }

        let source = self.tool.installed_dir(triplet);
        let destination = self.config.third_party_root.join(triplet);

        for class in dependency_artifact_classes() {
            let result = mirror(&source, &destination, &class.pattern)?;
            report.mirrored.push((class, result));
        }

        report.destination = destination;
        Ok(report)
    }

    /// Walk the tool from whatever state is on disk towards `Ready`.
    ///
    /// A failed readiness check always restarts from the clone; partial earlier
    /// attempts are not resumed.
    fn ensure_ready(&self, steps: &mut Vec<StepOutcome>) -> ToolState {
        if self.tool.is_ready() {
            return ToolState::Ready;
        }

        tracing::info!("Installing vcpkg at directory: {}", self.tool.dir().display());
        let mut state = ToolState::NotPresent;

        let cloned = StepOutcome::tolerate_error(
            "clone vcpkg",
            git::clone(&self.config.repository, self.tool.dir(), false).map(|_| ()),
        );
        if cloned.is_success() {
            state = ToolState::Cloned;
        }
        steps.push(cloned);

        let bootstrap = self.tool.bootstrap_invocation();
        tracing::info!("Running vcpkg bootstrap: {}", bootstrap);
        let bootstrapped =
            StepOutcome::tolerate_exit("bootstrap vcpkg", self.runner.run(&bootstrap));
        if bootstrapped.is_success() {
            state = ToolState::Bootstrapped;
        }
        steps.push(bootstrapped);

        if self.tool.is_ready() {
            ToolState::Ready
        } else {
            tracing::warn!(
                "vcpkg executable not found at {} after bootstrap; package installs will fail",
                self.tool.executable().display()
            );
            state
        }
    }

    fn install(&self, spec: &DependencySpec) -> StepOutcome {
        let invocation = self.tool.install_invocation(spec);
        tracing::info!("Running vcpkg command: vcpkg install {}", spec);
        StepOutcome::tolerate_exit(format!("install {spec}"), self.runner.run(&invocation))
    }
}
