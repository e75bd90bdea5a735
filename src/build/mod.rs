//! Build packaging
//!
//! Runs the build orchestrator for one profile and, only if it succeeds, mirrors
//! every artifact class from the orchestrator's output directory into the
//! profile's deployable directory. A failed or unlaunchable build is fatal and
//! leaves the deployable directory untouched.

mod flags;

use std::path::{Path, PathBuf};

use crate::domain::{ArtifactClass, BuildProfile, HostFlavor};
use crate::error::Result;
use crate::mirror::{MirrorResult, mirror};
use crate::process::{CommandRunner, Invocation, require_success};
use crate::progress::ProgressDisplay;

use flags::profile_flags;

/// Everything the packager needs to know about the project
#[derive(Debug, Clone)]
pub struct PackagerConfig {
    /// Directory the orchestrator runs in
    pub project_root: PathBuf,
    /// Orchestrator program name or path
    pub orchestrator: String,
    pub target: String,
    /// Where the orchestrator leaves its outputs
    pub output_dir: PathBuf,
    pub release_dir: PathBuf,
    pub debug_dir: PathBuf,
    /// Classes mirrored after a successful build, in order
    pub artifact_classes: Vec<ArtifactClass>,
    pub host: HostFlavor,
}

impl PackagerConfig {
    /// Deployable directory for `profile`
    pub fn destination(&self, profile: BuildProfile) -> &Path {
        match profile {
            BuildProfile::Release => &self.release_dir,
            BuildProfile::Debug => &self.debug_dir,
        }
    }

    /// `bazel build <flags> <target>`, run from the project root
    pub fn orchestrator_invocation(&self, profile: BuildProfile) -> Invocation {
        Invocation::new(&self.orchestrator)
            .arg("build")
            .args(profile_flags(profile, self.host))
            .arg(&self.target)
            .current_dir(&self.project_root)
    }
}

/// What one packaging run produced
#[derive(Debug, Clone)]
pub struct PackageReport {
    pub profile: BuildProfile,
    pub destination: PathBuf,
    /// One entry per artifact class, in class order
    pub mirrored: Vec<(ArtifactClass, MirrorResult)>,
}

impl PackageReport {
    pub fn files_copied(&self) -> usize {
        self.mirrored.iter().map(|(_, result)| result.len()).sum()
    }
}

/// Builds the project and assembles its deployable directory
pub struct Packager<R: CommandRunner> {
    config: PackagerConfig,
    runner: R,
    show_progress: bool,
}

impl<R: CommandRunner> Packager<R> {
    pub fn new(config: PackagerConfig, runner: R) -> Self {
        Self {
            config,
            runner,
            show_progress: false,
        }
    }

    #[must_use]
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn package(&self, profile: BuildProfile) -> Result<PackageReport> {
        let invocation = self.config.orchestrator_invocation(profile);
        tracing::info!("Building {} ({})", self.config.target, profile);
        tracing::debug!("Build command: {}", invocation);

        require_success(&invocation, self.runner.run(&invocation))?;

        let destination = self.config.destination(profile).to_path_buf();
        let classes = &self.config.artifact_classes;
        let progress = ProgressDisplay::new(classes.len() as u64, self.show_progress);
        let mut report = PackageReport {
            profile,
            destination: destination.clone(),
            mirrored: Vec::with_capacity(classes.len()),
        };

        for class in classes {
            progress.start_class(class);
            let result = progress.suspend(|| {
                mirror(&self.config.output_dir, &destination, &class.pattern)
            });
            match result {
                Ok(result) => {
                    progress.inc_class();
                    report.mirrored.push((class.clone(), result));
                }
                Err(e) => {
                    progress.abandon();
                    return Err(e);
                }
            }
        }

        progress.finish();
        Ok(report)
    }
}
