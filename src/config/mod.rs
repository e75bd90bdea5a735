//! Project configuration (`shipwright.yaml`)
//!
//! The file is optional: every setting has a default matching the conventional
//! layout (Bazel target `//src:game`, vcpkg in `~/.vcpkg`, manifest at
//! `tools/vcpkg_deps`, third-party tree at `third_party/`). Relative paths are
//! resolved against the project root.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::ArtifactClass;
use crate::domain::artifact::build_artifact_classes;
use crate::error::{Result, config as config_error};
use crate::path_utils::{expand_home, resolve_against};

/// Project config filename
pub const CONFIG_FILE: &str = "shipwright.yaml";

/// Environment variable overriding the dependency tool directory
pub const TOOL_DIR_ENV: &str = "SHIPWRIGHT_VCPKG_DIR";

/// Dependency tool directory under the user's home directory
const DEFAULT_TOOL_DIR: &str = ".vcpkg";

/// Upstream repository of the dependency tool
pub const DEFAULT_TOOL_REPOSITORY: &str = "https://github.com/Microsoft/vcpkg.git";

/// Root of `shipwright.yaml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    pub build: BuildConfig,
    pub deps: DepsConfig,
}

/// Build orchestrator and packaging settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Orchestrator program name or path
    pub orchestrator: String,
    /// Target label to build
    pub target: String,
    /// Directory the orchestrator writes its outputs to
    pub output_dir: PathBuf,
    /// Deployable directory for release builds
    pub release_dir: PathBuf,
    /// Deployable directory for debug builds
    pub debug_dir: PathBuf,
    /// Replaces the default artifact classes when set
    pub artifacts: Option<Vec<ArtifactClass>>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            orchestrator: "bazel".to_string(),
            target: "//src:game".to_string(),
            output_dir: PathBuf::from("bazel-bin/src"),
            release_dir: PathBuf::from("bin"),
            debug_dir: PathBuf::from("dbg"),
            artifacts: None,
        }
    }
}

impl BuildConfig {
    /// Artifact classes to mirror, in order
    pub fn artifact_classes(&self) -> Vec<ArtifactClass> {
        self.artifacts
            .clone()
            .unwrap_or_else(build_artifact_classes)
    }
}

/// Dependency provisioning settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DepsConfig {
    /// Dependency tool directory; `~/` is expanded
    pub tool_dir: Option<String>,
    /// Repository the dependency tool is cloned from
    pub repository: String,
    /// Manifest listing one package per line
    pub manifest: PathBuf,
    /// Root of the mirrored third-party tree
    pub third_party_dir: PathBuf,
}

impl Default for DepsConfig {
    fn default() -> Self {
        Self {
            tool_dir: None,
            repository: DEFAULT_TOOL_REPOSITORY.to_string(),
            manifest: PathBuf::from("tools/vcpkg_deps"),
            third_party_dir: PathBuf::from("third_party"),
        }
    }
}

impl ProjectConfig {
    /// Parse and validate configuration from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.build.orchestrator.trim().is_empty() {
            return Err(config_error::invalid("build.orchestrator must not be empty"));
        }
        if self.build.target.trim().is_empty() {
            return Err(config_error::invalid("build.target must not be empty"));
        }
        if let Some(artifacts) = &self.build.artifacts {
            if let Some(empty) = artifacts.iter().find(|a| a.pattern.trim().is_empty()) {
                return Err(config_error::invalid(format!(
                    "artifact pattern for {} must not be empty",
                    empty.category
                )));
            }
        }
        if self.deps.repository.trim().is_empty() {
            return Err(config_error::invalid("deps.repository must not be empty"));
        }
        Ok(())
    }

    /// Dependency tool directory, as an absolute path.
    ///
    /// Precedence: `SHIPWRIGHT_VCPKG_DIR`, then `deps.tool_dir`, then `~/.vcpkg`.
    pub fn tool_dir(&self, project_root: &Path) -> Result<PathBuf> {
        let dir = if let Ok(dir) = std::env::var(TOOL_DIR_ENV) {
            expand_home(&dir)
        } else if let Some(dir) = &self.deps.tool_dir {
            expand_home(dir)
        } else {
            let home = dirs::home_dir().ok_or_else(|| {
                config_error::invalid(format!(
                    "Could not determine home directory; set {TOOL_DIR_ENV} or deps.tool_dir"
                ))
            })?;
            home.join(DEFAULT_TOOL_DIR)
        };
        absolute(&resolve_against(project_root, &dir))
    }

    pub fn manifest_path(&self, project_root: &Path) -> PathBuf {
        resolve_against(project_root, &self.deps.manifest)
    }

    pub fn third_party_dir(&self, project_root: &Path) -> Result<PathBuf> {
        absolute(&resolve_against(project_root, &self.deps.third_party_dir))
    }

    pub fn output_dir(&self, project_root: &Path) -> PathBuf {
        resolve_against(project_root, &self.build.output_dir)
    }

    pub fn release_dir(&self, project_root: &Path) -> PathBuf {
        resolve_against(project_root, &self.build.release_dir)
    }

    pub fn debug_dir(&self, project_root: &Path) -> PathBuf {
        resolve_against(project_root, &self.build.debug_dir)
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).map_err(|e| {
        config_error::invalid(format!("Cannot resolve '{}': {}", path.display(), e))
    })
}

/// Load `shipwright.yaml` from `project_root`
///
/// Returns the default configuration if the file does not exist.
pub fn load_project_config(project_root: &Path) -> Result<ProjectConfig> {
    let path = project_root.join(CONFIG_FILE);

    if !path.exists() {
        return Ok(ProjectConfig::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| config_error::read_failed(path.display().to_string(), e.to_string()))?;

    ProjectConfig::from_yaml(&content).map_err(|e| match e {
        crate::error::ShipwrightError::ConfigParseFailed { reason, .. } => {
            config_error::parse_failed(path.display().to_string(), reason)
        }
        other => other,
    })
}
