//! Command helper utilities

use std::path::{Path, PathBuf};

use console::Style;

use crate::build::PackagerConfig;
use crate::config::ProjectConfig;
use crate::domain::{ArtifactClass, HostFlavor};
use crate::error::{Result, fs as fs_error};
use crate::mirror::MirrorResult;

/// Resolve project root from optional argument
///
/// If a project path is provided, use it. Otherwise, resolve to the current
/// directory. The result is always absolute.
pub fn resolve_project_root(project: Option<PathBuf>) -> Result<PathBuf> {
    let path = match project {
        Some(path) => path,
        None => std::env::current_dir()
            .map_err(|e| fs_error::io_error(format!("Failed to get current directory: {}", e)))?,
    };
    std::path::absolute(&path).map_err(|e| {
        fs_error::io_error(format!(
            "Failed to resolve project root '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Packager settings for the project at `project_root`
pub fn packager_config(
    config: &ProjectConfig,
    project_root: &Path,
    host: HostFlavor,
) -> PackagerConfig {
    PackagerConfig {
        project_root: project_root.to_path_buf(),
        orchestrator: config.build.orchestrator.clone(),
        target: config.build.target.clone(),
        output_dir: config.output_dir(project_root),
        release_dir: config.release_dir(project_root),
        debug_dir: config.debug_dir(project_root),
        artifact_classes: config.build.artifact_classes(),
        host,
    }
}

/// Print one line per artifact class with its copied file count
pub fn print_mirror_summary(mirrored: &[(ArtifactClass, MirrorResult)]) {
    let dim = Style::new().dim();
    for (class, result) in mirrored {
        let count = format!("{:>4}", result.len());
        let count = if result.is_empty() {
            dim.apply_to(count)
        } else {
            Style::new().bold().apply_to(count)
        };
        println!("  {} {}", count, class);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_explicit_project_root() {
        let temp = TempDir::new().unwrap();
        let root = resolve_project_root(Some(temp.path().to_path_buf())).unwrap();
        assert_eq!(root, temp.path());
    }

    #[test]
    fn test_resolve_default_project_root_is_absolute() {
        let root = resolve_project_root(None).unwrap();
        assert!(root.is_absolute());
    }

    #[test]
    fn test_packager_config_resolves_paths() {
        let temp = TempDir::new().unwrap();
        let config = ProjectConfig::default();
        let packager = packager_config(&config, temp.path(), HostFlavor::Unix);

        assert_eq!(packager.orchestrator, "bazel");
        assert_eq!(packager.target, "//src:game");
        assert_eq!(packager.output_dir, temp.path().join("bazel-bin/src"));
        assert_eq!(packager.release_dir, temp.path().join("bin"));
        assert_eq!(packager.debug_dir, temp.path().join("dbg"));
        assert_eq!(packager.artifact_classes.len(), 11);
    }
}
