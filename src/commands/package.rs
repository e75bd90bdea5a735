//! Package and debug command implementation
//!
//! Both commands run the same workflow; they differ only in the build profile
//! and therefore in the orchestrator flags and the deployable directory.

use console::Style;

use std::path::PathBuf;

use super::helpers::{packager_config, print_mirror_summary, resolve_project_root};
use crate::build::Packager;
use crate::config::load_project_config;
use crate::domain::{BuildProfile, HostFlavor};
use crate::error::Result;
use crate::path_utils;
use crate::process::SystemRunner;

/// Run package (release) or debug command
pub fn run(project: Option<PathBuf>, profile: BuildProfile, quiet: bool) -> Result<()> {
    let project_root = resolve_project_root(project)?;
    let config = load_project_config(&project_root)?;
    let packager_config = packager_config(&config, &project_root, HostFlavor::current());

    let report = Packager::new(packager_config, SystemRunner)
        .with_progress(!quiet)
        .package(profile)?;

    println!(
        "{} {} build into {}",
        Style::new().bold().green().apply_to("Packaged"),
        report.profile,
        path_utils::display_absolute(&report.destination)
    );
    print_mirror_summary(&report.mirrored);
    println!("  {} files copied", report.files_copied());

    Ok(())
}
