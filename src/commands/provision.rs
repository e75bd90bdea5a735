//! Provision command implementation
//!
//! Installs the manifest's vcpkg packages for one triplet and mirrors the
//! installed libraries and headers into the project's third-party tree.

use console::Style;

use std::path::PathBuf;

use super::helpers::{print_mirror_summary, resolve_project_root};
use crate::cli::ProvisionArgs;
use crate::config::load_project_config;
use crate::domain::HostFlavor;
use crate::error::Result;
use crate::path_utils::{self, resolve_against};
use crate::process::SystemRunner;
use crate::provision::{ProvisionReport, Provisioner, ProvisionerConfig};

/// Run provision command
pub fn run(project: Option<PathBuf>, args: ProvisionArgs) -> Result<()> {
    let project_root = resolve_project_root(project)?;
    let config = load_project_config(&project_root)?;

    let manifest = match args.manifest {
        Some(path) => resolve_against(&project_root, &path),
        None => config.manifest_path(&project_root),
    };

    let provisioner_config = ProvisionerConfig {
        tool_dir: config.tool_dir(&project_root)?,
        repository: config.deps.repository.clone(),
        third_party_root: config.third_party_dir(&project_root)?,
        host: HostFlavor::current(),
    };

    let report = Provisioner::new(provisioner_config, SystemRunner).provision(
        &args.triplet,
        &manifest,
        args.skip_install,
    )?;

    display_report(&report);
    Ok(())
}

fn display_report(report: &ProvisionReport) {
    let failed: Vec<_> = report.failed_installs().collect();
    let headline = if failed.is_empty() {
        Style::new().bold().green().apply_to("Provisioned")
    } else {
        Style::new().bold().yellow().apply_to("Provisioned with failures")
    };
    println!(
        "{} {}",
        headline,
        path_utils::display_absolute(&report.destination)
    );

    if let Some(state) = report.tool_state {
        println!("  vcpkg: {}", state);
    }
    for step in report.tool_steps.iter().filter_map(|s| s.failure()) {
        println!("  {} {}", Style::new().yellow().apply_to("!"), step);
    }
    if !report.installs.is_empty() {
        println!(
            "  {} of {} packages installed",
            report.installs.len() - failed.len(),
            report.installs.len()
        );
    }
    for spec in failed {
        println!("  {} {}", Style::new().red().apply_to("✗"), spec);
    }

    print_mirror_summary(&report.mirrored);
    println!("  {} files copied", report.files_copied());
}
