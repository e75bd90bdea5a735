//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - provision: Provision command arguments
//! - mirror: Mirror command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod mirror;
pub mod provision;

pub use completions::CompletionsArgs;
pub use mirror::MirrorArgs;
pub use provision::ProvisionArgs;

/// Shipwright - game build packager
///
/// Build a Bazel game target, assemble its deployable directory and provision
/// native dependencies through vcpkg.
#[derive(Parser, Debug)]
#[command(
    name = "shipwright",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Build packager and native dependency provisioner for Bazel game projects",
    long_about = "Shipwright runs a Bazel build for a game target, copies the produced executables, \
                  libraries and assets into a deployable directory, and installs native \
                  dependencies with vcpkg into the project's third_party tree.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  shipwright package                      \x1b[90m# Release build into bin/\x1b[0m\n   \
                  shipwright debug                        \x1b[90m# Debug build into dbg/\x1b[0m\n   \
                  shipwright provision x64-windows        \x1b[90m# Install and mirror vcpkg packages\x1b[0m\n   \
                  shipwright provision x64-linux --skip-install\n   \
                  shipwright mirror out/ dist/ '**/*.png' \x1b[90m# Copy matching files\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project root (defaults to current directory)
    #[arg(long, short = 'p', global = true, env = "SHIPWRIGHT_PROJECT")]
    pub project: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Only show warnings and errors
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build in release mode and assemble the release directory
    Package,

    /// Build in debug mode and assemble the debug directory
    Debug,

    /// Install vcpkg packages for a triplet and mirror them into third_party
    Provision(ProvisionArgs),

    /// Copy files matching glob patterns from one tree into another
    Mirror(MirrorArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_package() {
        let cli = Cli::try_parse_from(["shipwright", "package"]).unwrap();
        assert!(matches!(cli.command, Commands::Package));
    }

    #[test]
    fn test_cli_parsing_debug() {
        let cli = Cli::try_parse_from(["shipwright", "debug"]).unwrap();
        assert!(matches!(cli.command, Commands::Debug));
    }

    #[test]
    fn test_cli_parsing_provision() {
        let cli = Cli::try_parse_from(["shipwright", "provision", "x64-windows"]).unwrap();
        match cli.command {
            Commands::Provision(args) => {
                assert_eq!(args.triplet, "x64-windows");
                assert!(!args.skip_install);
                assert_eq!(args.manifest, None);
            }
            _ => panic!("Expected Provision command"),
        }
    }

    #[test]
    fn test_cli_parsing_provision_options() {
        let cli = Cli::try_parse_from([
            "shipwright",
            "provision",
            "x64-linux",
            "--skip-install",
            "--manifest",
            "deps.txt",
        ])
        .unwrap();
        match cli.command {
            Commands::Provision(args) => {
                assert!(args.skip_install);
                assert_eq!(args.manifest, Some(PathBuf::from("deps.txt")));
            }
            _ => panic!("Expected Provision command"),
        }
    }

    #[test]
    fn test_cli_provision_requires_triplet() {
        assert!(Cli::try_parse_from(["shipwright", "provision"]).is_err());
    }

    #[test]
    fn test_cli_parsing_mirror() {
        let cli =
            Cli::try_parse_from(["shipwright", "mirror", "out", "dist", "*.exe", "fonts/**/*.ttf"])
                .unwrap();
        match cli.command {
            Commands::Mirror(args) => {
                assert_eq!(args.source, PathBuf::from("out"));
                assert_eq!(args.destination, PathBuf::from("dist"));
                assert_eq!(args.patterns, vec!["*.exe", "fonts/**/*.ttf"]);
            }
            _ => panic!("Expected Mirror command"),
        }
    }

    #[test]
    fn test_cli_mirror_requires_pattern() {
        assert!(Cli::try_parse_from(["shipwright", "mirror", "out", "dist"]).is_err());
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["shipwright", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_global_options() {
        let project = if cfg!(windows) {
            r"C:\games\demo"
        } else {
            "/tmp/games/demo"
        };
        let cli = Cli::try_parse_from(["shipwright", "package", "-v", "-p", project]).unwrap();
        assert!(cli.verbose);
        assert!(!cli.quiet);
        assert_eq!(cli.project, Some(PathBuf::from(project)));
    }

    #[test]
    fn test_cli_quiet() {
        let cli = Cli::try_parse_from(["shipwright", "-q", "debug"]).unwrap();
        assert!(cli.quiet);
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["shipwright", "completions", "--shell", "zsh"]).unwrap();
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell, clap_complete::Shell::Zsh);
            }
            _ => panic!("Expected Completions command"),
        }
    }
}
