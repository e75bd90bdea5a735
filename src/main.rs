//! Shipwright - game build packager
//!
//! A command line tool that builds a Bazel game target, assembles its deployable
//! directory from the build outputs, and provisions native dependencies through vcpkg.

use clap::Parser;

mod build;
mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod git;
mod logging;
mod mirror;
mod path_utils;
mod process;
mod progress;
mod provision;

use cli::{Cli, Commands};
use domain::BuildProfile;

fn main() {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Package => commands::package::run(cli.project, BuildProfile::Release, cli.quiet),
        Commands::Debug => commands::package::run(cli.project, BuildProfile::Debug, cli.quiet),
        Commands::Provision(args) => commands::provision::run(cli.project, args),
        Commands::Mirror(args) => commands::mirror::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
