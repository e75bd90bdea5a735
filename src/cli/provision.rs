use clap::Parser;
use std::path::PathBuf;

/// Arguments for provision command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Install every package in tools/vcpkg_deps for Windows:\n    shipwright provision x64-windows\n\n\
                  Refresh third_party/ from packages installed earlier:\n    shipwright provision x64-linux --skip-install")]
pub struct ProvisionArgs {
    /// vcpkg target triplet (e.g. x64-windows, x64-linux)
    pub triplet: String,

    /// Skip installing packages; only mirror what vcpkg already has
    #[arg(long)]
    pub skip_install: bool,

    /// Dependency manifest (defaults to deps.manifest in shipwright.yaml)
    #[arg(long, short = 'm')]
    pub manifest: Option<PathBuf>,
}
