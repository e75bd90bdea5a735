use clap::Parser;
use std::path::PathBuf;

/// Arguments for mirror command
#[derive(Parser, Debug)]
#[command(after_help = "Patterns use '*' within one path component and '**' across directories.\n\
                  Quote them so the shell does not expand them.")]
pub struct MirrorArgs {
    /// Tree to copy from
    pub source: PathBuf,

    /// Tree to copy into (created if missing)
    pub destination: PathBuf,

    /// Glob patterns, relative to the source tree
    #[arg(required = true)]
    pub patterns: Vec<String>,
}
