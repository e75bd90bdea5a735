//! Log output setup

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Default filter directive for the chosen verbosity; `quiet` wins over `verbose`
pub fn default_directive(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Install the global subscriber writing to stderr. `RUST_LOG` overrides the
/// verbosity flags.
pub fn init(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}
