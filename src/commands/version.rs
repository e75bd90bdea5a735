//! Version command implementation

use crate::domain::HostFlavor;
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("shipwright {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!("  Host: {}", host_name(HostFlavor::current()));

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}

fn host_name(host: HostFlavor) -> &'static str {
    match host {
        HostFlavor::Windows => "windows (msvc)",
        HostFlavor::Unix => "unix",
    }
}
