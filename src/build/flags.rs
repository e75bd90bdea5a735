//! Build orchestrator command lines

use crate::domain::{BuildProfile, HostFlavor};

/// Flag selecting the C++17 language standard for the host's compiler
pub fn standard_flag(host: HostFlavor) -> &'static str {
    match host {
        HostFlavor::Windows => "/std:c++17",
        HostFlavor::Unix => "-std=c++17",
    }
}

/// Mode flags passed to `bazel build` for `profile` on `host`
pub fn profile_flags(profile: BuildProfile, host: HostFlavor) -> Vec<String> {
    let copt = |flag: &str| format!("--copt={flag}");
    let standard = copt(standard_flag(host));

    match (profile, host) {
        (BuildProfile::Release, _) => vec!["--compilation_mode=opt".to_string(), standard],
        (BuildProfile::Debug, HostFlavor::Windows) => vec![
            standard,
            copt("/O2"),
            copt("/DEBUG"),
            copt("/INCREMENTAL:NO"),
        ],
        // GCC and Clang have no incremental-link switch
        (BuildProfile::Debug, HostFlavor::Unix) => vec![standard, copt("-O2"), copt("-g")],
    }
}
