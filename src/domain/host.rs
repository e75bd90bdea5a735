//! Host operating system family

/// Decides script names, executable suffixes and compiler flag syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostFlavor {
    /// Windows with the MSVC toolchain
    Windows,
    /// Everything else (GCC or Clang)
    Unix,
}

impl HostFlavor {
    pub fn current() -> Self {
        if cfg!(windows) {
            HostFlavor::Windows
        } else {
            HostFlavor::Unix
        }
    }
}
