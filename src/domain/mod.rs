//! Domain models for Shipwright
//!
//! This module contains pure value objects created and consumed within a single
//! invocation. Nothing here touches the file system or launches programs.

pub mod artifact;
pub mod dependency;
pub mod host;
pub mod profile;

pub use artifact::ArtifactClass;
pub use dependency::DependencySpec;
pub use host::HostFlavor;
pub use profile::BuildProfile;
