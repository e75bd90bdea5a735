//! Command implementations for Shipwright CLI

mod helpers;

pub mod completions;
pub mod mirror;
pub mod package;
pub mod provision;
pub mod version;
