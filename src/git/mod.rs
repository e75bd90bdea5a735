//! Git operations for fetching the dependency tool
//!
//! The dependency tool is distributed as a git repository; it is cloned with
//! libgit2 rather than a `git` executable so that no git installation is required.

mod clone;
mod error;

pub use clone::clone;
