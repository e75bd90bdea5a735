//! Dependency package specs

use std::fmt;

/// A package to install for a target triplet, rendered as `name:triplet`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySpec {
    pub package_name: String,
    pub triplet: String,
}

impl DependencySpec {
    pub fn new(package_name: impl Into<String>, triplet: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            triplet: triplet.into(),
        }
    }
}

impl fmt::Display for DependencySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.package_name, self.triplet)
    }
}
