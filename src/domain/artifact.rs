//! Artifact classes
//!
//! An artifact class is a named glob pattern copied as a unit from a build or
//! provisioning output tree into a destination tree.

use std::fmt;

use serde::Deserialize;

/// What kind of files an artifact class selects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactCategory {
    Executables,
    DebugSymbols,
    SharedLibraries,
    Configs,
    Data,
    Fonts,
    Images,
    Scripts,
    Shaders,
    StaticLibraries,
    Headers,
}

impl fmt::Display for ArtifactCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArtifactCategory::Executables => "executables",
            ArtifactCategory::DebugSymbols => "debug symbols",
            ArtifactCategory::SharedLibraries => "shared libraries",
            ArtifactCategory::Configs => "configs",
            ArtifactCategory::Data => "data",
            ArtifactCategory::Fonts => "fonts",
            ArtifactCategory::Images => "images",
            ArtifactCategory::Scripts => "scripts",
            ArtifactCategory::Shaders => "shaders",
            ArtifactCategory::StaticLibraries => "static libraries",
            ArtifactCategory::Headers => "headers",
        };
        f.write_str(name)
    }
}

/// A glob pattern tagged with the category of files it selects
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArtifactClass {
    #[serde(rename = "name")]
    pub category: ArtifactCategory,
    pub pattern: String,
}

impl ArtifactClass {
    pub fn new(category: ArtifactCategory, pattern: impl Into<String>) -> Self {
        Self {
            category,
            pattern: pattern.into(),
        }
    }
}

impl fmt::Display for ArtifactClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.category, self.pattern)
    }
}

/// Classes copied from the build orchestrator's output into the deployable directory
pub fn build_artifact_classes() -> Vec<ArtifactClass> {
    use ArtifactCategory::{
        Configs, Data, DebugSymbols, Executables, Fonts, Images, Scripts, Shaders, SharedLibraries,
    };

    vec![
        ArtifactClass::new(Executables, "*.exe"),
        ArtifactClass::new(DebugSymbols, "*.pdb"),
        ArtifactClass::new(Executables, "game"),
        ArtifactClass::new(SharedLibraries, "*.dll"),
        ArtifactClass::new(Configs, "configs/*.json"),
        ArtifactClass::new(Data, "data/*.db"),
        ArtifactClass::new(Fonts, "fonts/**/*.ttf"),
        ArtifactClass::new(Images, "images/**/*.png"),
        ArtifactClass::new(Scripts, "scripts/*.js"),
        ArtifactClass::new(Scripts, "scripts/*.lua"),
        ArtifactClass::new(Shaders, "shaders/*.glsl"),
    ]
}

/// Classes copied from the dependency tool's install tree into the third-party directory
pub fn dependency_artifact_classes() -> Vec<ArtifactClass> {
    use ArtifactCategory::{Headers, SharedLibraries, StaticLibraries};

    vec![
        ArtifactClass::new(StaticLibraries, "lib/**/*.lib"),
        ArtifactClass::new(StaticLibraries, "lib/**/*.a"),
        ArtifactClass::new(SharedLibraries, "bin/**/*.dll"),
        ArtifactClass::new(SharedLibraries, "bin/**/*.so"),
        ArtifactClass::new(Headers, "include/**"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_classes_order() {
        let patterns: Vec<_> = build_artifact_classes()
            .into_iter()
            .map(|c| c.pattern)
            .collect();
        assert_eq!(
            patterns,
            vec![
                "*.exe",
                "*.pdb",
                "game",
                "*.dll",
                "configs/*.json",
                "data/*.db",
                "fonts/**/*.ttf",
                "images/**/*.png",
                "scripts/*.js",
                "scripts/*.lua",
                "shaders/*.glsl",
            ]
        );
    }

    #[test]
    fn test_dependency_classes() {
        let classes = dependency_artifact_classes();
        assert_eq!(classes.len(), 5);
        assert_eq!(classes[4], ArtifactClass::new(ArtifactCategory::Headers, "include/**"));
    }

    #[test]
    fn test_display() {
        let class = ArtifactClass::new(ArtifactCategory::DebugSymbols, "*.pdb");
        assert_eq!(class.to_string(), "debug symbols (*.pdb)");
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let class: ArtifactClass =
            serde_yaml::from_str("{ name: shared_libraries, pattern: \"*.so\" }").unwrap();
        assert_eq!(class, ArtifactClass::new(ArtifactCategory::SharedLibraries, "*.so"));
    }
}
