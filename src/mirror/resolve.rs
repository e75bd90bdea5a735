//! Glob resolution against a source root

use std::path::{Path, PathBuf};

use wax::{Glob, LinkBehavior, WalkBehavior};

use crate::error::{Result, pattern as pattern_error};

/// Resolve `pattern` relative to `source_root` into the list of matching regular files.
///
/// Directories matched by the pattern are dropped, symlinked directories are
/// followed, and names starting with `.` only match pattern components that also
/// start with `.`. A source root that does not exist resolves to nothing.
/// Subtrees that cannot be read are skipped with a warning. Matches are returned
/// sorted so that copy order (and therefore log output) is reproducible across runs.
pub fn resolve_matches(source_root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let normalized = pattern.replace('\\', "/");
    let relative_pattern = normalized.trim_start_matches("./");
    let glob = Glob::new(relative_pattern).map_err(|e| pattern_error::invalid(pattern, e))?;
    let pattern_components: Vec<&str> = relative_pattern.split('/').collect();

    if !source_root.exists() {
        return Ok(Vec::new());
    }

    let behavior = WalkBehavior {
        link: LinkBehavior::ReadTarget,
        ..WalkBehavior::default()
    };

    let mut matches = Vec::new();
    for entry in glob.walk_with_behavior(source_root, behavior) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(
                    "{}; skipping",
                    pattern_error::walk_failed(source_root, pattern, e)
                );
                continue;
            }
        };
        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        let relative = path.strip_prefix(source_root).unwrap_or(path);
        if !hidden_names_allowed(relative, &pattern_components) {
            continue;
        }
        matches.push(path.to_path_buf());
    }

    matches.sort();
    Ok(matches)
}

/// A path component starting with `.` is only matched by a pattern component
/// that starts with `.` too, either at the same position (before any `**`) or as
/// the final component.
fn hidden_names_allowed(relative: &Path, pattern_components: &[&str]) -> bool {
    let names: Vec<_> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    let last = names.len().saturating_sub(1);

    names.iter().enumerate().all(|(i, name)| {
        if !name.starts_with('.') {
            return true;
        }
        let aligned = pattern_components.iter().take(i).all(|p| *p != "**")
            && pattern_components.get(i).is_some_and(|p| p.starts_with('.'));
        let trailing = i == last && pattern_components.last().is_some_and(|p| p.starts_with('.'));
        aligned || trailing
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, rel).unwrap();
    }

    #[test]
    fn test_star_does_not_cross_directories() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "game.exe");
        touch(temp.path(), "tools/helper.exe");

        let matches = resolve_matches(temp.path(), "*.exe").unwrap();
        assert_eq!(matches, vec![temp.path().join("game.exe")]);
    }

    #[test]
    fn test_double_star_matches_nested_and_direct_children() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "lib/zlib.a");
        touch(temp.path(), "lib/manual-link/SDL2main.a");

        let matches = resolve_matches(temp.path(), "lib/**/*.a").unwrap();
        assert_eq!(
            matches,
            vec![
                temp.path().join("lib/manual-link/SDL2main.a"),
                temp.path().join("lib/zlib.a"),
            ]
        );
    }

    #[test]
    fn test_directories_are_skipped() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "include/GL/glew.h");
        fs::create_dir_all(temp.path().join("include/empty")).unwrap();

        let matches = resolve_matches(temp.path(), "include/**").unwrap();
        assert_eq!(matches, vec![temp.path().join("include/GL/glew.h")]);
    }

    #[test]
    fn test_literal_pattern() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "game");
        touch(temp.path(), "game.exe");

        let matches = resolve_matches(temp.path(), "game").unwrap();
        assert_eq!(matches, vec![temp.path().join("game")]);
    }

    #[test]
    fn test_missing_root_yields_nothing() {
        let temp = TempDir::new().unwrap();
        let matches = resolve_matches(&temp.path().join("bazel-bin"), "**/*.dll").unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let temp = TempDir::new().unwrap();
        let result = resolve_matches(temp.path(), "fonts/a**b");
        assert!(matches!(
            result,
            Err(crate::error::ShipwrightError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "Shader.GLSL");

        let matches = resolve_matches(temp.path(), "*.glsl").unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_hidden_files_need_a_dotted_pattern() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a.txt");
        touch(temp.path(), ".hidden.txt");
        touch(temp.path(), "include/zlib.h");
        touch(temp.path(), "include/.gitkeep");
        touch(temp.path(), "include/.git/config");

        assert_eq!(
            resolve_matches(temp.path(), "*.txt").unwrap(),
            vec![temp.path().join("a.txt")]
        );
        assert_eq!(
            resolve_matches(temp.path(), "include/**").unwrap(),
            vec![temp.path().join("include/zlib.h")]
        );
        assert_eq!(
            resolve_matches(temp.path(), ".*.txt").unwrap(),
            vec![temp.path().join(".hidden.txt")]
        );
        assert_eq!(
            resolve_matches(temp.path(), "include/.gitkeep").unwrap(),
            vec![temp.path().join("include/.gitkeep")]
        );
    }

    #[test]
    fn test_leading_dot_slash_is_ignored() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a.txt");
        touch(temp.path(), "configs/game.json");

        assert_eq!(
            resolve_matches(temp.path(), "./a.txt").unwrap(),
            vec![temp.path().join("a.txt")]
        );
        assert_eq!(
            resolve_matches(temp.path(), ".\\configs\\*.json").unwrap(),
            vec![temp.path().join("configs/game.json")]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directories_are_followed() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "include/zlib.h");
        touch(temp.path(), "share/boost/config.hpp");
        std::os::unix::fs::symlink("../share/boost", temp.path().join("include/boost")).unwrap();

        let matches = resolve_matches(temp.path(), "include/**").unwrap();
        assert_eq!(
            matches,
            vec![
                temp.path().join("include/boost/config.hpp"),
                temp.path().join("include/zlib.h"),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subtree_is_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        touch(temp.path(), "lib/zlib.a");
        touch(temp.path(), "lib/locked/secret.a");
        let locked = temp.path().join("lib/locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let result = resolve_matches(temp.path(), "lib/**/*.a");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        // Privileged users can still read the locked directory
        let matches = result.unwrap();
        assert!(matches.contains(&temp.path().join("lib/zlib.a")));
    }
}
