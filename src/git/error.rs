//! Git error interpretation
//!
//! libgit2 messages are long and transport-specific; the dependency tool clone
//! only needs a short reason for its warning line.

use git2::{Error, ErrorClass, ErrorCode};

/// Keyword groups checked in order against the lowercased libgit2 message
const KNOWN_FAILURES: &[(&[&str], &str)] = &[
    (&["not found", "404", "does not exist"], "Repository not found"),
    (&["authentication", "credentials"], "Authentication failed"),
    (&["permission denied", "access denied"], "Permission denied"),
    (
        &["connection", "network", "timeout", "timed out", "resolve"],
        "Network error",
    ),
    (&["certificate"], "Certificate error"),
];

/// Turn a git2 error into a short, user-facing reason
pub fn interpret_git_error(err: &Error) -> String {
    if err.code() == ErrorCode::Exists {
        return "target directory already exists and is not empty".to_string();
    }

    let message = err.message().to_lowercase();
    for (keywords, reason) in KNOWN_FAILURES {
        if keywords.iter().any(|k| message.contains(k)) {
            return (*reason).to_string();
        }
    }

    match err.class() {
        ErrorClass::Http => format!("HTTP error: {}", err.message()),
        ErrorClass::Net => format!("Network error: {}", err.message()),
        _ => err.message().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpret_not_found() {
        let err = Error::new(ErrorCode::NotFound, ErrorClass::Http, "remote returned 404");
        assert_eq!(interpret_git_error(&err), "Repository not found");
    }

    #[test]
    fn test_interpret_network() {
        let err = Error::new(
            ErrorCode::GenericError,
            ErrorClass::Net,
            "failed to resolve address for github.com",
        );
        assert_eq!(interpret_git_error(&err), "Network error");
    }

    #[test]
    fn test_interpret_existing_target() {
        let err = Error::new(
            ErrorCode::Exists,
            ErrorClass::Invalid,
            "'/home/me/.vcpkg' exists and is not an empty directory",
        );
        assert_eq!(
            interpret_git_error(&err),
            "target directory already exists and is not empty"
        );
    }

    #[test]
    fn test_interpret_other_keeps_message() {
        let err = Error::new(ErrorCode::GenericError, ErrorClass::Odb, "object is corrupt");
        assert_eq!(interpret_git_error(&err), "object is corrupt");
    }
}
