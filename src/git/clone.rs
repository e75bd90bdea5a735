//! Repository cloning

use std::fs;
use std::path::Path;

use git2::{FetchOptions, Repository, build::RepoBuilder};

use super::error::interpret_git_error;
use crate::error::{Result, fs as fs_error, git as git_error};

/// Clone `url` into `target`, creating `target` first if it does not exist.
///
/// `target` may already exist as long as it is empty. Local paths and
/// `file://` URLs are always cloned in full; `shallow` only applies to remotes.
pub fn clone(url: &str, target: &Path, shallow: bool) -> Result<Repository> {
    if !target.is_dir() {
        fs::create_dir_all(target).map_err(|e| fs_error::create_dir_failed(target, e))?;
    }

    let mut fetch_options = FetchOptions::new();
    let is_local = url.starts_with("file://") || Path::new(url).is_absolute();
    if shallow && !is_local {
        fetch_options.depth(1);
    }

    let mut builder = RepoBuilder::new();
    builder.fetch_options(fetch_options);

    builder
        .clone(url, target)
        .map_err(|e| git_error::clone_failed(url, interpret_git_error(&e)))
}
