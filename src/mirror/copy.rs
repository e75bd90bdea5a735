//! Single-file copy with permission normalization

use std::fs;
use std::path::Path;

use crate::error::{Result, fs as fs_error};

/// Copy `source` to `destination`, overwriting unconditionally.
///
/// Missing parent directories of `destination` are created. A read-only file left
/// at `destination` by an earlier run is made writable before it is overwritten.
/// After the copy the destination always carries the owner-write bit.
pub fn copy_file(source: &Path, destination: &Path) -> Result<()> {
    if let Some(parent) = destination.parent() {
        if !parent.is_dir() {
            fs::create_dir_all(parent).map_err(|e| fs_error::create_dir_failed(parent, e))?;
        }
    }

    if destination.is_file() {
        ensure_owner_writable(destination)?;
    }

    fs::copy(source, destination).map_err(|e| fs_error::copy_failed(source, destination, e))?;
    ensure_owner_writable(destination)
}

/// Turn on the owner-write permission bit of `path`, leaving other bits alone.
#[cfg(unix)]
pub fn ensure_owner_writable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)
        .map_err(|e| fs_error::permissions_failed(path, e))?
        .permissions();
    let mode = perms.mode();
    let wanted = mode | 0o200;
    if wanted != mode {
        perms.set_mode(wanted);
        fs::set_permissions(path, perms).map_err(|e| fs_error::permissions_failed(path, e))?;
    }
    Ok(())
}

/// Clear the read-only attribute of `path`.
#[cfg(not(unix))]
pub fn ensure_owner_writable(path: &Path) -> Result<()> {
    let mut perms = fs::metadata(path)
        .map_err(|e| fs_error::permissions_failed(path, e))?
        .permissions();
    if perms.readonly() {
        #[allow(clippy::permissions_set_readonly_false)]
        perms.set_readonly(false);
        fs::set_permissions(path, perms).map_err(|e| fs_error::permissions_failed(path, e))?;
    }
    Ok(())
}
