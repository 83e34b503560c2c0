use std::fs;
use std::path::Path;

use crate::fs_op::error::FsOpError;

/// Remove a file or directory at `path`.
///
/// If `path` refers to a directory it will be removed recursively. If the
/// path does not exist this function returns `Ok(())` so callers do not need
/// to check for existence before attempting removal.
///
/// # Examples
///
/// ```no_run
/// use siso_fixture_tools::fs_op::remove::remove_path;
/// remove_path("/tmp/some_output_dir").expect("remove failed");
/// ```
pub fn remove_path(path: impl AsRef<Path>) -> Result<(), FsOpError> {
    let p = path.as_ref();

    // symlink_metadata so a dangling link is still removed, and a link to a
    // directory removes the link rather than the target tree.
    let meta = match fs::symlink_metadata(p) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(FsOpError::at("inspect", p, e)),
    };

    if meta.is_dir() {
        fs::remove_dir_all(p).map_err(|e| FsOpError::at("remove", p, e))?;
    } else {
        fs::remove_file(p).map_err(|e| FsOpError::at("remove", p, e))?;
    }
    tracing::debug!("removed {}", p.display());

    Ok(())
}
