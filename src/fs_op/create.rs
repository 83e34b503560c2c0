use std::fs::DirBuilder;
use std::path::Path;

use crate::fs_op::error::FsOpError;

/// Permission bits for directories created by the stager (rwxr-xr-x).
pub const DIR_MODE: u32 = 0o755;

/// Create `path` and any missing parents with `mode`.
///
/// The mode is applied at creation time, so the process umask still masks
/// it. On non-Unix targets the mode is ignored.
pub fn create_dir_all_with_mode<P: AsRef<Path>>(path: P, mode: u32) -> Result<(), FsOpError> {
    let p = path.as_ref();
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;
    builder.create(p).map_err(|e| FsOpError::at("create directory", p, e))
}

/// Ensure the parent directory of `p` exists.
pub fn ensure_parent_exists(p: &Path) -> Result<(), FsOpError> {
    match p.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            create_dir_all_with_mode(parent, DIR_MODE)
        }
        _ => Ok(()),
    }
}
