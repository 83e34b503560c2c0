use std::fs;
use std::io;
use std::path::Path;

use fs_extra::file::{copy as fs_extra_copy, CopyOptions};

use crate::fs_op::error::FsOpError;

/// Copy permission bits from `src` to `dst`.
pub(crate) fn copy_permissions(src: &Path, dst: &Path) -> io::Result<()> {
    let perms = fs::metadata(src)?.permissions();
    fs::set_permissions(dst, perms)
}

/// Whether `src` and an existing `dst` are the same file, through symlinks,
/// hard links or `..` segments.
fn same_file(src: &Path, dst: &Path) -> io::Result<bool> {
    let dst_meta = match fs::metadata(dst) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        let src_meta = fs::metadata(src)?;
        Ok(src_meta.dev() == dst_meta.dev() && src_meta.ino() == dst_meta.ino())
    }
    #[cfg(not(unix))]
    {
        let _ = dst_meta;
        Ok(fs::canonicalize(src)? == fs::canonicalize(dst)?)
    }
}

/// Copy the contents and permission bits of the regular file `src` to `dst`,
/// replacing `dst` if it exists.
///
/// Timestamps, ownership and extended attributes are not carried over: the
/// destination is a new file with a fresh modification time. The parent of
/// `dst` must already exist. Copying a file onto itself is refused before
/// anything is written.
pub fn copy_file(src: &Path, dst: &Path) -> Result<u64, FsOpError> {
    let context = |source: io::Error| FsOpError::PathContext {
        src: src.to_path_buf(),
        dst: dst.to_path_buf(),
        source,
    };

    if same_file(src, dst).map_err(context)? {
        return Err(FsOpError::SameFile {
            src: src.to_path_buf(),
            dst: dst.to_path_buf(),
        });
    }

    let mut options = CopyOptions::new();
    options.overwrite = true;
    // 64 KiB buffer, same as the recursive copies elsewhere.
    options.buffer_size = 64 * 1024;

    // fs_extra returns its own error type; map it to io::Error for callers.
    let copied = fs_extra_copy(src, dst, &options).map_err(|e| context(io::Error::other(e)))?;
    copy_permissions(src, dst).map_err(context)?;
    Ok(copied)
}
