use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the filesystem helpers in `fs_op`.
#[derive(Error, Debug)]
pub enum FsOpError {
    /// An operation on a single path failed.
    #[error("failed to {action} `{path}`: {source}")]
    Path {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Contextual error that includes source and destination paths.
    #[error("copy from `{src}` to `{dst}` failed: {source}")]
    PathContext {
        src: PathBuf,
        dst: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Source and destination name the same file; copying would truncate it.
    #[error("`{src}` and `{dst}` are the same file")]
    SameFile { src: PathBuf, dst: PathBuf },
}

impl FsOpError {
    pub(crate) fn at(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        FsOpError::Path {
            action,
            path: path.into(),
            source,
        }
    }
}
