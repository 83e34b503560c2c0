//! Directory stager: recreate an output directory and fill it with the files
//! an input directory's manifest selects.

pub mod manifest;

use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::fs_op::{self, FsOpError, DIR_MODE};
use manifest::{Manifest, MANIFEST_NAME};

/// Fatal stager failures. A manifest entry missing from the input directory
/// is not one of them; it is reported as [`StageEvent::NotExist`].
#[derive(Debug, Error)]
pub enum StageError {
    #[error("manifest not found: {}", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("failed to read manifest `{}`: {source}", .path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Fs(#[from] FsOpError),

    #[error("failed to write log: {0}")]
    Log(#[source] io::Error),
}

/// One line of the stager's progress log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageEvent {
    Remove(PathBuf),
    MakeDir(PathBuf),
    Copy(String),
    NotExist(String),
}

impl fmt::Display for StageEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageEvent::Remove(p) => write!(f, "remove {}", p.display()),
            StageEvent::MakeDir(p) => write!(f, "makedir {}", p.display()),
            StageEvent::Copy(rel) => write!(f, "copy {}", rel),
            StageEvent::NotExist(rel) => write!(f, "not exist {}", rel),
        }
    }
}

/// What a completed run did, in manifest order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StageSummary {
    pub copied: Vec<String>,
    pub missing: Vec<String>,
}

/// Recreate `output_dir` and copy every manifest entry found in `input_dir`
/// into it, writing one progress line per step to `log`.
pub fn stage<W: Write>(
    input_dir: &Path,
    output_dir: &Path,
    log: &mut W,
) -> Result<StageSummary, StageError> {
    let mut emit = |event: StageEvent| -> Result<(), StageError> {
        writeln!(log, "{}", event).map_err(StageError::Log)
    };

    if output_dir.exists() {
        emit(StageEvent::Remove(output_dir.to_path_buf()))?;
        fs_op::remove_path(output_dir)?;
    }
    emit(StageEvent::MakeDir(output_dir.to_path_buf()))?;
    fs_op::create_dir_all_with_mode(output_dir, DIR_MODE)?;

    let manifest = Manifest::open(input_dir).map_err(|e| {
        let path = input_dir.join(MANIFEST_NAME);
        if e.kind() == io::ErrorKind::NotFound {
            StageError::ManifestNotFound(path)
        } else {
            StageError::ManifestRead { path, source: e }
        }
    })?;
    let manifest_path = manifest.path().to_path_buf();
    debug!("reading manifest {}", manifest_path.display());

    let mut summary = StageSummary::default();
    for entry in manifest.entries() {
        let rel = entry.map_err(|source| StageError::ManifestRead {
            path: manifest_path.clone(),
            source,
        })?;
        let src = input_dir.join(&rel);
        if is_copyable(&src) {
            emit(StageEvent::Copy(rel.clone()))?;
            let dst = output_dir.join(&rel);
            fs_op::ensure_parent_exists(&dst)?;
            let bytes = fs_op::copy_file(&src, &dst)?;
            debug!("copied {} bytes to {}", bytes, dst.display());
            summary.copied.push(rel);
        } else {
            emit(StageEvent::NotExist(rel.clone()))?;
            warn!("manifest entry {:?} not found in {}", rel, input_dir.display());
            summary.missing.push(rel);
        }
    }

    Ok(summary)
}

// The empty entry joins to the input directory itself, so directories are
// treated as absent rather than as copy targets.
fn is_copyable(src: &Path) -> bool {
    src.exists() && !src.is_dir()
}
