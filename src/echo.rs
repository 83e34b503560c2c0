//! Input echoer: copy each input's bytes to `<out_dir>/out/siso/<basename>`.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::fs_op::{normalize_path, FsOpError};

/// Subdirectory of the output root that receives the echoed files. It must
/// already exist; the echoer never creates it.
pub const OUTPUT_SUBDIR: &str = "out/siso";

#[derive(Debug, Error)]
pub enum EchoError {
    #[error("can't open input `{}`: {source}", .path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("input `{}` has no file name", .0.display())]
    NoFileName(PathBuf),

    #[error("output directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error(transparent)]
    Fs(#[from] FsOpError),
}

/// An input file opened for reading, together with the path it was opened
/// from.
#[derive(Debug)]
pub struct InputFile {
    pub path: PathBuf,
    file: File,
}

impl InputFile {
    /// Open `path` for reading. Directories open fine on Unix but can't be
    /// read, so they are refused here rather than after the output has been
    /// truncated.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, EchoError> {
        let path = path.into();
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(source) => return Err(EchoError::OpenInput { path, source }),
        };
        match file.metadata() {
            Ok(meta) if meta.is_dir() => Err(EchoError::OpenInput {
                path,
                source: io::Error::new(io::ErrorKind::InvalidInput, "is a directory"),
            }),
            Ok(_) => Ok(InputFile { path, file }),
            Err(source) => Err(EchoError::OpenInput { path, source }),
        }
    }
}

/// Open every input up front so a bad argument fails the run before any
/// output is touched.
pub fn open_inputs<I, P>(paths: I) -> Result<Vec<InputFile>, EchoError>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    paths.into_iter().map(InputFile::open).collect()
}

/// Where `input` is echoed to under `out_dir`.
pub fn output_path(out_dir: &Path, input: &Path) -> Result<PathBuf, EchoError> {
    let name = input
        .file_name()
        .ok_or_else(|| EchoError::NoFileName(input.to_path_buf()))?;
    Ok(normalize_path(&out_dir.join(OUTPUT_SUBDIR).join(name)))
}

/// Echo every input into `out_dir`, in order. Returns the output paths
/// written.
pub fn echo(out_dir: &Path, inputs: Vec<InputFile>) -> Result<Vec<PathBuf>, EchoError> {
    let mut written = Vec::with_capacity(inputs.len());
    for input in inputs {
        written.push(echo_one(out_dir, input)?);
    }
    Ok(written)
}

fn echo_one(out_dir: &Path, mut input: InputFile) -> Result<PathBuf, EchoError> {
    let output = output_path(out_dir, &input.path)?;
    if let Some(parent) = output.parent() {
        if !parent.is_dir() {
            return Err(EchoError::DirectoryNotFound(parent.to_path_buf()));
        }
    }

    let mut out = File::create(&output).map_err(|e| FsOpError::at("create", &output, e))?;
    let bytes = io::copy(&mut input.file, &mut out).map_err(|source| FsOpError::PathContext {
        src: input.path.clone(),
        dst: output.clone(),
        source,
    })?;
    debug!("echoed {} bytes from {} to {}", bytes, input.path.display(), output.display());
    Ok(output)
}
