//! Reader for the stager's `input` manifest.
//!
//! One relative path per line. A line whose very first character is `#` is a
//! comment; the check runs on the raw line, so `  # x` is the path `# x`.
//! Everything else is trimmed and passed through as is, including the empty
//! string produced by blank lines.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines, Read};
use std::path::{Path, PathBuf};

/// File name of the manifest inside the stager's input directory.
pub const MANIFEST_NAME: &str = "input";

/// An opened manifest. Consumed by [`Manifest::entries`], so a manifest can
/// only be walked once.
#[derive(Debug)]
pub struct Manifest<R = File> {
    path: PathBuf,
    reader: BufReader<R>,
}

impl Manifest<File> {
    /// Open `<input_dir>/input`.
    pub fn open(input_dir: &Path) -> io::Result<Self> {
        let path = input_dir.join(MANIFEST_NAME);
        let file = File::open(&path)?;
        Ok(Manifest {
            path,
            reader: BufReader::new(file),
        })
    }
}

impl<R: Read> Manifest<R> {
    /// Wrap an arbitrary reader; `path` is only used for diagnostics.
    pub fn from_reader(path: impl Into<PathBuf>, reader: R) -> Self {
        Manifest {
            path: path.into(),
            reader: BufReader::new(reader),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lazily yield the relative paths listed in the manifest, in order.
    pub fn entries(self) -> Entries<R> {
        Entries {
            lines: self.reader.lines(),
        }
    }
}

/// Iterator over the non-comment manifest lines, trimmed.
#[derive(Debug)]
pub struct Entries<R> {
    lines: Lines<BufReader<R>>,
}

impl<R: Read> Iterator for Entries<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e)),
            };
            if is_comment(&line) {
                continue;
            }
            return Some(Ok(line.trim().to_string()));
        }
    }
}

fn is_comment(line: &str) -> bool {
    line.starts_with('#')
}
