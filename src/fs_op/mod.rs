//! Filesystem primitives shared by the stager and the echoer.
//!
//! Each helper reports failures as [`FsOpError`] carrying the path(s)
//! involved, so the binaries can print a useful diagnostic before exiting.

pub mod copy;
pub mod create;
pub mod error;
pub mod path;
pub mod remove;

pub use copy::copy_file;
pub use create::{create_dir_all_with_mode, ensure_parent_exists, DIR_MODE};
pub use error::FsOpError;
pub use path::normalize_path;
pub use remove::remove_path;
