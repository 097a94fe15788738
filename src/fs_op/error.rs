use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by filesystem operation helpers.
#[derive(Error, Debug)]
pub enum FsOpError {
    /// Wrapper for underlying IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A folder could not be created (or an existing path is in the way).
    #[error("cannot create folder `{}`", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A folder could not be listed.
    #[error("cannot read folder `{}`", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
