//! Report directory errors.

use std::path::PathBuf;

/// Errors that can occur while acquiring the report directory.
#[derive(Debug, thiserror::Error)]
pub enum OutputDirError {
    #[error("Report directory already exists: {path}")]
    AlreadyExists { path: PathBuf },

    #[error("IO error creating report directory {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
