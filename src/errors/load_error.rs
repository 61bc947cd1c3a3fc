//! Compilation database loading errors.

use std::path::PathBuf;

/// Errors that can occur while loading the compilation database.
///
/// All of these are fatal: nothing has been dispatched yet when they fire.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Compilation database not found: {path}")]
    NotFound { path: PathBuf },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed compilation database {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}
