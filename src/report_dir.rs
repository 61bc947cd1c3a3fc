//! Report directory lifecycle.
//!
//! The directory collecting per-entry results is acquired once at the
//! start of a run and released exactly once at the end, on every exit
//! path. Release decides between retaining and removing it based on its
//! contents and the keep-empty preference.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::OutputDirError;

/// Scope-bound report directory.
///
/// Dropping the value releases the directory: non-empty directories are
/// retained with a pointer message, empty ones are kept or removed
/// according to the keep-empty preference.
#[derive(Debug)]
pub struct ReportDirectory {
    path: PathBuf,
    keep_empty: bool,
    released: bool,
}

impl ReportDirectory {
    /// Creates the report directory.
    ///
    /// When `hint` is the conventional temp directory, a uniquely named
    /// `crosscheck-*.out` subdirectory is created under it. Any other hint
    /// is created literally and must not already exist.
    pub fn create(hint: &Path, keep_empty: bool) -> Result<Self, OutputDirError> {
        let path = if hint == std::env::temp_dir() {
            tempfile::Builder::new()
                .prefix("crosscheck-")
                .suffix(".out")
                .tempdir_in(hint)
                .map_err(|source| OutputDirError::Io {
                    path: hint.to_path_buf(),
                    source,
                })?
                .keep()
        } else {
            match fs::create_dir(hint) {
                Ok(()) => hint.to_path_buf(),
                Err(source) if source.kind() == ErrorKind::AlreadyExists => {
                    return Err(OutputDirError::AlreadyExists {
                        path: hint.to_path_buf(),
                    })
                }
                Err(source) => {
                    return Err(OutputDirError::Io {
                        path: hint.to_path_buf(),
                        source,
                    })
                }
            }
        };
        Ok(Self {
            path,
            keep_empty,
            released: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        let populated = fs::read_dir(&self.path)
            .map(|mut entries| entries.next().is_some())
            .unwrap_or(false);

        if populated {
            info!(
                "Run 'scan-view {}' to examine bug reports.",
                self.path.display()
            );
        } else if self.keep_empty {
            info!(
                "Report directory '{}' contains no report, but kept.",
                self.path.display()
            );
        } else {
            match fs::remove_dir(&self.path) {
                Ok(()) => info!(
                    "Removing directory '{}' because it contains no report.",
                    self.path.display()
                ),
                Err(source) => info!(
                    "Could not remove empty report directory '{}': {}",
                    self.path.display(),
                    source
                ),
            }
        }
    }
}

impl Drop for ReportDirectory {
    fn drop(&mut self) {
        self.release();
    }
}
