//! Top-level run error.

use super::{LoadError, OutputDirError, ReportError};

/// Errors that can abort a full orchestration run.
///
/// Per-entry analysis failures are deliberately not represented here: a
/// single failing invocation is logged and counted but never aborts the
/// run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Output directory error: {0}")]
    OutputDir(#[from] OutputDirError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}
