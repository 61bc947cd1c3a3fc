//! Compilation database records and loading.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dedup;
use crate::errors::LoadError;

/// One compilation database record, corresponding to one analysis task.
///
/// Databases carry the original build invocation either as a single
/// `command` string or as an `arguments` list; both forms are accepted and
/// passed through to the analysis step untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilationEntry {
    /// Working directory of the original build invocation.
    pub directory: PathBuf,
    /// Source file that was compiled.
    pub file: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Vec<String>>,
}

/// Loads the full compilation database into memory.
///
/// Duplicate entries (same source file and same invocation) are dropped,
/// first occurrence wins. Missing or unparseable databases fail with a
/// [`LoadError`] before any dispatch can begin.
pub fn load_entries(path: &Path) -> Result<Vec<CompilationEntry>, LoadError> {
    let payload = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let entries: Vec<CompilationEntry> =
        serde_json::from_str(&payload).map_err(|source| LoadError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(entries
        .into_iter()
        .filter(dedup::unique_by(entry_identity))
        .collect())
}

fn entry_identity(
    entry: &CompilationEntry,
) -> (PathBuf, Option<String>, Option<Vec<String>>) {
    (
        entry.file.clone(),
        entry.command.clone(),
        entry.arguments.clone(),
    )
}
