//! Common source-path prefix resolution.
//!
//! Report titles truncate file names against the longest directory prefix
//! shared by every source file in the compilation database.

use std::path::{Path, PathBuf};

use crate::compilation::{self, CompilationEntry};
use crate::errors::LoadError;

/// Resolves the common source-path prefix of a compilation database.
pub fn source_prefix(db_path: &Path) -> Result<PathBuf, LoadError> {
    let entries = compilation::load_entries(db_path)?;
    Ok(source_prefix_of(&entries))
}

/// Computes the common directory prefix of the entries' source files.
///
/// The character-wise common prefix of two sibling directories can cut
/// through a directory name; when the result is not an existing directory
/// its parent is returned instead. An empty database yields an empty path.
pub fn source_prefix_of(entries: &[CompilationEntry]) -> PathBuf {
    let folded = entries.iter().fold(None::<String>, |acc, entry| {
        let dir = entry
            .file
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .to_string_lossy()
            .into_owned();
        Some(match acc {
            None => dir,
            Some(prefix) => common_prefix(&prefix, &dir),
        })
    });

    match folded {
        None => PathBuf::new(),
        Some(common) => {
            let path = Path::new(&common);
            if path.is_dir() {
                path.to_path_buf()
            } else {
                path.parent().map(Path::to_path_buf).unwrap_or_default()
            }
        }
    }
}

fn common_prefix(a: &str, b: &str) -> String {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .map(|(c, _)| c)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_prefix_fold() {
        assert_eq!(common_prefix("/usr/src/a", "/usr/src/b"), "/usr/src/");
        assert_eq!(common_prefix("/usr/src", "/usr/src"), "/usr/src");
        assert_eq!(common_prefix("/a", "/b"), "/");
        assert_eq!(common_prefix("", "/a"), "");
    }

    #[test]
    fn test_empty_database_yields_empty_path() {
        assert_eq!(source_prefix_of(&[]), PathBuf::new());
    }
}
