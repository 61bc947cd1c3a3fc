//! Tests for the report directory lifecycle.

use std::fs;

use crosscheck::errors::OutputDirError;
use crosscheck::report_dir::ReportDirectory;

#[test]
fn test_exact_hint_is_created() {
    let parent = tempfile::tempdir().unwrap();
    let hint = parent.path().join("reports");

    let dir = ReportDirectory::create(&hint, false).unwrap();
    assert_eq!(dir.path(), hint);
    assert!(hint.is_dir());
}

#[test]
fn test_existing_hint_is_rejected() {
    let parent = tempfile::tempdir().unwrap();
    let hint = parent.path().join("reports");
    fs::create_dir(&hint).unwrap();

    let err = ReportDirectory::create(&hint, false).unwrap_err();
    assert!(matches!(err, OutputDirError::AlreadyExists { .. }));
}

#[test]
fn test_missing_parent_is_io_error() {
    let parent = tempfile::tempdir().unwrap();
    let hint = parent.path().join("no-such-parent").join("reports");

    let err = ReportDirectory::create(&hint, false).unwrap_err();
    assert!(matches!(err, OutputDirError::Io { .. }));
}

#[test]
fn test_temp_hint_creates_unique_subdirectory() {
    let hint = std::env::temp_dir();

    let first = ReportDirectory::create(&hint, false).unwrap();
    let second = ReportDirectory::create(&hint, false).unwrap();

    for dir in [&first, &second] {
        assert_ne!(dir.path(), hint);
        assert!(dir.path().starts_with(&hint));
        let name = dir.path().file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("crosscheck-"));
        assert!(name.ends_with(".out"));
        assert!(dir.path().is_dir());
    }
    assert_ne!(first.path(), second.path());
}

#[test]
fn test_empty_directory_is_removed_on_release() {
    let parent = tempfile::tempdir().unwrap();
    let hint = parent.path().join("reports");

    let dir = ReportDirectory::create(&hint, false).unwrap();
    drop(dir);
    assert!(!hint.exists());
}

#[test]
fn test_empty_directory_is_kept_when_requested() {
    let parent = tempfile::tempdir().unwrap();
    let hint = parent.path().join("reports");

    let dir = ReportDirectory::create(&hint, true).unwrap();
    drop(dir);
    assert!(hint.is_dir());
}

#[test]
fn test_populated_directory_is_retained() {
    let parent = tempfile::tempdir().unwrap();
    let hint = parent.path().join("reports");

    let dir = ReportDirectory::create(&hint, false).unwrap();
    fs::write(dir.path().join("report-000001.html"), "<html></html>").unwrap();
    drop(dir);
    assert!(hint.is_dir());
    assert!(hint.join("report-000001.html").is_file());
}
