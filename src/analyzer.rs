//! Analysis-step seam and the subprocess-backed default implementation.

use std::path::PathBuf;
use std::process::Command;
use std::sync::Arc;

use tracing::debug;

use crate::compilation::CompilationEntry;

/// Per-entry parameter bundle handed to the analysis step.
///
/// One compilation entry merged with the run-wide constants. Constructed
/// fresh per entry just before dispatch; the run-wide pieces are shared,
/// not recomputed.
#[derive(Debug, Clone)]
pub struct AnalysisTask {
    pub entry: CompilationEntry,
    /// Analyzer executable.
    pub analyzer: PathBuf,
    /// Directory collecting per-entry results.
    pub out_dir: PathBuf,
    /// Translated analyzer frontend arguments, computed once per run.
    pub direct_args: Arc<[String]>,
    /// Host identification string, captured once per run.
    pub host: Arc<str>,
}

/// Outcome of one analyzer invocation.
#[derive(Debug, Default)]
pub struct AnalysisOutcome {
    pub success: bool,
    /// Captured diagnostic lines, forwarded to the log by the engine.
    pub error_output: Vec<String>,
}

/// The per-entry analysis step.
///
/// Implementations must be safe to call concurrently from every worker.
/// A failing invocation is reported through the returned outcome, never
/// by panicking.
pub trait AnalysisStep: Send + Sync {
    fn analyze(&self, task: &AnalysisTask) -> AnalysisOutcome;
}

/// Default analysis step: invokes the analyzer executable once per entry
/// in the entry's build directory and captures its diagnostics.
pub struct ClangAnalyzer;

impl AnalysisStep for ClangAnalyzer {
    fn analyze(&self, task: &AnalysisTask) -> AnalysisOutcome {
        let mut command = Command::new(&task.analyzer);
        command
            .arg("--analyze")
            .args(task.direct_args.iter())
            .arg(&task.entry.file)
            .arg("-o")
            .arg(&task.out_dir)
            .current_dir(&task.entry.directory);

        match command.output() {
            Ok(output) => AnalysisOutcome {
                success: output.status.success(),
                error_output: String::from_utf8_lossy(&output.stderr)
                    .lines()
                    .map(str::to_owned)
                    .collect(),
            },
            Err(source) => AnalysisOutcome {
                success: false,
                error_output: vec![format!(
                    "failed to spawn analyzer '{}' for {}: {}",
                    task.analyzer.display(),
                    task.entry.file.display(),
                    source
                )],
            },
        }
    }
}

/// Captures a host identification string, once per run.
///
/// A failing probe yields an empty string; it must not abort a run whose
/// analyzer is functional.
pub fn host_identity() -> String {
    match Command::new("uname").arg("-a").output() {
        Ok(output) if output.status.success() => {
            String::from_utf8_lossy(&output.stdout).trim().to_owned()
        }
        Ok(output) => {
            debug!(status = ?output.status, "host probe exited abnormally");
            String::new()
        }
        Err(source) => {
            debug!(%source, "host probe could not be spawned");
            String::new()
        }
    }
}
