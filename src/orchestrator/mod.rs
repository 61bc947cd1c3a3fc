//! Orchestration engine.
//!
//! Loads the compilation database, computes the run-wide constants once,
//! fans entries out over a bounded worker pool, and consumes completions
//! as they arrive. Per-entry failures are logged and counted, never fatal;
//! the pool is fully drained and joined before control returns.

use std::num::NonZeroUsize;
use std::path::Path;
use std::sync::Arc;
use std::thread;

use crossbeam_channel::{bounded, unbounded};
use tracing::{debug, info, warn};

use crate::analyzer::{self, AnalysisStep, AnalysisTask};
use crate::arguments;
use crate::compilation::{self, CompilationEntry};
use crate::config::RunConfig;
use crate::errors::{LoadError, RunError};
use crate::prefix;
use crate::report::{ReportContext, ReportRenderer};
use crate::report_dir::ReportDirectory;

/// Summary of one orchestration pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// Entries dispatched.
    pub total: usize,
    /// Entries whose analysis failed to spawn or exited abnormally.
    pub failed: usize,
}

/// Runs the analyzer against every entry of the compilation database.
///
/// Fails with a [`LoadError`] before any dispatch when the database is
/// missing or malformed.
pub fn run(
    db_path: &Path,
    config: &RunConfig,
    out_dir: &Path,
    step: &dyn AnalysisStep,
) -> Result<RunStats, LoadError> {
    let entries = compilation::load_entries(db_path)?;
    Ok(run_entries(entries, config, out_dir, step))
}

/// Dispatches already-loaded entries across the worker pool.
///
/// Submission order and completion order are unrelated; the only blocking
/// point is the final drain, which waits for every outstanding worker.
pub fn run_entries(
    entries: Vec<CompilationEntry>,
    config: &RunConfig,
    out_dir: &Path,
    step: &dyn AnalysisStep,
) -> RunStats {
    let total = entries.len();
    if total == 0 {
        debug!("compilation database is empty, nothing to dispatch");
        return RunStats { total: 0, failed: 0 };
    }

    // Run-wide constants, computed once rather than per entry.
    let direct_args: Arc<[String]> = arguments::analyzer_arguments(config).into();
    let host: Arc<str> = analyzer::host_identity().into();
    let analyzer_path = config.analyzer.clone();
    let out_dir = out_dir.to_path_buf();

    let workers = pool_size(config.sequential);
    debug!(total, workers, "dispatching compilation entries");

    let (task_tx, task_rx) = bounded::<AnalysisTask>(workers);
    let (done_tx, done_rx) = unbounded();

    let failed = thread::scope(|scope| {
        for _ in 0..workers {
            let task_rx = task_rx.clone();
            let done_tx = done_tx.clone();
            scope.spawn(move || {
                for task in task_rx.iter() {
                    if done_tx.send(step.analyze(&task)).is_err() {
                        return;
                    }
                }
            });
        }
        drop(task_rx);

        // Feed from a dedicated thread so completions can be consumed
        // while submission is still in flight.
        scope.spawn(move || {
            for entry in entries {
                let task = AnalysisTask {
                    entry,
                    analyzer: analyzer_path.clone(),
                    out_dir: out_dir.clone(),
                    direct_args: direct_args.clone(),
                    host: host.clone(),
                };
                if task_tx.send(task).is_err() {
                    return;
                }
            }
        });
        drop(done_tx);

        let mut failed = 0usize;
        for outcome in done_rx.iter() {
            for line in &outcome.error_output {
                info!("{}", line.trim_end());
            }
            if !outcome.success {
                failed += 1;
            }
        }
        failed
    });

    if failed > 0 {
        warn!(failed, total, "some analyzer invocations failed");
    }
    RunStats { total, failed }
}

/// Full run: report directory lifecycle, analysis, conditional report
/// generation, and the final process exit status.
///
/// The report directory is released on every exit path, including load
/// and report failures.
pub fn scan(
    config: &RunConfig,
    step: &dyn AnalysisStep,
    renderer: &dyn ReportRenderer,
) -> Result<i32, RunError> {
    // Load before touching the filesystem so a fatal database problem
    // leaves no directory behind.
    let entries = compilation::load_entries(&config.input)?;
    let title_prefix = if config.output_format.needs_report() {
        prefix::source_prefix_of(&entries)
    } else {
        Default::default()
    };

    let report_dir = ReportDirectory::create(&config.output, config.keep_empty)?;
    let stats = run_entries(entries, config, report_dir.path(), step);
    info!(
        total = stats.total,
        failed = stats.failed,
        "analysis complete"
    );

    let defects = if config.output_format.needs_report() {
        renderer.generate(&ReportContext {
            sequential: config.sequential,
            out_dir: report_dir.path(),
            prefix: &title_prefix,
            analyzer: &config.analyzer,
            html_title: config.html_title.as_deref(),
        })?
    } else {
        0
    };

    drop(report_dir);

    Ok(if config.status_bugs && defects > 0 { 1 } else { 0 })
}

fn pool_size(sequential: bool) -> usize {
    if sequential {
        1
    } else {
        thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_size_sequential_is_one() {
        assert_eq!(pool_size(true), 1);
    }

    #[test]
    fn test_pool_size_parallel_is_positive() {
        assert!(pool_size(false) >= 1);
    }
}
