//! crosscheck: parallel orchestration of a static analyzer over a build.
//!
//! Given a JSON compilation database, crosscheck runs the Clang static
//! analyzer once per compilation entry across a bounded worker pool,
//! forwards analyzer diagnostics to the log, and manages the lifecycle of
//! the directory collecting per-entry results:
//! - Compilation: compilation database records and loading
//! - Arguments: translation of run options into analyzer frontend flags
//! - Orchestrator: worker pool dispatch, result consumption, exit status
//! - Report Dir: scope-bound output directory creation and disposal
//! - Prefix: common source-path prefix for report titling
//! - Analyzer / Report: subprocess and report-rendering seams

pub mod analyzer;
pub mod arguments;
pub mod compilation;
pub mod config;
pub mod dedup;
pub mod errors;
pub mod logging;
pub mod orchestrator;
pub mod prefix;
pub mod report;
pub mod report_dir;

// Re-exports for convenience
pub use analyzer::{AnalysisOutcome, AnalysisStep, AnalysisTask, ClangAnalyzer};
pub use compilation::{load_entries, CompilationEntry};
pub use config::{ConstraintModel, OutputFormat, RunConfig, StoreModel};
pub use dedup::Deduplicator;
pub use errors::{LoadError, OutputDirError, ReportError, RunError};
pub use orchestrator::{run, scan, RunStats};
pub use report::{ReportContext, ReportRenderer};
pub use report_dir::ReportDirectory;
