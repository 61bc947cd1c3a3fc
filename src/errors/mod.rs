//! Error types for the orchestration run.

mod load_error;
mod output_dir_error;
mod report_error;
mod run_error;

pub use load_error::LoadError;
pub use output_dir_error::OutputDirError;
pub use report_error::ReportError;
pub use run_error::RunError;
