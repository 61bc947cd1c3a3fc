//! Report generation errors.

/// Error surfaced when the report renderer fails to produce a defect count.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Report generation failed: {message}")]
    Failed { message: String },
}
