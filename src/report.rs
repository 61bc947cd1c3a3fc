//! Report-rendering seam.
//!
//! Invoked once, after every entry has completed, and only when the
//! configured output format requires a rendered report.

use std::path::Path;

use crate::errors::ReportError;

/// Inputs for one report-rendering pass.
#[derive(Debug)]
pub struct ReportContext<'a> {
    pub sequential: bool,
    /// Directory holding the per-entry analyzer artifacts.
    pub out_dir: &'a Path,
    /// Common source-path prefix, for file name truncation in titles.
    pub prefix: &'a Path,
    pub analyzer: &'a Path,
    pub html_title: Option<&'a str>,
}

/// Renders the aggregated report and returns the defect count.
pub trait ReportRenderer: Send + Sync {
    fn generate(&self, context: &ReportContext<'_>) -> Result<u32, ReportError>;
}
