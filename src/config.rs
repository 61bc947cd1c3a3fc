//! Run configuration.
//!
//! All run-wide options live in [`RunConfig`], an explicit struct with
//! named fields and documented defaults. It is created once at startup,
//! never mutated afterwards, and therefore safe to read concurrently from
//! every worker.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Store model used by the analyzer.
///
/// `region` is field-sensitive; `basic` is less precise but faster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreModel {
    #[default]
    Region,
    Basic,
}

impl StoreModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Region => "region",
            Self::Basic => "basic",
        }
    }
}

/// Constraint engine used by the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConstraintModel {
    #[default]
    Range,
    Basic,
}

impl ConstraintModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Range => "range",
            Self::Basic => "basic",
        }
    }
}

/// Output format for analyzer results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Html,
    Plist,
    PlistHtml,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Plist => "plist",
            Self::PlistHtml => "plist-html",
        }
    }

    /// Whether this format requires a rendered report after analysis.
    pub fn needs_report(&self) -> bool {
        matches!(self, Self::Html | Self::PlistHtml)
    }
}

/// Resolved run-wide configuration.
///
/// Read-only for the duration of the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Path to the JSON compilation database. Default: `compile_commands.json`.
    pub input: PathBuf,
    /// Analyzer executable. Default: `clang`.
    pub analyzer: PathBuf,
    /// Report directory hint. When this is the conventional temp directory
    /// a uniquely named subdirectory is created under it instead.
    /// Default: the system temp directory.
    pub output: PathBuf,
    /// Run entries one at a time instead of in parallel. Default: false.
    pub sequential: bool,
    /// Exit with status 1 when the report contains defects. Default: false.
    pub status_bugs: bool,
    /// Keep the report directory even when it ends up empty. Default: false.
    pub keep_empty: bool,
    /// Title used on generated HTML pages.
    pub html_title: Option<String>,
    /// Also analyze functions in included headers. Default: false.
    pub analyze_headers: bool,
    /// Generate visitation statistics for the analyzed project. Default: false.
    pub stats: bool,
    /// Generate internal analyzer statistics. Default: false.
    pub internal_stats: bool,
    /// Number of times a block can be visited before giving up. Default: 4.
    pub maxloop: u32,
    /// Store model. Default: `region`.
    pub store_model: StoreModel,
    /// Constraint engine. Default: `range`.
    pub constraints_model: ConstraintModel,
    /// Result format. Default: `html`.
    pub output_format: OutputFormat,
    /// Raw `-analyzer-config` options, passed through verbatim.
    pub analyzer_config: Option<String>,
    /// Checker plugin libraries to load.
    pub plugins: Vec<PathBuf>,
    /// Checkers to enable explicitly.
    pub enable_checker: Vec<String>,
    /// Checkers to disable explicitly.
    pub disable_checker: Vec<String>,
    /// Verbosity level; 2 and above turns on analyzer progress display.
    /// Default: 0.
    pub verbose: u8,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("compile_commands.json"),
            analyzer: PathBuf::from("clang"),
            output: std::env::temp_dir(),
            sequential: false,
            status_bugs: false,
            keep_empty: false,
            html_title: None,
            analyze_headers: false,
            stats: false,
            internal_stats: false,
            maxloop: 4,
            store_model: StoreModel::default(),
            constraints_model: ConstraintModel::default(),
            output_format: OutputFormat::default(),
            analyzer_config: None,
            plugins: Vec::new(),
            enable_checker: Vec::new(),
            disable_checker: Vec::new(),
            verbose: 0,
        }
    }
}
