//! Turns vulnerability scan JSON into a static HTML report.
//!
//! The report is rendered server-side with the `ui_kit` components and
//! written as a single self-contained file.

pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod severity;
pub mod summary;

use std::path::{Path, PathBuf};

pub use config::ReportConfig;
pub use error::{ReportError, ReportErrorKind};
pub use model::{parse_document, ScanResult, Vulnerability};
pub use render::{render_document, ReportView};
pub use severity::Severity;
pub use summary::{findings, group_by_severity, Finding, Summary};

/// Used when neither the command line nor the config names an output.
pub const DEFAULT_OUTPUT: &str = "vulnerability-report.html";

/// One invocation. `None` fields fall back to the config file.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub title: Option<String>,
}

impl RunOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub output: PathBuf,
    pub summary: Summary,
}

/// Builds the report text without touching the filesystem.
pub fn build_report(input: &str, config: &ReportConfig) -> Result<(String, Summary), ReportError> {
    let scans = parse_document(input)?;
    let findings = findings(&scans);
    let summary = Summary::from_findings(&findings);
    let view = ReportView {
        heading: config.title.clone(),
        findings,
        scans: scans.len(),
        show_empty_sections: config.show_empty_sections,
    };
    Ok((render_document(&view), summary))
}

/// Reads the input, renders the report and writes it.
pub fn run(options: &RunOptions) -> Result<RunOutcome, ReportError> {
    let mut config = ReportConfig::load(options.config.as_deref())?;
    if let Some(title) = &options.title {
        config.title = title.clone();
    }
    let output = options
        .output
        .clone()
        .or_else(|| config.output.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let input = read(&options.input)?;
    let (html, summary) = build_report(&input, &config)?;
    write(&output, &html)?;

    tracing::info!(
        input = %options.input.display(),
        output = %output.display(),
        total = summary.total(),
        "report written"
    );
    Ok(RunOutcome { output, summary })
}

fn read(path: &Path) -> Result<String, ReportError> {
    std::fs::read_to_string(path).map_err(|e| ReportError::io(path, e))
}

fn write(path: &Path, contents: &str) -> Result<(), ReportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ReportError::io(parent, e))?;
    }
    std::fs::write(path, contents).map_err(|e| ReportError::io(path, e))
}
