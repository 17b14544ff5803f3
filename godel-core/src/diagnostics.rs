//! Diagnostics and editor markers
//!
//! Wire types for the external compiler/runtime service and the pure
//! adapter that turns its diagnostics into host-editor markers. Field
//! names on the wire (`error`, `line`, `col`, `endline`, `endcol`) are the
//! service's, not ours.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Marker severity
///
/// The compile service only reports errors; the enum exists so the marker
/// shape matches what the host editor consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
}

impl Severity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A compiler-reported error with source position (1-based lines/columns)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    #[serde(rename = "error")]
    pub message: String,
    pub line: usize,
    #[serde(rename = "col")]
    pub column: usize,
    #[serde(rename = "endline")]
    pub end_line: usize,
    #[serde(rename = "endcol")]
    pub end_column: usize,
}

/// An editor-rendered annotation derived from a Diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Marker {
    pub severity: Severity,
    pub message: String,
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

/// Map diagnostics to markers: pure, 1:1, order-preserving
///
/// No merging, no deduplication, no filtering. The caller replaces the
/// host editor's entire marker set with the result on every invocation.
pub fn to_markers(diagnostics: &[Diagnostic]) -> Vec<Marker> {
    diagnostics
        .iter()
        .map(|d| Marker {
            severity: Severity::Error,
            message: d.message.clone(),
            start_line: d.line,
            start_column: d.column,
            end_line: d.end_line,
            end_column: d.end_column,
        })
        .collect()
}

/// Result of running a program through the external runtime
///
/// On the wire this is either a bare output string or `{"errors": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RunResult {
    Output(String),
    Errors { errors: Vec<String> },
}

impl RunResult {
    /// Render the result the way the output sink shows it: the output
    /// text verbatim, or the error lines joined by newlines
    pub fn render(&self) -> String {
        match self {
            RunResult::Output(text) => text.clone(),
            RunResult::Errors { errors } => errors.join("\n"),
        }
    }
}

/// Malformed payload from the external service
#[derive(Debug, Error)]
pub enum WireError {
    #[error("malformed diagnostics payload: {0}")]
    Diagnostics(#[source] serde_json::Error),

    #[error("malformed run result payload: {0}")]
    RunResult(#[source] serde_json::Error),
}

/// Parse the compile service's JSON diagnostics array
pub fn parse_diagnostics(payload: &str) -> Result<Vec<Diagnostic>, WireError> {
    serde_json::from_str(payload).map_err(WireError::Diagnostics)
}

/// Parse the runtime service's JSON run result
pub fn parse_run_result(payload: &str) -> Result<RunResult, WireError> {
    serde_json::from_str(payload).map_err(WireError::RunResult)
}
