//! Godel Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all editor crates.

use serde::Deserialize;

/// Configuration for the editor-facing behavior of the core
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Whether a compile request is issued on every content change
    pub compile_on_change: bool,
    /// Whether whitespace tokens are forwarded to the highlighter
    ///
    /// The tokenizer always emits them (span coverage is an invariant);
    /// hosts that style whitespace themselves can filter here.
    pub forward_whitespace: bool,
}

/// Log level shared across crates (serde form used by the project file)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Pipeline phase enum for phase-specific log targets
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Lexer,
    Markers,
    Bridge,
    Session,
}

impl Phase {
    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Lexer => "lexer",
            Phase::Markers => "markers",
            Phase::Bridge => "bridge",
            Phase::Session => "session",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("godel::{}", self.as_str())
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            compile_on_change: true,
            forward_whitespace: true,
        }
    }
}
