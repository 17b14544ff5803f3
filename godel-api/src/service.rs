//! Compiler/runtime bridge boundary
//!
//! The compiler and runtime are an external black box. The session only
//! assumes the wire contract: `compile` answers a JSON diagnostics array,
//! `run` answers output text or `{"errors": [...]}`.

use crate::error::ServiceError;
use godel_core::diagnostics::{Diagnostic, RunResult};

/// The external compile/run service
///
/// Implementations are free to spawn a process, call over HTTP, or answer
/// from memory (tests). Both calls are synchronous from the caller's view;
/// the session layers its own resolution policy on top.
pub trait CompileService {
    /// Submit the full source text for compilation
    fn compile(&self, source: &str) -> Result<Vec<Diagnostic>, ServiceError>;

    /// Submit the full source text for execution
    fn run(&self, source: &str) -> Result<RunResult, ServiceError>;
}
