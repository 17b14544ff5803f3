//! API error types

use godel_core::diagnostics::WireError;
use thiserror::Error;

/// Failure talking to the external compiler/runtime service
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The service process or endpoint could not be reached
    #[error("compile service unreachable: {0}")]
    Unreachable(String),

    /// The service exited abnormally
    #[error("compile service failed: {0}")]
    Failed(String),

    /// The service answered with a payload we could not decode
    #[error("{0}")]
    Wire(#[from] WireError),

    /// I/O while spawning or talking to the service
    #[error("service i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Session-level failure surfaced to the host editor
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("compile request failed: {0}")]
    Compile(#[source] ServiceError),

    #[error("run request failed: {0}")]
    Run(#[source] ServiceError),
}
