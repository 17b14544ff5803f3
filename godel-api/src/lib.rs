//! Godel API - Editor orchestration layer
//!
//! Ties the lexical core to the external compiler/runtime service:
//! - Session state ([`EditorSession`]: source, tokens, markers, output)
//! - The service boundary ([`CompileService`])
//! - Configuration abstraction (SessionConfig)
//! - Unified error handling (SessionError / ServiceError)
//!
//! For CLI convenience, this crate provides a global singleton config.
//! For library use, prefer explicit `EditorSession::with_logger`.

pub mod config;
pub mod error;
pub mod service;
pub mod session;

pub use config::{config as get_config, init as init_config, is_initialized, SessionConfig};
pub use error::{ServiceError, SessionError};
pub use service::CompileService;
pub use session::EditorSession;

// Re-export config types from godel_config
pub use godel_config::{EditorConfig, LogLevel, Phase};

// Re-export the core types the session hands out
pub use godel_core::diagnostics::{Diagnostic, Marker, RunResult, Severity};
pub use godel_core::lexer::{Token, TokenCategory};
