//! Editor session orchestration
//!
//! Owns the current source text, token list, marker set, and output sink,
//! and drives the tokenizer and the external compile/run service. All
//! editor-visible state is replaced wholesale, never patched.

use std::sync::Arc;

use godel_config::EditorConfig;
use godel_core::diagnostics::{to_markers, Diagnostic, Marker};
use godel_core::lexer::{Token, Tokenizer};
use godel_log::{debug, info, warn, Logger};

use crate::error::SessionError;
use crate::service::CompileService;

/// One open document and its derived editor state
///
/// Compile responses are applied last-resolved-wins: each request carries a
/// monotonically increasing revision for observability, but an out-of-order
/// response still replaces the marker set. With whole-set replacement the
/// window closes on the next keystroke, so the revision is logged rather
/// than enforced.
pub struct EditorSession<S: CompileService> {
    source: String,
    tokens: Vec<Token>,
    markers: Vec<Marker>,
    output: String,
    /// Revision of the most recent compile request
    issued_revision: u64,
    /// Revision of the most recently applied compile response
    applied_revision: u64,
    tokenizer: Tokenizer,
    service: S,
    config: EditorConfig,
    logger: Arc<Logger>,
}

impl<S: CompileService> EditorSession<S> {
    /// Create a session with default config and a noop logger
    pub fn new(service: S) -> Self {
        Self::with_logger(service, EditorConfig::default(), Logger::noop())
    }

    /// Create a session with explicit config and logger
    pub fn with_logger(service: S, config: EditorConfig, logger: Arc<Logger>) -> Self {
        Self {
            source: String::new(),
            tokens: Vec::new(),
            markers: Vec::new(),
            output: String::new(),
            issued_revision: 0,
            applied_revision: 0,
            tokenizer: Tokenizer::with_logger(logger.clone()),
            service,
            config,
            logger,
        }
    }

    /// Replace the document text
    ///
    /// Retokenizes synchronously, then (when `compile_on_change` is set)
    /// issues a compile request and applies its response. Returns the
    /// revision assigned to this edit.
    pub fn update_source(&mut self, text: impl Into<String>) -> Result<u64, SessionError> {
        self.source = text.into();
        self.issued_revision += 1;
        let revision = self.issued_revision;

        debug!(
            self.logger,
            "Source updated: revision={}, {} bytes",
            revision,
            self.source.len()
        );

        self.tokens = self.tokenizer.tokenize(&self.source);
        if !self.config.forward_whitespace {
            self.tokens
                .retain(|t| t.category != godel_core::lexer::TokenCategory::Whitespace);
        }

        if self.config.compile_on_change {
            let diagnostics = self
                .service
                .compile(&self.source)
                .map_err(SessionError::Compile)?;
            self.apply_compile_result(revision, &diagnostics);
        }

        Ok(revision)
    }

    /// Apply a resolved compile response
    ///
    /// Replaces the entire marker set atomically. Stale responses (revision
    /// below an already-applied one) still win; they are only logged.
    pub fn apply_compile_result(&mut self, revision: u64, diagnostics: &[Diagnostic]) {
        if revision < self.applied_revision {
            warn!(
                self.logger,
                "Stale compile response applied: revision={}, latest was {}",
                revision,
                self.applied_revision
            );
        }
        self.applied_revision = revision;
        self.markers = to_markers(diagnostics);
        info!(
            self.logger,
            "Markers replaced: revision={}, {} marker(s)",
            revision,
            self.markers.len()
        );
    }

    /// Run the current source and replace the output sink
    ///
    /// The sink holds either the program's output text or the runtime's
    /// error lines joined by newlines; previous content is discarded.
    pub fn run_program(&mut self) -> Result<&str, SessionError> {
        info!(self.logger, "Running program: {} bytes", self.source.len());
        let result = self.service.run(&self.source).map_err(SessionError::Run)?;
        self.output = result.render();
        Ok(&self.output)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    /// Revision of the most recently applied compile response
    pub fn applied_revision(&self) -> u64 {
        self.applied_revision
    }
}
