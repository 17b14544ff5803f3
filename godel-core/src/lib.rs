//! Godel editor core
//!
//! The lexical engine behind the Godel source editor: a restartable,
//! rule-driven tokenizer that classifies every span of a source buffer
//! (keywords, literals, operators, comments, whitespace) for the host
//! highlighter, plus the diagnostic-to-marker mapping consumed by the
//! editor's error squiggles.
//!
//! The compiler and runtime for the language are external services; this
//! crate only defines their wire types ([`diagnostics`]).

pub mod diagnostics;
pub mod lexer;

pub use diagnostics::{to_markers, Diagnostic, Marker, RunResult, Severity};
pub use lexer::{tokenize, Token, TokenCategory, Tokenizer};
