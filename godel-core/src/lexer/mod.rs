//! Rule-driven lexer
//!
//! Split the way the scanning pipeline flows:
//! - [`token`]: the classified spans handed to the highlighter
//! - [`rules`]: the immutable per-mode rule table and named lexeme sets
//! - [`tokenizer`]: the mode-stack state machine that drives the rules

pub mod rules;
pub mod token;
pub mod tokenizer;

pub use rules::{Mode, Rule, KEYWORDS, OPERATORS};
pub use token::{Token, TokenCategory};
pub use tokenizer::{tokenize, Tokenizer};
