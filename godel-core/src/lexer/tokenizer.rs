//! The lexer state machine
//!
//! Scans left to right with a mode stack (`Root` / `InString` /
//! `InComment`), trying the current mode's rules in declared order and
//! consuming the first non-empty match. The scan never fails: every input,
//! however malformed, terminates and produces tokens whose concatenation
//! reconstructs the input exactly.

use super::rules::{classify_symbols, classify_word, rules_for, Action, Mode, Rule};
use super::token::{Token, TokenCategory};

use godel_log::{debug, trace, Logger};
use std::sync::Arc;

/// The rule-driven tokenizer
///
/// Carries no scan state across calls; the mode stack and cursor live for
/// one [`Tokenizer::tokenize`] pass. Uses an explicit logger (no global
/// logging), defaulting to noop.
pub struct Tokenizer {
    logger: Arc<Logger>,
}

impl Tokenizer {
    /// Create a tokenizer with a noop logger
    pub fn new() -> Self {
        Self::with_logger(Logger::noop())
    }

    /// Create a tokenizer with an explicit logger
    pub fn with_logger(logger: Arc<Logger>) -> Self {
        trace!(logger, "Creating tokenizer");
        Self { logger }
    }

    /// Scan the complete source text into a token sequence
    ///
    /// Tokens are contiguous, non-overlapping, ordered by offset, and cover
    /// every byte of `source`.
    pub fn tokenize(&self, source: &str) -> Vec<Token> {
        trace!(self.logger, "Scanning {} bytes", source.len());

        let mut tokens = Vec::new();
        let mut mode_stack = vec![Mode::Root];
        let mut cursor = 0;

        while cursor < source.len() {
            let mode = mode_stack.last().copied().unwrap_or(Mode::Root);
            let rest = &source[cursor..];

            let matched = first_match(rules_for(mode), rest);
            let (category, len) = match matched {
                Some((rule, len)) => {
                    let lexeme = &rest[..len];
                    let category = match rule.action {
                        Action::Emit(category) => category,
                        Action::ClassifyWord => classify_word(lexeme),
                        Action::ClassifySymbols => classify_symbols(lexeme),
                        Action::Push { mode, category } => {
                            trace!(self.logger, "Entering mode {:?}", mode);
                            mode_stack.push(mode);
                            category
                        }
                        Action::Pop(category) => {
                            trace!(self.logger, "Leaving mode {:?}", mode);
                            if mode_stack.len() > 1 {
                                mode_stack.pop();
                            }
                            category
                        }
                    };
                    (category, len)
                }
                // Defensive fallback: no rule matched, consume one character
                // unstyled so the scan always makes progress.
                None => match rest.chars().next() {
                    Some(c) => (TokenCategory::None, c.len_utf8()),
                    None => break,
                },
            };

            let token = Token::new(category, cursor, cursor + len, &rest[..len]);
            debug!(
                self.logger,
                "Produced token: category={:?}, span={}..{}, text={:?}",
                token.category,
                token.start,
                token.end,
                token.text
            );
            tokens.push(token);
            cursor += len;
        }

        tokens
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Scan `source` with a noop logger
///
/// The tokenizer is a pure function of its input; this is the convenience
/// surface for callers that do not thread a logger.
pub fn tokenize(source: &str) -> Vec<Token> {
    Tokenizer::new().tokenize(source)
}

fn first_match<'r>(rules: &'r [Rule], rest: &str) -> Option<(&'r Rule, usize)> {
    for rule in rules {
        if let Some(len) = (rule.matches)(rest) {
            if len > 0 {
                return Some((rule, len));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(source: &str) -> Vec<TokenCategory> {
        tokenize(source).iter().map(|t| t.category).collect()
    }

    #[test]
    fn test_keyword_vs_identifier() {
        let tokens = tokenize("int x");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].category, TokenCategory::Keyword);
        assert_eq!(tokens[0].text, "int");
        assert_eq!(tokens[1].category, TokenCategory::Whitespace);
        assert_eq!(tokens[2].category, TokenCategory::Identifier);
        assert_eq!(tokens[2].text, "x");
    }

    #[test]
    fn test_float_longest_match() {
        let tokens = tokenize("3.14");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].category, TokenCategory::NumberFloat);
        assert_eq!(tokens[0].text, "3.14");
    }

    #[test]
    fn test_int_then_member_dot() {
        // "3." is an integer followed by a stray dot, not a float
        let tokens = tokenize("3.");
        assert_eq!(tokens[0].category, TokenCategory::Number);
        assert_eq!(tokens[1].category, TokenCategory::None);
        assert_eq!(tokens[1].text, ".");
    }

    #[test]
    fn test_operators_longest_run() {
        let tokens = tokenize("a<<=b");
        assert_eq!(tokens[1].category, TokenCategory::Operator);
        assert_eq!(tokens[1].text, "<<=");
    }

    #[test]
    fn test_string_mode_roundtrip() {
        let tokens = tokenize("\"hi\" x");
        assert_eq!(tokens[0].category, TokenCategory::String); // opening quote
        assert_eq!(tokens[1].category, TokenCategory::String); // body
        assert_eq!(tokens[2].category, TokenCategory::String); // closing quote
        assert_eq!(tokens[3].category, TokenCategory::Whitespace);
        assert_eq!(tokens[4].category, TokenCategory::Identifier);
    }

    #[test]
    fn test_string_escape_atomicity() {
        // source text: "a\"b"
        let tokens = tokenize("\"a\\\"b\"");
        let escape: Vec<&Token> = tokens
            .iter()
            .filter(|t| t.category == TokenCategory::StringEscape)
            .collect();
        assert_eq!(escape.len(), 1);
        assert_eq!(escape[0].text, "\\\"");
        // the terminating quote pops back to root: last token is the quote
        assert_eq!(tokens.last().unwrap().text, "\"");
        assert_eq!(tokens.last().unwrap().category, TokenCategory::String);
    }

    #[test]
    fn test_char_literal_atomic() {
        let tokens = tokenize("'\\n'");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].category, TokenCategory::String);
    }

    #[test]
    fn test_line_comment() {
        let tokens = tokenize("x // rest\ny");
        assert_eq!(
            categories("x // rest\ny"),
            vec![
                TokenCategory::Identifier,
                TokenCategory::Whitespace,
                TokenCategory::Comment,
                TokenCategory::Whitespace,
                TokenCategory::Identifier,
            ]
        );
        assert_eq!(tokens[2].text, "// rest");
    }

    #[test]
    fn test_block_comment_with_stray_stars() {
        let tokens = tokenize("/* a * b / c */x");
        assert!(tokens[..tokens.len() - 1]
            .iter()
            .all(|t| t.category == TokenCategory::Comment));
        assert_eq!(tokens.last().unwrap().category, TokenCategory::Identifier);
    }

    #[test]
    fn test_unterminated_comment_terminates() {
        let tokens = tokenize("/* never closes");
        assert!(!tokens.is_empty());
        assert!(tokens.iter().all(|t| t.category == TokenCategory::Comment));
        let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(joined, "/* never closes");
    }

    #[test]
    fn test_unterminated_string_terminates() {
        let tokens = tokenize("\"no close");
        let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(joined, "\"no close");
        assert!(tokens
            .iter()
            .all(|t| matches!(t.category, TokenCategory::String | TokenCategory::StringEscape)));
    }

    #[test]
    fn test_stray_character_fallback() {
        let tokens = tokenize("x @ y");
        assert_eq!(tokens[2].category, TokenCategory::None);
        assert_eq!(tokens[2].text, "@");
    }

    #[test]
    fn test_non_ascii_fallback() {
        // multibyte strays are consumed whole, not split mid-character
        let tokens = tokenize("x é");
        assert_eq!(tokens[2].category, TokenCategory::None);
        assert_eq!(tokens[2].text, "é");
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_idempotence() {
        let source = "int x = 1; /* c */ \"s\\n\"";
        assert_eq!(tokenize(source), tokenize(source));
    }

    #[test]
    fn test_tokenizer_logs_content() {
        use godel_log::{Level, LogRingBuffer};

        let ring = LogRingBuffer::new(100);
        let logger = Logger::new(Level::Trace).with_sink(ring.clone());

        let lexer = Tokenizer::with_logger(logger);
        ring.clear();
        lexer.tokenize("int x;");

        let records = ring.dump_records();
        assert!(
            records.iter().any(|r| r.message.contains("Scanning")),
            "Should log scan start"
        );
        assert!(
            records.iter().any(|r| r.message.contains("Produced token")),
            "Should log produced tokens"
        );
    }

    #[test]
    fn test_log_level_filtering() {
        use godel_log::{Level, LogRingBuffer};

        let ring = LogRingBuffer::new(100);
        let logger = Logger::new(Level::Info).with_sink(ring.clone());

        Tokenizer::with_logger(logger).tokenize("int x;");
        let records = ring.dump_records();
        assert!(
            !records.iter().any(|r| r.level == Level::Debug),
            "Debug logs should be filtered at Info level"
        );
    }
}
