//! The rule table
//!
//! Declarative, ordered pattern rules per scanning mode, plus the two named
//! lexeme sets (`KEYWORDS`, `OPERATORS`) consulted by classification rules.
//! The table is `'static` data, initialized once and read-only afterwards,
//! so concurrent scans share it without synchronization.
//!
//! Rule order is load-bearing: within a mode the first rule matching a
//! non-empty prefix wins, which is how float-before-int and
//! escape-before-closing-quote are expressed.

use super::token::TokenCategory;

/// Scanning mode
///
/// `Root` is initial; `InString` / `InComment` are entered by push and left
/// by pop. No nesting: a mode's own open sequence has no rule inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Root,
    InString,
    InComment,
}

/// What a matched rule does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Emit the matched lexeme with a fixed category
    Emit(TokenCategory),
    /// Classify the lexeme through `KEYWORDS`, falling back to `Identifier`
    ClassifyWord,
    /// Classify the lexeme through `OPERATORS`, falling back to `None`
    ClassifySymbols,
    /// Emit with `category`, then enter `mode`
    Push { mode: Mode, category: TokenCategory },
    /// Emit with the category, then return to the previous mode
    Pop(TokenCategory),
}

/// A pattern matcher: byte length of the match at the start of the input,
/// or `None`. Matchers never return `Some(0)`.
pub type Matcher = fn(&str) -> Option<usize>;

/// One rule: a pattern and the action taken on its match
pub struct Rule {
    pub name: &'static str,
    pub matches: Matcher,
    pub action: Action,
}

/// Keyword set (closed enumeration, exact match)
pub static KEYWORDS: &[&str] = &[
    "struct", "if", "else", "for", "while", "return", "match", "break", "continue", "true",
    "false", "int", "void", "bool", "char", "float",
];

/// Operator set (closed enumeration of symbol lexemes)
pub static OPERATORS: &[&str] = &[
    "=", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<=", ">>=", "+", "-", "*", "/", "%",
    "^", "&", "|", "<<", ">>", "==", "!=", "<", "<=", ">", ">=", "&&", "||", "!", "--", "++", "~",
    "?", ":",
];

/// Symbol character class: runs of these are matched longest-first, then
/// resolved through `OPERATORS`
pub fn is_symbol_char(c: char) -> bool {
    matches!(
        c,
        '=' | '>' | '<' | '!' | '~' | '?' | ':' | '&' | '|' | '+' | '-' | '*' | '/' | '^' | '%'
    )
}

/// Classify a word lexeme: exact keyword match, else identifier
pub fn classify_word(lexeme: &str) -> TokenCategory {
    if KEYWORDS.contains(&lexeme) {
        TokenCategory::Keyword
    } else {
        TokenCategory::Identifier
    }
}

/// Classify a symbol run: exact operator match, else unstyled
pub fn classify_symbols(lexeme: &str) -> TokenCategory {
    if OPERATORS.contains(&lexeme) {
        TokenCategory::Operator
    } else {
        TokenCategory::None
    }
}

/// Get the ordered rule list for a mode
pub fn rules_for(mode: Mode) -> &'static [Rule] {
    match mode {
        Mode::Root => ROOT_RULES,
        Mode::InString => STRING_RULES,
        Mode::InComment => COMMENT_RULES,
    }
}

static ROOT_RULES: &[Rule] = &[
    Rule {
        name: "word",
        matches: match_word,
        action: Action::ClassifyWord,
    },
    // whitespace block: blanks, line comments, block comment open
    Rule {
        name: "whitespace",
        matches: match_whitespace,
        action: Action::Emit(TokenCategory::Whitespace),
    },
    Rule {
        name: "line-comment",
        matches: match_line_comment,
        action: Action::Emit(TokenCategory::Comment),
    },
    Rule {
        name: "block-comment-open",
        matches: match_block_comment_open,
        action: Action::Push {
            mode: Mode::InComment,
            category: TokenCategory::Comment,
        },
    },
    // float before int: longest match by declaration order
    Rule {
        name: "float",
        matches: match_float,
        action: Action::Emit(TokenCategory::NumberFloat),
    },
    Rule {
        name: "int",
        matches: match_int,
        action: Action::Emit(TokenCategory::Number),
    },
    // 'c' is matched atomically; " opens string mode
    Rule {
        name: "char-literal",
        matches: match_char_literal,
        action: Action::Emit(TokenCategory::String),
    },
    Rule {
        name: "string-open",
        matches: match_double_quote,
        action: Action::Push {
            mode: Mode::InString,
            category: TokenCategory::String,
        },
    },
    Rule {
        name: "symbols",
        matches: match_symbol_run,
        action: Action::ClassifySymbols,
    },
    Rule {
        name: "bracket",
        matches: match_bracket,
        action: Action::Emit(TokenCategory::Bracket),
    },
    Rule {
        name: "delimiter",
        matches: match_delimiter,
        action: Action::Emit(TokenCategory::Delimiter),
    },
];

static STRING_RULES: &[Rule] = &[
    Rule {
        name: "string-body",
        matches: match_string_body,
        action: Action::Emit(TokenCategory::String),
    },
    // escape before closing quote, so \" stays inside the string
    Rule {
        name: "string-escape",
        matches: match_escape,
        action: Action::Emit(TokenCategory::StringEscape),
    },
    Rule {
        name: "string-close",
        matches: match_double_quote,
        action: Action::Pop(TokenCategory::String),
    },
];

static COMMENT_RULES: &[Rule] = &[
    Rule {
        name: "comment-body",
        matches: match_comment_body,
        action: Action::Emit(TokenCategory::Comment),
    },
    Rule {
        name: "block-comment-close",
        matches: match_block_comment_close,
        action: Action::Pop(TokenCategory::Comment),
    },
    // stray '*' or '/' that is not part of the closer: consume one char so
    // malformed input cannot stall the scan
    Rule {
        name: "comment-stray",
        matches: match_single_char,
        action: Action::Emit(TokenCategory::Comment),
    },
];

// ------------------------------
// Matchers
// ------------------------------

/// `[a-zA-Z_][a-zA-Z0-9_]*`
fn match_word(s: &str) -> Option<usize> {
    let mut chars = s.char_indices();
    let (_, first) = chars.next()?;
    if !(first.is_ascii_alphabetic() || first == '_') {
        return None;
    }
    for (idx, c) in chars {
        if !(c.is_ascii_alphanumeric() || c == '_') {
            return Some(idx);
        }
    }
    Some(s.len())
}

/// `[ \t\r\n]+`
fn match_whitespace(s: &str) -> Option<usize> {
    let end = s
        .char_indices()
        .find(|(_, c)| !matches!(c, ' ' | '\t' | '\r' | '\n'))
        .map(|(idx, _)| idx)
        .unwrap_or(s.len());
    if end == 0 {
        None
    } else {
        Some(end)
    }
}

/// `//` to end of line (newline excluded)
fn match_line_comment(s: &str) -> Option<usize> {
    if !s.starts_with("//") {
        return None;
    }
    let end = s.find('\n').unwrap_or(s.len());
    Some(end)
}

fn match_block_comment_open(s: &str) -> Option<usize> {
    if s.starts_with("/*") {
        Some(2)
    } else {
        None
    }
}

/// `\d+\.\d+([eE][+-]?\d+)?`
fn match_float(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let int_len = ascii_digit_run(bytes, 0);
    if int_len == 0 {
        return None;
    }
    let mut pos = int_len;
    if bytes.get(pos) != Some(&b'.') {
        return None;
    }
    pos += 1;
    let frac_len = ascii_digit_run(bytes, pos);
    if frac_len == 0 {
        return None;
    }
    pos += frac_len;

    // optional exponent, only consumed when complete
    if let Some(b'e' | b'E') = bytes.get(pos) {
        let mut exp_pos = pos + 1;
        if let Some(b'+' | b'-') = bytes.get(exp_pos) {
            exp_pos += 1;
        }
        let exp_len = ascii_digit_run(bytes, exp_pos);
        if exp_len > 0 {
            pos = exp_pos + exp_len;
        }
    }
    Some(pos)
}

/// `\d+`
fn match_int(s: &str) -> Option<usize> {
    let len = ascii_digit_run(s.as_bytes(), 0);
    if len == 0 {
        None
    } else {
        Some(len)
    }
}

/// `'([^'\\]|\\.)'` — one plain or escaped character between single quotes,
/// matched atomically (no mode push)
fn match_char_literal(s: &str) -> Option<usize> {
    let mut chars = s.char_indices();
    let (_, open) = chars.next()?;
    if open != '\'' {
        return None;
    }
    let (_, content) = chars.next()?;
    if content == '\\' {
        // escaped: backslash plus any single character
        chars.next()?;
    } else if content == '\'' {
        return None;
    }
    let (idx, close) = chars.next()?;
    if close != '\'' {
        return None;
    }
    Some(idx + 1)
}

fn match_double_quote(s: &str) -> Option<usize> {
    if s.starts_with('"') {
        Some(1)
    } else {
        None
    }
}

/// Maximal run of symbol-class characters
fn match_symbol_run(s: &str) -> Option<usize> {
    let end = s
        .char_indices()
        .find(|(_, c)| !is_symbol_char(*c))
        .map(|(idx, _)| idx)
        .unwrap_or(s.len());
    if end == 0 {
        None
    } else {
        Some(end)
    }
}

fn match_bracket(s: &str) -> Option<usize> {
    match s.chars().next() {
        Some('{' | '}' | '(' | ')' | '[' | ']') => Some(1),
        _ => None,
    }
}

fn match_delimiter(s: &str) -> Option<usize> {
    match s.chars().next() {
        Some(',' | ';') => Some(1),
        _ => None,
    }
}

/// `[^\\"]+` — string content up to the next escape or quote
fn match_string_body(s: &str) -> Option<usize> {
    let end = s
        .char_indices()
        .find(|(_, c)| matches!(c, '\\' | '"'))
        .map(|(idx, _)| idx)
        .unwrap_or(s.len());
    if end == 0 {
        None
    } else {
        Some(end)
    }
}

/// `\\.` — backslash plus any character, consumed as one unit
fn match_escape(s: &str) -> Option<usize> {
    let mut chars = s.chars();
    if chars.next()? != '\\' {
        return None;
    }
    let escaped = chars.next()?;
    Some(1 + escaped.len_utf8())
}

/// `[^/*]+` — comment content up to the next potential closer byte
fn match_comment_body(s: &str) -> Option<usize> {
    let end = s
        .char_indices()
        .find(|(_, c)| matches!(c, '/' | '*'))
        .map(|(idx, _)| idx)
        .unwrap_or(s.len());
    if end == 0 {
        None
    } else {
        Some(end)
    }
}

fn match_block_comment_close(s: &str) -> Option<usize> {
    if s.starts_with("*/") {
        Some(2)
    } else {
        None
    }
}

/// Any single character
fn match_single_char(s: &str) -> Option<usize> {
    s.chars().next().map(|c| c.len_utf8())
}

fn ascii_digit_run(bytes: &[u8], start: usize) -> usize {
    let mut len = 0;
    while let Some(b'0'..=b'9') = bytes.get(start + len) {
        len += 1;
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_set() {
        assert_eq!(classify_word("int"), TokenCategory::Keyword);
        assert_eq!(classify_word("while"), TokenCategory::Keyword);
        assert_eq!(classify_word("integer"), TokenCategory::Identifier);
        assert_eq!(classify_word("Int"), TokenCategory::Identifier);
    }

    #[test]
    fn test_operator_set() {
        assert_eq!(classify_symbols("<<="), TokenCategory::Operator);
        assert_eq!(classify_symbols("&&"), TokenCategory::Operator);
        assert_eq!(classify_symbols("="), TokenCategory::Operator);
        // a run that is not a named operator stays unstyled
        assert_eq!(classify_symbols("=+"), TokenCategory::None);
    }

    #[test]
    fn test_match_word() {
        assert_eq!(match_word("foo_1 bar"), Some(5));
        assert_eq!(match_word("_x"), Some(2));
        assert_eq!(match_word("1abc"), None);
    }

    #[test]
    fn test_match_whitespace() {
        assert_eq!(match_whitespace("  \t\r\nx"), Some(5));
        assert_eq!(match_whitespace("x"), None);
    }

    #[test]
    fn test_match_line_comment() {
        assert_eq!(match_line_comment("// hi\nnext"), Some(5));
        assert_eq!(match_line_comment("// to eof"), Some(9));
        assert_eq!(match_line_comment("/ x"), None);
    }

    #[test]
    fn test_match_float() {
        assert_eq!(match_float("3.14"), Some(4));
        assert_eq!(match_float("3.14e10"), Some(7));
        assert_eq!(match_float("3.14E-2;"), Some(7));
        // incomplete exponent is left for the next token
        assert_eq!(match_float("1.5e+"), Some(3));
        // no fraction part: not a float
        assert_eq!(match_float("3."), None);
        assert_eq!(match_float("42"), None);
    }

    #[test]
    fn test_match_int() {
        assert_eq!(match_int("42;"), Some(2));
        assert_eq!(match_int("x"), None);
    }

    #[test]
    fn test_match_char_literal() {
        assert_eq!(match_char_literal("'a'"), Some(3));
        assert_eq!(match_char_literal("'\\n'"), Some(4));
        assert_eq!(match_char_literal("'\\''"), Some(4));
        assert_eq!(match_char_literal("''"), None);
        assert_eq!(match_char_literal("'ab'"), None);
        assert_eq!(match_char_literal("'a"), None);
    }

    #[test]
    fn test_match_symbol_run() {
        assert_eq!(match_symbol_run("<<= x"), Some(3));
        assert_eq!(match_symbol_run("&&b"), Some(2));
        assert_eq!(match_symbol_run("abc"), None);
    }

    #[test]
    fn test_match_escape() {
        assert_eq!(match_escape("\\\"rest"), Some(2));
        assert_eq!(match_escape("\\\\"), Some(2));
        assert_eq!(match_escape("\\"), None);
        assert_eq!(match_escape("x"), None);
    }

    #[test]
    fn test_match_comment_body() {
        assert_eq!(match_comment_body("text */"), Some(5));
        assert_eq!(match_comment_body("*/"), None);
        assert_eq!(match_comment_body("/"), None);
    }

    #[test]
    fn test_rules_for_order() {
        let names: Vec<&str> = rules_for(Mode::Root).iter().map(|r| r.name).collect();
        // float must be tried before int, char literal before symbols
        let float_idx = names.iter().position(|n| *n == "float").unwrap();
        let int_idx = names.iter().position(|n| *n == "int").unwrap();
        assert!(float_idx < int_idx);

        let escape_names: Vec<&str> = rules_for(Mode::InString).iter().map(|r| r.name).collect();
        let esc = escape_names
            .iter()
            .position(|n| *n == "string-escape")
            .unwrap();
        let close = escape_names
            .iter()
            .position(|n| *n == "string-close")
            .unwrap();
        assert!(esc < close);
    }

    #[test]
    fn test_matchers_never_match_empty() {
        for mode in [Mode::Root, Mode::InString, Mode::InComment] {
            for rule in rules_for(mode) {
                assert_eq!((rule.matches)(""), None, "rule {} matched empty", rule.name);
            }
        }
    }
}
