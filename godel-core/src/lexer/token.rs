//! Token definitions

use serde::Serialize;

/// Lexical category of a source span
///
/// `None` is the explicit "no style" category: stray characters outside
/// every named class still become tokens so that span coverage holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenCategory {
    #[serde(rename = "keyword")]
    Keyword,
    #[serde(rename = "identifier")]
    Identifier,
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "number.float")]
    NumberFloat,
    #[serde(rename = "string")]
    String,
    #[serde(rename = "string.escape")]
    StringEscape,
    #[serde(rename = "operator")]
    Operator,
    #[serde(rename = "delimiter")]
    Delimiter,
    #[serde(rename = "bracket")]
    Bracket,
    #[serde(rename = "comment")]
    Comment,
    #[serde(rename = "whitespace")]
    Whitespace,
    #[serde(rename = "none")]
    None,
}

impl TokenCategory {
    /// Highlighter scope name for this category
    pub const fn as_str(&self) -> &'static str {
        match self {
            TokenCategory::Keyword => "keyword",
            TokenCategory::Identifier => "identifier",
            TokenCategory::Number => "number",
            TokenCategory::NumberFloat => "number.float",
            TokenCategory::String => "string",
            TokenCategory::StringEscape => "string.escape",
            TokenCategory::Operator => "operator",
            TokenCategory::Delimiter => "delimiter",
            TokenCategory::Bracket => "bracket",
            TokenCategory::Comment => "comment",
            TokenCategory::Whitespace => "whitespace",
            TokenCategory::None => "none",
        }
    }
}

/// A classified, contiguous span of source text
///
/// Byte offsets, half-open `[start, end)`. Tokens are immutable once
/// produced and regenerated wholesale on every scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub category: TokenCategory,
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl Token {
    /// Create a new token
    pub fn new(category: TokenCategory, start: usize, end: usize, text: impl Into<String>) -> Self {
        Self {
            category,
            start,
            end,
            text: text.into(),
        }
    }

    /// Span length in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True for zero-length spans (never produced by the tokenizer)
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}
