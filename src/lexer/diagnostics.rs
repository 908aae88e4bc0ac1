//! Lexical error contracts.
//!
//! Every scan failure is fatal: the scanner stops at the first error in
//! source order and returns it instead of any statements. The rendered form
//! is `"<line>:<column>: <message>"`, which callers surface verbatim.

use thiserror::Error;

use crate::lexer::span::Position;

/// Stable lexical error categories.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum LexErrorKind {
    /// A `'` or `"` literal reached end of input before its closing quote.
    #[error("unclosed quote '{}'", quote_literal(.0))]
    UnclosedQuote(char),
    /// A `$tag$` literal reached end of input before the matching tag.
    #[error("unclosed quote '{0}'")]
    UnclosedDollarQuote(String),
    /// A `(` was still open at a batch boundary or end of input.
    #[error("unclosed '('")]
    UnclosedParen,
    /// A `)` appeared with no open `(`.
    #[error("unexpected ')'")]
    UnexpectedParen,
}

/// Renders a quote character the way it appears between the message quotes.
fn quote_literal(quote: &char) -> String {
    match quote {
        '\'' => "\\'".to_string(),
        other => other.to_string(),
    }
}

/// Lexical error pinned to the offending source position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{line}:{column}: {kind}", line = .position.line, column = .position.column)]
pub struct LexError {
    /// Error category.
    pub kind: LexErrorKind,
    /// Location of the offending character (opening quote, innermost `(`, or stray `)`).
    pub position: Position,
}

impl LexError {
    /// Creates an error value.
    pub fn new(kind: LexErrorKind, position: Position) -> Self {
        Self { kind, position }
    }

    /// Creates an `UnclosedQuote` error at the opening quote.
    pub fn unclosed_quote(quote: char, position: Position) -> Self {
        Self::new(LexErrorKind::UnclosedQuote(quote), position)
    }

    /// Creates an `UnclosedDollarQuote` error at the opening tag.
    pub fn unclosed_dollar_quote(tag: impl Into<String>, position: Position) -> Self {
        Self::new(LexErrorKind::UnclosedDollarQuote(tag.into()), position)
    }

    /// Creates an `UnclosedParen` error at the innermost open `(`.
    pub fn unclosed_paren(position: Position) -> Self {
        Self::new(LexErrorKind::UnclosedParen, position)
    }

    /// Creates an `UnexpectedParen` error at the stray `)`.
    pub fn unexpected_paren(position: Position) -> Self {
        Self::new(LexErrorKind::UnexpectedParen, position)
    }

    /// 1-based line of the offending character.
    pub fn line(&self) -> u32 {
        self.position.line
    }

    /// 1-based column of the offending character.
    pub fn column(&self) -> u32 {
        self.position.column
    }

    /// Short fix-it hint for tooling that renders diagnostics.
    pub fn suggestion(&self) -> String {
        match &self.kind {
            LexErrorKind::UnclosedQuote(quote) => format!("close the literal with `{quote}`."),
            LexErrorKind::UnclosedDollarQuote(tag) => {
                format!("close the dollar-quoted literal with `{tag}`.")
            }
            LexErrorKind::UnclosedParen => "add a matching `)`.".to_string(),
            LexErrorKind::UnexpectedParen => {
                "remove the `)` or add a matching `(` before it.".to_string()
            }
        }
    }
}
