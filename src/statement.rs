//! Scanned statements.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::directive;
use crate::lexer::span::{ByteOffset, Position, Span, locate};

/// One statement cut from a script.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Statement {
    /// Byte offset of the first non-whitespace, non-comment character.
    pub pos: usize,
    /// Statement source, trimmed, including its `;` terminator.
    pub text: String,
    /// Verbatim comments immediately preceding the statement.
    pub comments: Vec<String>,
}

impl Statement {
    pub fn new(pos: usize, text: impl Into<String>, comments: Vec<String>) -> Self {
        Self {
            pos,
            text: text.into(),
            comments,
        }
    }

    /// Arguments of every `atlas:<name>` directive in the attached comments.
    ///
    /// A directive without an argument yields an empty string; no match
    /// yields an empty list.
    pub fn directive(&self, name: &str) -> Vec<String> {
        directive::extract(&self.comments, name)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// All directives in the attached comments, grouped by name.
    pub fn directives(&self) -> BTreeMap<&str, Vec<&str>> {
        directive::group(&self.comments)
    }

    /// Byte range of [`Statement::text`] in the scanned source.
    pub fn span(&self) -> Span {
        Span::new(
            ByteOffset::from_usize(self.pos),
            ByteOffset::from_usize(self.pos + self.text.len()),
        )
    }

    /// Line and column of the statement start in `source`.
    pub fn position(&self, source: &str) -> Position {
        locate(source, self.pos)
    }
}
