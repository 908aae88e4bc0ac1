//! Parenthesis balance tracking.

use crate::lexer::diagnostics::LexError;
use crate::lexer::span::Position;

/// Positions of currently open `(`, innermost last.
#[derive(Debug, Default, Clone)]
pub(crate) struct ParenStack {
    open: Vec<Position>,
}

impl ParenStack {
    pub(crate) fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub(crate) fn push(&mut self, position: Position) {
        self.open.push(position);
    }

    /// Closes the innermost `(`; a `)` with nothing open is an error.
    pub(crate) fn pop(&mut self, close: Position) -> Result<(), LexError> {
        match self.open.pop() {
            Some(_) => Ok(()),
            None => Err(LexError::unexpected_paren(close)),
        }
    }

    /// Fails with the innermost open `(` when the stack is not empty.
    pub(crate) fn ensure_closed(&self) -> Result<(), LexError> {
        match self.open.last() {
            Some(position) => Err(LexError::unclosed_paren(*position)),
            None => Ok(()),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.open.clear();
    }
}
