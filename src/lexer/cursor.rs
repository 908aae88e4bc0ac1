//! Byte cursor with incremental line/column tracking.

use crate::lexer::span::{ByteOffset, Position, is_continuation_byte};

/// Byte-position cursor over input text.
///
/// The offset is a plain `usize` so scanning always makes progress; only
/// [`Cursor::position`] narrows it into a [`ByteOffset`] for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursor {
    offset: usize,
    line: u32,
    column: u32,
}

impl Cursor {
    /// Creates a cursor at byte offset `0`, line 1, column 1.
    pub(crate) fn new() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the current byte offset.
    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the current location as a [`Position`].
    pub(crate) fn position(&self) -> Position {
        Position::new(ByteOffset::from_usize(self.offset), self.line, self.column)
    }

    /// Returns the unconsumed tail of `input`.
    pub(crate) fn rest<'a>(&self, input: &'a str) -> &'a str {
        input.get(self.offset..).unwrap_or("")
    }

    /// Returns the current byte at cursor position.
    pub(crate) fn peek_byte(&self, input: &str) -> Option<u8> {
        input.as_bytes().get(self.offset).copied()
    }

    /// Returns the byte immediately before the cursor.
    pub(crate) fn prev_byte(&self, input: &str) -> Option<u8> {
        let offset = self.offset.checked_sub(1)?;
        input.as_bytes().get(offset).copied()
    }

    /// Consumes one byte and updates line/column bookkeeping.
    pub(crate) fn advance_byte(&mut self, input: &str) -> Option<u8> {
        let byte = self.peek_byte(input)?;
        self.offset += 1;
        if byte == b'\n' {
            self.line = self.line.saturating_add(1);
            self.column = 1;
        } else if !is_continuation_byte(byte) {
            self.column = self.column.saturating_add(1);
        }
        Some(byte)
    }

    /// Consumes bytes until the cursor reaches `target` (clamped to input end).
    pub(crate) fn advance_to(&mut self, target: usize, input: &str) {
        let target = target.min(input.len());
        while self.offset < target {
            if self.advance_byte(input).is_none() {
                break;
            }
        }
    }
}
