//! Immutable source location primitives.

use serde::Serialize;

/// Byte offset within the scanned source, as reported in locations.
///
/// Offsets are stored as `u32`; past 4 GiB they saturate at `u32::MAX`.
/// Scanning itself tracks `usize` offsets, so only reported locations and
/// spans are affected on such inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct ByteOffset(u32);

impl ByteOffset {
    /// Creates a byte offset value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Creates an offset from `usize` with saturation.
    pub fn from_usize(value: usize) -> Self {
        match u32::try_from(value) {
            Ok(offset) => Self(offset),
            Err(_) => Self(u32::MAX),
        }
    }

    /// Returns the raw offset value.
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Converts the offset to `usize`.
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// Half-open byte range `[start, end)` in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: ByteOffset,
    /// Exclusive end byte offset.
    pub end: ByteOffset,
}

impl Span {
    /// Creates a span and normalizes offset ordering.
    pub fn new(start: ByteOffset, end: ByteOffset) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Returns the span length in bytes.
    pub fn len(self) -> u32 {
        self.end.value() - self.start.value()
    }

    /// Returns `true` when the span contains no bytes.
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Returns the spanned slice of `input`, if the span is in bounds.
    pub fn slice(self, input: &str) -> Option<&str> {
        input.get(self.start.as_usize()..self.end.as_usize())
    }
}

/// A resolved source location: byte offset plus 1-based line and column.
///
/// Columns count characters, not bytes, so a multi-byte UTF-8 sequence
/// advances the column once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub offset: ByteOffset,
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// Position of the first byte of any input.
    pub const START: Self = Self {
        offset: ByteOffset::new(0),
        line: 1,
        column: 1,
    };

    pub const fn new(offset: ByteOffset, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

/// Resolves `offset` in `input` to a line/column position.
///
/// Offsets past the end of input are clamped to `input.len()`.
pub fn locate(input: &str, offset: usize) -> Position {
    let end = offset.min(input.len());
    let prefix = &input.as_bytes()[..end];
    let line_start = prefix
        .iter()
        .rposition(|byte| *byte == b'\n')
        .map_or(0, |index| index + 1);
    let newlines = prefix.iter().filter(|byte| **byte == b'\n').count();
    let column = prefix[line_start..]
        .iter()
        .filter(|byte| !is_continuation_byte(**byte))
        .count();

    Position::new(
        ByteOffset::from_usize(end),
        saturating_u32(newlines + 1),
        saturating_u32(column + 1),
    )
}

pub(crate) fn is_continuation_byte(byte: u8) -> bool {
    byte & 0b1100_0000 == 0b1000_0000
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
