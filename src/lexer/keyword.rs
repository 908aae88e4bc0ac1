//! Case-insensitive keyword matcher over the fixed set of words the scanner
//! reacts to.
//!
//! Words are maximal runs of identifier characters, so a keyword never matches a
//! substring of a longer identifier (`BEGINNING`, `end_date`, `go2`).

use crate::lexer::comment::CommentKind;

/// Keywords that influence statement boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Keyword {
    Begin,
    End,
    Atomic,
    Try,
    Catch,
    Case,
    Else,
    // Compound statements closed by `END <kw>` rather than a bare `END`.
    If,
    Loop,
    While,
    Repeat,
    For,
    // Words after `BEGIN` that start a transaction instead of a block.
    Transaction,
    Tran,
    Work,
    Deferred,
    Immediate,
    Exclusive,
    Distributed,
    Isolation,
    Read,
    // `BEGIN NOT DEFERRABLE` is a transaction, `BEGIN NOT ATOMIC` a block.
    Not,
    Deferrable,
}

const KEYWORDS: &[(&str, Keyword)] = &[
    ("BEGIN", Keyword::Begin),
    ("END", Keyword::End),
    ("ATOMIC", Keyword::Atomic),
    ("TRY", Keyword::Try),
    ("CATCH", Keyword::Catch),
    ("CASE", Keyword::Case),
    ("ELSE", Keyword::Else),
    ("IF", Keyword::If),
    ("LOOP", Keyword::Loop),
    ("WHILE", Keyword::While),
    ("REPEAT", Keyword::Repeat),
    ("FOR", Keyword::For),
    ("TRANSACTION", Keyword::Transaction),
    ("TRAN", Keyword::Tran),
    ("WORK", Keyword::Work),
    ("DEFERRED", Keyword::Deferred),
    ("IMMEDIATE", Keyword::Immediate),
    ("EXCLUSIVE", Keyword::Exclusive),
    ("DISTRIBUTED", Keyword::Distributed),
    ("ISOLATION", Keyword::Isolation),
    ("READ", Keyword::Read),
    ("NOT", Keyword::Not),
    ("DEFERRABLE", Keyword::Deferrable),
];

impl Keyword {
    /// Parses a whole word into a keyword, ignoring ASCII case.
    pub(crate) fn from_word(word: &str) -> Option<Self> {
        KEYWORDS
            .iter()
            .find(|(text, _)| text.eq_ignore_ascii_case(word))
            .map(|(_, keyword)| *keyword)
    }

    /// `BEGIN <self>` starts a transaction rather than a block.
    pub(crate) fn starts_transaction(self) -> bool {
        matches!(
            self,
            Self::Transaction
                | Self::Tran
                | Self::Work
                | Self::Deferred
                | Self::Immediate
                | Self::Exclusive
                | Self::Distributed
                | Self::Isolation
                | Self::Read
        )
    }

    /// `END <self>` closes a compound statement the scanner does not track.
    pub(crate) fn closes_compound(self) -> bool {
        matches!(
            self,
            Self::If | Self::Loop | Self::While | Self::Repeat | Self::For
        )
    }
}

/// Returns true for bytes that may start an identifier.
///
/// Non-ASCII lead bytes count; callers test for whitespace first, so the
/// character they start is never a Unicode space.
pub(crate) fn is_ident_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte >= 0x80
}

/// Returns true for characters that may appear inside an identifier.
pub(crate) fn is_ident_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || (!ch.is_ascii() && !ch.is_whitespace())
}

/// The whitespace character at `offset`, if there is one.
///
/// This is the one whitespace definition the scanner uses: skipping,
/// look-ahead and statement trimming all agree on it.
pub(crate) fn whitespace_at(input: &str, offset: usize) -> Option<char> {
    input
        .get(offset..)?
        .chars()
        .next()
        .filter(|ch| ch.is_whitespace())
}

/// Returns the exclusive end of the word starting at `start`.
pub(crate) fn word_end(input: &str, start: usize) -> usize {
    let Some(rest) = input.get(start..) else {
        return start;
    };
    rest.char_indices()
        .find(|(_, ch)| !is_ident_char(*ch))
        .map_or(input.len(), |(index, _)| start + index)
}

/// Offset of the first non-whitespace character at or after `from`.
pub(crate) fn skip_whitespace(input: &str, from: usize) -> usize {
    let mut offset = from;
    while let Some(ch) = whitespace_at(input, offset) {
        offset += ch.len_utf8();
    }
    offset
}

/// Offset of the first character at or after `from` that is neither
/// whitespace nor part of a comment.
pub(crate) fn skip_trivia(input: &str, from: usize, hash_comments: bool) -> usize {
    let mut offset = skip_whitespace(input, from);
    while let Some(kind) = CommentKind::at(input, offset, hash_comments) {
        offset = skip_whitespace(input, kind.end(input, offset));
    }
    offset
}

/// The word following `from` after optional whitespace and comments, with
/// its end offset.
pub(crate) fn next_word(input: &str, from: usize, hash_comments: bool) -> Option<(&str, usize)> {
    let start = skip_trivia(input, from, hash_comments);
    let end = word_end(input, start);
    (end > start).then(|| (&input[start..end], end))
}

/// The keyword following `from` after optional whitespace and comments,
/// with its end offset.
pub(crate) fn next_keyword(
    input: &str,
    from: usize,
    hash_comments: bool,
) -> Option<(Keyword, usize)> {
    let (word, end) = next_word(input, from, hash_comments)?;
    Keyword::from_word(word).map(|keyword| (keyword, end))
}

/// Like [`next_keyword`], but only spaces and tabs may precede the keyword.
pub(crate) fn next_keyword_on_line(input: &str, from: usize) -> Option<(Keyword, usize)> {
    let bytes = input.as_bytes();
    let mut start = from;
    while start < bytes.len() && matches!(bytes[start], b' ' | b'\t') {
        start += 1;
    }
    let end = word_end(input, start);
    if end == start {
        return None;
    }
    Keyword::from_word(&input[start..end]).map(|keyword| (keyword, end))
}
