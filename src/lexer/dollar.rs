//! Postgres dollar-quoted literals (`$tag$ ... $tag$`).
//!
//! The body is opaque: no comment, quote, or parenthesis matching happens
//! inside it. Only the identical tag closes the literal.

use crate::lexer::cursor::Cursor;
use crate::lexer::diagnostics::LexError;
use crate::lexer::keyword::{is_ident_char, word_end};

/// Returns the full `$tag$` opener at `offset`, if one starts there.
///
/// Tags follow identifier rules without `$` and may not start with a digit,
/// so `$1` positional parameters are not openers.
pub(crate) fn dollar_tag(input: &str, offset: usize) -> Option<&str> {
    let bytes = input.as_bytes();
    if bytes.get(offset) != Some(&b'$') {
        return None;
    }
    if bytes.get(offset + 1).is_some_and(u8::is_ascii_digit) {
        return None;
    }
    let end = word_end(input, offset + 1);
    (bytes.get(end) == Some(&b'$')).then(|| &input[offset..=end])
}

/// Consumes a dollar-quoted literal under the cursor.
///
/// Returns `Ok(false)` without moving when no opener starts here.
pub(crate) fn scan_dollar_quoted(cursor: &mut Cursor, input: &str) -> Result<bool, LexError> {
    let start = cursor.offset();
    if input[..start].chars().next_back().is_some_and(is_ident_char) {
        return Ok(false);
    }
    let Some(tag) = dollar_tag(input, start) else {
        return Ok(false);
    };
    let body = start + tag.len();
    match input[body..].find(tag) {
        Some(index) => {
            cursor.advance_to(body + index + tag.len(), input);
            Ok(true)
        }
        None => Err(LexError::unclosed_dollar_quote(tag, cursor.position())),
    }
}
