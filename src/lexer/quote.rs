//! Quoted-literal matching under the configured escaping policy.

use crate::lexer::cursor::Cursor;
use crate::lexer::diagnostics::LexError;
use crate::lexer::options::ScannerOptions;
use crate::lexer::span::Position;

/// How a quote character may appear inside its own literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EscapePolicy {
    /// Any occurrence of the quote closes the literal.
    Verbatim,
    /// `\x` is always literal, including `\'`.
    Backslash,
    /// `''` inside `'...'` is one literal quote.
    Doubled,
}

impl EscapePolicy {
    /// Selects the single active policy; backslash escapes win.
    pub(crate) fn from_options(options: &ScannerOptions) -> Self {
        if options.backslash_escapes {
            Self::Backslash
        } else if options.escaped_string_ext {
            Self::Doubled
        } else {
            Self::Verbatim
        }
    }
}

/// Metadata for an open quote region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OpenQuote {
    pub(crate) quote: u8,
    pub(crate) start: Position,
}

/// Consumes the literal whose opening quote is under the cursor.
///
/// On success the cursor sits just past the closing quote.
pub(crate) fn scan_quoted(
    cursor: &mut Cursor,
    input: &str,
    policy: EscapePolicy,
) -> Result<(), LexError> {
    let start = cursor.position();
    let Some(quote) = cursor.advance_byte(input) else {
        return Ok(());
    };
    let open = OpenQuote { quote, start };

    loop {
        match cursor.advance_byte(input) {
            None => return Err(unterminated_quote_error(open)),
            Some(b'\\') if policy == EscapePolicy::Backslash => {
                if cursor.advance_byte(input).is_none() {
                    return Err(unterminated_quote_error(open));
                }
            }
            Some(byte) if byte == quote => {
                if policy == EscapePolicy::Doubled && cursor.peek_byte(input) == Some(quote) {
                    let _ = cursor.advance_byte(input);
                    continue;
                }
                return Ok(());
            }
            Some(_) => {}
        }
    }
}

/// Builds a fatal lexer error for an unterminated quote.
pub(crate) fn unterminated_quote_error(open: OpenQuote) -> LexError {
    LexError::unclosed_quote(char::from(open.quote), open.start)
}
