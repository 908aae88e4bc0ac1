//! Custom statement delimiters.
//!
//! Two sources can replace `;`: a MySQL-client `DELIMITER <token>` line at
//! the start of a statement, and a `-- atlas:delimiter <token>` directive on
//! the first line of the input.

use crate::directive::Directive;
use crate::lexer::keyword;

pub(crate) const DEFAULT_DELIMITER: &str = ";";

const DELIMITER_COMMAND: &str = "delimiter";

/// A recognized delimiter change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DelimiterChange<'a> {
    /// New delimiter text.
    pub(crate) delimiter: &'a str,
    /// Offset just past the line that declared it.
    pub(crate) end: usize,
}

/// Recognizes `DELIMITER <token>` at `start`.
pub(crate) fn command_at(input: &str, start: usize) -> Option<DelimiterChange<'_>> {
    let word_end = keyword::word_end(input, start);
    if !input[start..word_end].eq_ignore_ascii_case(DELIMITER_COMMAND) {
        return None;
    }
    let (line, end) = line_from(input, word_end);
    if !line.starts_with([' ', '\t']) {
        return None;
    }
    let delimiter = line.split_whitespace().next()?;
    Some(DelimiterChange { delimiter, end })
}

/// Recognizes a `-- atlas:delimiter <token>` directive on the first line.
pub(crate) fn file_directive(input: &str) -> Option<DelimiterChange<'_>> {
    let (line, end) = line_from(input, 0);
    let directive = Directive::parse(line).filter(|directive| directive.name == DELIMITER_COMMAND)?;
    if directive.argument.is_empty() || !line.starts_with("--") {
        return None;
    }
    Some(DelimiterChange {
        delimiter: directive.argument,
        end,
    })
}

/// Returns the rest of the line at `from` (without the newline) and the
/// offset just past the newline.
fn line_from(input: &str, from: usize) -> (&str, usize) {
    match input[from..].find('\n') {
        Some(index) => (&input[from..from + index], from + index + 1),
        None => (&input[from..], input.len()),
    }
}
