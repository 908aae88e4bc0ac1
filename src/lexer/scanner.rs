//! Single-pass statement scanner.
//!
//! Dispatch order at each position outside a literal or comment:
//! `GO` batch line, whitespace, `DELIMITER` command, active delimiter,
//! comment opener, then (once the statement has started) quotes,
//! dollar-quotes, parentheses and keywords.

use tracing::trace;

use crate::lexer::block::{BlockKind, BlockStack};
use crate::lexer::comment::{CommentKind, PendingComments};
use crate::lexer::cursor::Cursor;
use crate::lexer::delimiter::{self, DEFAULT_DELIMITER, DelimiterChange};
use crate::lexer::diagnostics::LexError;
use crate::lexer::dollar;
use crate::lexer::keyword::{self, Keyword};
use crate::lexer::options::ScannerOptions;
use crate::lexer::paren::ParenStack;
use crate::lexer::quote::{self, EscapePolicy};
use crate::statement::Statement;

/// Scan state for one input. Nothing here outlives [`StatementScanner::run`].
pub(crate) struct StatementScanner<'a> {
    input: &'a str,
    options: &'a ScannerOptions,
    policy: EscapePolicy,
    cursor: Cursor,
    delimiter: &'a str,
    pending: PendingComments,
    statements: Vec<Statement>,
    // Current statement.
    start: Option<usize>,
    comments: Vec<String>,
    parens: ParenStack,
    blocks: BlockStack,
}

impl<'a> StatementScanner<'a> {
    pub(crate) fn new(input: &'a str, options: &'a ScannerOptions) -> Self {
        Self {
            input,
            options,
            policy: EscapePolicy::from_options(options),
            cursor: Cursor::new(),
            delimiter: DEFAULT_DELIMITER,
            pending: PendingComments::default(),
            statements: Vec::new(),
            start: None,
            comments: Vec::new(),
            parens: ParenStack::default(),
            blocks: BlockStack::default(),
        }
    }

    /// Scans the whole input, failing on the first lexical error.
    pub(crate) fn run(mut self) -> Result<Vec<Statement>, LexError> {
        if let Some(change) = delimiter::file_directive(self.input) {
            self.change_delimiter(change);
        }

        while let Some(byte) = self.cursor.peek_byte(self.input) {
            let at = self.cursor.offset();

            if self.options.go_command && self.at_line_start() {
                if let Some(line_end) = go_line_end(self.input, at) {
                    self.finish_batch(at, line_end)?;
                    continue;
                }
            }

            if let Some(space) = keyword::whitespace_at(self.input, at) {
                self.cursor.advance_to(at + space.len_utf8(), self.input);
                if space == '\n' && self.start.is_none() {
                    self.pending.newline();
                }
                continue;
            }

            if self.start.is_none() {
                if let Some(change) = delimiter::command_at(self.input, at) {
                    self.pending.clear();
                    self.change_delimiter(change);
                    continue;
                }
            }

            if self.at_delimiter() {
                self.terminate(at);
                continue;
            }

            if let Some(kind) = CommentKind::at(self.input, at, self.options.hash_comments) {
                let end = kind.end(self.input, at);
                if self.start.is_none() {
                    self.pending.push(&self.input[at..end]);
                }
                self.cursor.advance_to(end, self.input);
                continue;
            }

            if self.start.is_none() {
                self.start = Some(at);
                self.comments = self.pending.take();
            }

            match byte {
                b'\'' | b'"' => quote::scan_quoted(&mut self.cursor, self.input, self.policy)?,
                b'$' if self.options.match_dollar_quote => {
                    if !dollar::scan_dollar_quoted(&mut self.cursor, self.input)? {
                        let _ = self.cursor.advance_byte(self.input);
                    }
                }
                b'(' => {
                    self.parens.push(self.cursor.position());
                    let _ = self.cursor.advance_byte(self.input);
                }
                b')' => {
                    self.parens.pop(self.cursor.position())?;
                    let _ = self.cursor.advance_byte(self.input);
                }
                _ if keyword::is_ident_byte(byte) => self.scan_word(at)?,
                _ => {
                    let _ = self.cursor.advance_byte(self.input);
                }
            }
        }

        self.parens.ensure_closed()?;
        if self.start.is_some() {
            self.emit(self.input.len());
        }
        Ok(self.statements)
    }

    fn at_line_start(&self) -> bool {
        matches!(self.cursor.prev_byte(self.input), None | Some(b'\n'))
    }

    fn has_custom_delimiter(&self) -> bool {
        self.delimiter != DEFAULT_DELIMITER
    }

    /// The active delimiter is under the cursor and may end the statement.
    fn at_delimiter(&self) -> bool {
        self.cursor.rest(self.input).starts_with(self.delimiter)
            && self.parens.is_empty()
            && (self.has_custom_delimiter() || self.blocks.is_empty())
    }

    fn change_delimiter(&mut self, change: DelimiterChange<'a>) {
        trace!(delimiter = change.delimiter, "delimiter changed");
        self.delimiter = change.delimiter;
        self.cursor.advance_to(change.end, self.input);
    }

    /// Consumes the delimiter at `at` and emits the statement it ends.
    ///
    /// A custom delimiter is not part of the statement text.
    fn terminate(&mut self, at: usize) {
        let end = at + self.delimiter.len();
        let text_end = if self.has_custom_delimiter() { at } else { end };
        self.cursor.advance_to(end, self.input);
        self.emit(text_end);
    }

    /// Handles a `GO` line: the batch ends regardless of block nesting.
    fn finish_batch(&mut self, at: usize, line_end: usize) -> Result<(), LexError> {
        self.parens.ensure_closed()?;
        self.emit(at);
        self.cursor.advance_to(line_end, self.input);
        Ok(())
    }

    /// Consumes the word at `at`, applying block nesting when it is a keyword.
    fn scan_word(&mut self, at: usize) -> Result<(), LexError> {
        let end = keyword::word_end(self.input, at);
        let word = &self.input[at..end];
        let qualified = self.cursor.prev_byte(self.input) == Some(b'.');

        // Postgres escape string: E'...' honors backslashes.
        if self.policy == EscapePolicy::Doubled
            && word.eq_ignore_ascii_case("e")
            && self.input.as_bytes().get(end) == Some(&b'\'')
        {
            self.cursor.advance_to(end, self.input);
            return quote::scan_quoted(&mut self.cursor, self.input, EscapePolicy::Backslash);
        }

        self.cursor.advance_to(end, self.input);
        if qualified
            || !self.parens.is_empty()
            || self.has_custom_delimiter()
            || !self.options.matches_blocks()
        {
            return Ok(());
        }
        let Some(keyword) = Keyword::from_word(word) else {
            return Ok(());
        };

        let outcome = self
            .blocks
            .observe(keyword, self.input, at, end, self.options);
        self.cursor.advance_to(outcome.resume, self.input);

        if let Some(closed) = outcome.closed {
            if self.ends_at_block_close(closed, outcome.resume) {
                let end = absorb_semicolon(self.input, outcome.resume, self.options.hash_comments);
                self.cursor.advance_to(end, self.input);
                self.emit(end);
            }
        }
        Ok(())
    }

    /// Under `begin_end_terminator`, closing the outermost block ends the
    /// statement unless a TRY/ELSE continuation follows.
    fn ends_at_block_close(&self, closed: BlockKind, resume: usize) -> bool {
        self.options.begin_end_terminator
            && self.blocks.is_empty()
            && closed != BlockKind::Try
            && !matches!(
                keyword::next_keyword(self.input, resume, self.options.hash_comments),
                Some((Keyword::Else, _))
            )
    }

    /// Pushes the current statement, if any, with text ending at `text_end`,
    /// and resets per-statement state. A statement with no text is dropped
    /// along with its comments.
    fn emit(&mut self, text_end: usize) {
        let input = self.input;
        let text = self
            .start
            .take()
            .map(|start| (start, input[start..text_end].trim_end()));
        match text {
            Some((start, text)) if !text.is_empty() => {
                trace!(pos = start, depth = self.blocks.depth(), "statement emitted");
                self.statements.push(Statement::new(
                    start,
                    text,
                    std::mem::take(&mut self.comments),
                ));
            }
            _ => {
                self.comments.clear();
                self.pending.clear();
            }
        }
        self.parens.clear();
        self.blocks.clear();
    }
}

/// End of a line at `start` whose only content is `GO`, past its newline.
fn go_line_end(input: &str, start: usize) -> Option<usize> {
    let rest = &input[start..];
    let (line, end) = match rest.find('\n') {
        Some(index) => (&rest[..index], start + index + 1),
        None => (rest, input.len()),
    };
    line.trim().eq_ignore_ascii_case("go").then_some(end)
}

/// Extends `end` over whitespace, comments and one `;`, when a `;` follows.
fn absorb_semicolon(input: &str, end: usize, hash_comments: bool) -> usize {
    let next = keyword::skip_trivia(input, end, hash_comments);
    if input.as_bytes().get(next) == Some(&b';') {
        next + 1
    } else {
        end
    }
}
