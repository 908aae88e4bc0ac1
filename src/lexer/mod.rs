//! Statement-level SQL lexer.
//!
//! The scanner makes one left-to-right pass over a script and cuts it into
//! [`Statement`]s. It understands just enough lexical structure to find
//! statement boundaries reliably: quoted literals under the configured
//! escaping policy, Postgres dollar-quotes, line and block comments,
//! parenthesis balance, `BEGIN`-family block nesting, SQL Server `GO`
//! batches and MySQL `DELIMITER` commands. It never parses SQL grammar.

pub mod diagnostics;
pub mod options;
pub mod span;

mod block;
mod comment;
mod cursor;
mod delimiter;
mod dollar;
mod keyword;
mod paren;
mod quote;
mod scanner;

use tracing::debug;

use crate::lexer::scanner::StatementScanner;
use crate::statement::Statement;

pub use diagnostics::{LexError, LexErrorKind};
pub use options::{Dialect, ScannerOptions};
pub use span::{ByteOffset, Position, Span, locate};

/// Statement scanner configured for one dialect.
///
/// A `Scanner` holds only its options; every call to [`Scanner::scan`] starts
/// from fresh state, so a single value can be shared across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scanner {
    options: ScannerOptions,
}

impl Scanner {
    /// Creates a scanner with explicit options.
    pub fn new(options: ScannerOptions) -> Self {
        Self { options }
    }

    /// Creates a scanner with the preset for `dialect`.
    pub fn for_dialect(dialect: Dialect) -> Self {
        Self::new(ScannerOptions::for_dialect(dialect))
    }

    /// Returns the configured options.
    pub fn options(&self) -> &ScannerOptions {
        &self.options
    }

    /// Splits `input` into statements.
    ///
    /// Returns the first lexical error in source order instead of any
    /// statements when the input has an unterminated literal or unbalanced
    /// parentheses.
    pub fn scan(&self, input: &str) -> Result<Vec<Statement>, LexError> {
        match StatementScanner::new(input, &self.options).run() {
            Ok(statements) => {
                debug!(statements = statements.len(), bytes = input.len(), "scan complete");
                Ok(statements)
            }
            Err(error) => {
                debug!(%error, "scan failed");
                Err(error)
            }
        }
    }
}

impl From<ScannerOptions> for Scanner {
    fn from(options: ScannerOptions) -> Self {
        Self::new(options)
    }
}
