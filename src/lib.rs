//! Library entrypoint for `sqlscan`.
//!
//! Splits SQL scripts into statements, keeping each statement's position and
//! the comments (and `atlas:` directives) written directly above it.
//!
//! ```
//! let statements = sqlscan::stmts("-- atlas:nolint\nDROP TABLE t;\nSELECT 1;").unwrap();
//! assert_eq!(statements.len(), 2);
//! assert_eq!(statements[0].text, "DROP TABLE t;");
//! assert_eq!(statements[0].directive("nolint"), vec![String::new()]);
//! ```

pub mod config;
pub mod directive;
pub mod lexer;
pub mod statement;

pub use config::{ConfigError, ScannerConfig};
pub use directive::Directive;
pub use lexer::{Dialect, LexError, LexErrorKind, Scanner, ScannerOptions};
pub use statement::Statement;

/// Scans `input` with explicit options.
pub fn scan(input: &str, options: ScannerOptions) -> Result<Vec<Statement>, LexError> {
    Scanner::new(options).scan(input)
}

/// Scans `input` with [`ScannerOptions::standard`].
pub fn stmts(input: &str) -> Result<Vec<Statement>, LexError> {
    scan(input, ScannerOptions::standard())
}
