//! Scanner configuration flags and per-dialect presets.

use serde::{Deserialize, Serialize};

/// Dialect switches read by the scanner.
///
/// All flags default to `false`. Options are plain values; a scan never
/// mutates them, so one value can drive any number of concurrent scans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerOptions {
    /// `BEGIN ... END` nesting suppresses `;` boundaries.
    pub match_begin: bool,
    /// `BEGIN ATOMIC ... END` nesting (SQL-standard function bodies).
    pub match_begin_atomic: bool,
    /// `BEGIN TRY ... END TRY` and `BEGIN CATCH ... END CATCH` nesting.
    pub match_begin_try_catch: bool,
    /// Postgres `$tag$ ... $tag$` literals.
    pub match_dollar_quote: bool,
    /// A backslash escapes the next character inside quoted literals.
    pub backslash_escapes: bool,
    /// A doubled quote inside a literal is one literal quote.
    pub escaped_string_ext: bool,
    /// `#` starts a line comment.
    pub hash_comments: bool,
    /// A line holding only `GO` terminates the current batch.
    pub go_command: bool,
    /// The `END` that closes the outermost block terminates the statement.
    pub begin_end_terminator: bool,
}

/// SQL dialects with a known scanner preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Dialect-neutral defaults.
    Standard,
    #[serde(alias = "postgresql")]
    Postgres,
    #[serde(alias = "mariadb")]
    MySql,
    Sqlite,
    #[serde(alias = "mssql")]
    SqlServer,
}

impl ScannerOptions {
    /// Options used by [`crate::stmts`]: plain, atomic and dollar-quote matching.
    pub const fn standard() -> Self {
        Self {
            match_begin: true,
            match_begin_atomic: true,
            match_begin_try_catch: false,
            match_dollar_quote: true,
            backslash_escapes: false,
            escaped_string_ext: false,
            hash_comments: false,
            go_command: false,
            begin_end_terminator: false,
        }
    }

    /// Returns the preset for `dialect`.
    pub const fn for_dialect(dialect: Dialect) -> Self {
        let none = Self {
            match_begin: false,
            match_begin_atomic: false,
            match_begin_try_catch: false,
            match_dollar_quote: false,
            backslash_escapes: false,
            escaped_string_ext: false,
            hash_comments: false,
            go_command: false,
            begin_end_terminator: false,
        };
        match dialect {
            Dialect::Standard => Self::standard(),
            Dialect::Postgres => Self {
                match_begin: true,
                match_begin_atomic: true,
                match_dollar_quote: true,
                escaped_string_ext: true,
                ..none
            },
            Dialect::MySql => Self {
                match_begin: true,
                backslash_escapes: true,
                hash_comments: true,
                ..none
            },
            Dialect::Sqlite => Self {
                match_begin: true,
                escaped_string_ext: true,
                ..none
            },
            Dialect::SqlServer => Self {
                match_begin: true,
                match_begin_try_catch: true,
                escaped_string_ext: true,
                go_command: true,
                begin_end_terminator: true,
                ..none
            },
        }
    }

    /// Returns `true` when any `BEGIN`-family keyword opens a block.
    pub const fn matches_blocks(&self) -> bool {
        self.match_begin || self.match_begin_atomic || self.match_begin_try_catch
    }
}

impl From<Dialect> for ScannerOptions {
    fn from(dialect: Dialect) -> Self {
        Self::for_dialect(dialect)
    }
}
