//! Scanner profiles loaded from TOML.
//!
//! A profile names a base dialect and optionally overrides individual flags:
//!
//! ```toml
//! dialect = "mysql"
//! hash_comments = false
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::lexer::{Dialect, ScannerOptions};

/// Failure to load a scanner profile.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid scanner config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Deserializable scanner profile: a dialect preset plus flag overrides.
///
/// Unset flags fall back to the dialect preset, or to `false` when no
/// dialect is given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScannerConfig {
    pub dialect: Option<Dialect>,
    pub match_begin: Option<bool>,
    pub match_begin_atomic: Option<bool>,
    pub match_begin_try_catch: Option<bool>,
    pub match_dollar_quote: Option<bool>,
    pub backslash_escapes: Option<bool>,
    pub escaped_string_ext: Option<bool>,
    pub hash_comments: Option<bool>,
    pub go_command: Option<bool>,
    pub begin_end_terminator: Option<bool>,
}

impl ScannerConfig {
    /// Parses a profile from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Resolves the profile into concrete options.
    pub fn options(&self) -> ScannerOptions {
        let base = self
            .dialect
            .map(ScannerOptions::for_dialect)
            .unwrap_or_default();
        ScannerOptions {
            match_begin: self.match_begin.unwrap_or(base.match_begin),
            match_begin_atomic: self.match_begin_atomic.unwrap_or(base.match_begin_atomic),
            match_begin_try_catch: self
                .match_begin_try_catch
                .unwrap_or(base.match_begin_try_catch),
            match_dollar_quote: self.match_dollar_quote.unwrap_or(base.match_dollar_quote),
            backslash_escapes: self.backslash_escapes.unwrap_or(base.backslash_escapes),
            escaped_string_ext: self.escaped_string_ext.unwrap_or(base.escaped_string_ext),
            hash_comments: self.hash_comments.unwrap_or(base.hash_comments),
            go_command: self.go_command.unwrap_or(base.go_command),
            begin_end_terminator: self
                .begin_end_terminator
                .unwrap_or(base.begin_end_terminator),
        }
    }
}

impl From<Dialect> for ScannerConfig {
    fn from(dialect: Dialect) -> Self {
        Self {
            dialect: Some(dialect),
            ..Default::default()
        }
    }
}
