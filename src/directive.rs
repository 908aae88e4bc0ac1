//! Directives embedded in statement comments.
//!
//! A directive is `atlas:<name>` optionally followed by a space and a
//! free-form argument, e.g. `-- atlas:nolint destructive`. Line comments
//! (`--`, `#`) allow spaces between the marker and `atlas:`; block comments
//! must be single-line and start with `/*atlas:` exactly, so
//! `/* atlas:lint x */` stays an ordinary comment.

use std::collections::BTreeMap;

const DIRECTIVE_PREFIX: &str = "atlas:";

/// One directive parsed from a comment; borrows the comment text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive<'c> {
    /// Directive name, e.g. `nolint`.
    pub name: &'c str,
    /// Trimmed argument; empty when the directive has none.
    pub argument: &'c str,
}

impl<'c> Directive<'c> {
    /// Parses a verbatim comment (delimiters included) into a directive.
    pub fn parse(comment: &'c str) -> Option<Self> {
        if let Some(body) = comment.strip_prefix("/*") {
            if comment.contains('\n') {
                return None;
            }
            let body = body.strip_suffix("*/").unwrap_or(body);
            return Self::parse_body(body);
        }
        let body = comment
            .strip_prefix("--")
            .or_else(|| comment.strip_prefix('#'))?;
        Self::parse_body(body.trim_start_matches(' '))
    }

    fn parse_body(body: &'c str) -> Option<Self> {
        let rest = body.strip_prefix(DIRECTIVE_PREFIX)?;
        let name_len = rest
            .bytes()
            .take_while(|byte| byte.is_ascii_alphanumeric() || *byte == b'_')
            .count();
        if name_len == 0 {
            return None;
        }
        let (name, tail) = rest.split_at(name_len);
        let argument = if tail.starts_with(' ') { tail.trim() } else { "" };
        Some(Self { name, argument })
    }
}

/// Arguments of every directive called `name`, in comment order.
pub fn extract<'c, S>(comments: &'c [S], name: &str) -> Vec<&'c str>
where
    S: AsRef<str>,
{
    comments
        .iter()
        .filter_map(|comment| Directive::parse(comment.as_ref()))
        .filter(|directive| directive.name == name)
        .map(|directive| directive.argument)
        .collect()
}

/// All directives in `comments`, grouped by name.
pub fn group<S>(comments: &[S]) -> BTreeMap<&str, Vec<&str>>
where
    S: AsRef<str>,
{
    let mut grouped: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for directive in comments
        .iter()
        .filter_map(|comment| Directive::parse(comment.as_ref()))
    {
        grouped
            .entry(directive.name)
            .or_default()
            .push(directive.argument);
    }
    grouped
}
