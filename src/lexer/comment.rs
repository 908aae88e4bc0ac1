//! Comment recognition and the pending-comment accumulator.

/// Comment syntaxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CommentKind {
    /// `-- ...` to end of line.
    Dash,
    /// `# ...` to end of line.
    Hash,
    /// `/* ... */`, non-nesting.
    Block,
}

impl CommentKind {
    /// Detects a comment opener at `offset`.
    pub(crate) fn at(input: &str, offset: usize, hash_comments: bool) -> Option<Self> {
        let tail = input.as_bytes().get(offset..)?;
        match tail {
            [b'-', b'-', ..] => Some(Self::Dash),
            [b'/', b'*', ..] => Some(Self::Block),
            [b'#', ..] if hash_comments => Some(Self::Hash),
            _ => None,
        }
    }

    /// Exclusive end of the comment starting at `start`.
    ///
    /// Line comments include their newline. An unterminated block comment
    /// runs to end of input.
    pub(crate) fn end(self, input: &str, start: usize) -> usize {
        match self {
            Self::Dash | Self::Hash => input[start..]
                .find('\n')
                .map_or(input.len(), |index| start + index + 1),
            Self::Block => input[start + 2..]
                .find("*/")
                .map_or(input.len(), |index| start + 2 + index + 2),
        }
    }
}

/// Comments seen since the last statement, waiting for the next one.
///
/// A blank line drops everything accumulated so far. The newline that ends a
/// line comment counts toward the blank line, so `"-- a\n\n"` clears `-- a`.
#[derive(Debug, Default, Clone)]
pub(crate) struct PendingComments {
    comments: Vec<String>,
    after_newline: bool,
}

impl PendingComments {
    pub(crate) fn push(&mut self, text: &str) {
        self.comments.push(text.to_string());
        self.after_newline = text.ends_with('\n');
    }

    /// Records a newline outside any comment.
    pub(crate) fn newline(&mut self) {
        if self.after_newline {
            self.comments.clear();
        }
        self.after_newline = true;
    }

    /// Hands the accumulated run to a statement.
    pub(crate) fn take(&mut self) -> Vec<String> {
        self.after_newline = false;
        std::mem::take(&mut self.comments)
    }

    /// Drops the accumulated run without attaching it.
    pub(crate) fn clear(&mut self) {
        self.comments.clear();
        self.after_newline = false;
    }
}
