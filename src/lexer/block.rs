//! Keyword-triggered block nesting.
//!
//! While any block is open, `;` does not end the statement. The stack holds
//! one frame per open `BEGIN`-family block plus one per `CASE` seen inside a
//! block, so a `CASE ... END` expression never closes its enclosing block.

use tracing::trace;

use crate::lexer::keyword::{self, Keyword};
use crate::lexer::options::ScannerOptions;

/// Kinds of nesting frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BlockKind {
    /// `BEGIN ... END`
    Begin,
    /// `BEGIN ATOMIC ... END`
    Atomic,
    /// `BEGIN TRY ... END TRY`
    Try,
    /// `BEGIN CATCH ... END CATCH`
    Catch,
    /// `CASE ... END` inside a block.
    Case,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenBlock {
    kind: BlockKind,
    start: usize,
}

/// Effect of one keyword on the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct KeywordOutcome {
    /// Offset where scanning resumes; past any follower keyword that was
    /// consumed with the trigger (`ATOMIC`, `TRY`, `CATCH`, `CASE`).
    pub(crate) resume: usize,
    /// Block closed by this keyword, if any.
    pub(crate) closed: Option<BlockKind>,
}

impl KeywordOutcome {
    fn unchanged(resume: usize) -> Self {
        Self {
            resume,
            closed: None,
        }
    }
}

/// Explicit stack of open blocks, owned by one statement scan.
#[derive(Debug, Default, Clone)]
pub(crate) struct BlockStack {
    open: Vec<OpenBlock>,
}

impl BlockStack {
    pub(crate) fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub(crate) fn depth(&self) -> usize {
        self.open.len()
    }

    pub(crate) fn clear(&mut self) {
        self.open.clear();
    }

    /// Applies `keyword`, found at `[start, end)`, to the stack.
    pub(crate) fn observe(
        &mut self,
        keyword: Keyword,
        input: &str,
        start: usize,
        end: usize,
        options: &ScannerOptions,
    ) -> KeywordOutcome {
        match keyword {
            Keyword::Begin => self.observe_begin(input, start, end, options),
            Keyword::End => self.observe_end(input, end),
            Keyword::Case if !self.is_empty() => {
                self.push(BlockKind::Case, start);
                KeywordOutcome::unchanged(end)
            }
            _ => KeywordOutcome::unchanged(end),
        }
    }

    fn observe_begin(
        &mut self,
        input: &str,
        start: usize,
        end: usize,
        options: &ScannerOptions,
    ) -> KeywordOutcome {
        let hash_comments = options.hash_comments;
        let follower = keyword::next_keyword(input, end, hash_comments);
        let (kind, resume) = match follower {
            Some((Keyword::Try, after)) if options.match_begin_try_catch => (BlockKind::Try, after),
            Some((Keyword::Catch, after)) if options.match_begin_try_catch => {
                (BlockKind::Catch, after)
            }
            Some((Keyword::Atomic, after)) if options.match_begin_atomic => {
                (BlockKind::Atomic, after)
            }
            _ if !options.match_begin => return KeywordOutcome::unchanged(end),
            Some((Keyword::Not, after)) => {
                match keyword::next_keyword(input, after, hash_comments) {
                    Some((Keyword::Deferrable, _)) => return KeywordOutcome::unchanged(end),
                    // MariaDB `BEGIN NOT ATOMIC` is a plain compound block.
                    Some((Keyword::Atomic, after)) => (BlockKind::Begin, after),
                    _ => (BlockKind::Begin, end),
                }
            }
            Some((follower, _)) if follower.starts_transaction() => {
                return KeywordOutcome::unchanged(end);
            }
            _ if ends_bare(input, end, hash_comments) => return KeywordOutcome::unchanged(end),
            _ => (BlockKind::Begin, end),
        };
        self.push(kind, start);
        KeywordOutcome::unchanged(resume)
    }

    fn observe_end(&mut self, input: &str, end: usize) -> KeywordOutcome {
        let Some(top) = self.open.last().map(|block| block.kind) else {
            return KeywordOutcome::unchanged(end);
        };
        let follower = keyword::next_keyword_on_line(input, end);
        let resume = match (top, follower) {
            (BlockKind::Case, Some((Keyword::Case, after))) => after,
            (BlockKind::Case, _) => end,
            (BlockKind::Try, Some((Keyword::Try, after))) => after,
            (BlockKind::Catch, Some((Keyword::Catch, after))) => after,
            // A bare `END` inside TRY/CATCH belongs to something untracked.
            (BlockKind::Try | BlockKind::Catch, _) => return KeywordOutcome::unchanged(end),
            (_, Some((follower, _))) if follower.closes_compound() || follower == Keyword::Case => {
                return KeywordOutcome::unchanged(end);
            }
            _ => end,
        };
        let closed = self.pop();
        KeywordOutcome { resume, closed }
    }

    fn push(&mut self, kind: BlockKind, start: usize) {
        self.open.push(OpenBlock {
            kind,
            start,
        });
        trace!(?kind, start, depth = self.open.len(), "block opened");
    }

    fn pop(&mut self) -> Option<BlockKind> {
        let block = self.open.pop()?;
        trace!(
            kind = ?block.kind,
            start = block.start,
            depth = self.open.len(),
            "block closed"
        );
        Some(block.kind)
    }
}

/// `BEGIN` followed by `;` or end of input, with only whitespace and
/// comments between, is a transaction start.
fn ends_bare(input: &str, end: usize, hash_comments: bool) -> bool {
    let next = keyword::skip_trivia(input, end, hash_comments);
    matches!(input.as_bytes().get(next), None | Some(b';'))
}
