//! Event-style tree construction.
//!
//! Sub-rules push their results; the enclosing rule pops the last `count`
//! of them into a new node. Backtracking truncates the stack to a length
//! recorded before the attempt.

use parsnip_span::Region;

use crate::{Node, ParseResult};

const DEFAULT_STACK_SIZE: usize = 64;

pub struct Builder<'i, T> {
    stack: Vec<ParseResult<'i, T>>,
}

impl<T> Drop for Builder<'_, T> {
    fn drop(&mut self) {
        if !std::thread::panicking() && !self.stack.is_empty() {
            panic!("you should call `Builder::finish()`");
        }
    }
}

impl<T> Default for Builder<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'i, T> Builder<'i, T> {
    pub fn new() -> Self {
        Self { stack: Vec::with_capacity(DEFAULT_STACK_SIZE) }
    }

    /// Number of results waiting for a parent.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Pushes a completed result. Failures are never pushed.
    #[track_caller]
    pub fn push(&mut self, result: ParseResult<'i, T>) {
        assert!(!result.is_failed(), "a failed match can't be pushed to the builder");
        self.stack.push(result);
    }

    /// Pops the last `count` results and makes them the children of a new
    /// node, which is pushed in their place.
    #[track_caller]
    pub fn finish_node(&mut self, region: Region<'i>, data: Option<T>, count: usize) {
        let len = self.stack.len();
        assert!(count <= len, "node claims {count} children but only {len} are available");

        let children = self.stack.split_off(len - count);
        self.stack.push(ParseResult::Success(Node::new(region, data, children)));
    }

    /// Removes every result pushed after the stack had `len` entries and
    /// hands them back, oldest first, so the caller can release them.
    #[must_use = "discarded results should be released"]
    pub fn truncate(&mut self, len: usize) -> Vec<ParseResult<'i, T>> {
        if len >= self.stack.len() {
            return Vec::new();
        }

        let discarded = self.stack.split_off(len);
        tracing::trace!(count = discarded.len(), "discarding results on backtrack");
        discarded
    }

    /// Returns the single remaining result, `None` if nothing was pushed.
    #[track_caller]
    pub fn finish(mut self) -> Option<ParseResult<'i, T>> {
        assert!(self.stack.len() <= 1, "{} results are left without a parent", self.stack.len());
        self.stack.pop()
    }
}
