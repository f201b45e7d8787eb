use std::borrow::Cow;

use drop_bomb::DropBomb;
use parsnip_errors::{Expected, FailInfo, ParseError};
use parsnip_span::{Input, Location, Region};
use parsnip_tree::{Cleanup, Node, ParseResult};

use crate::Options;

/// Everything a single top-level parse owns.
pub struct Context<'i, T> {
    input: Input<'i>,
    current: Location<'i>,
    fail_info: FailInfo<'i>,
    options: Options,
    cleanup: Option<Box<Cleanup<'i, 'i, T>>>,
}

impl<'i, T> Context<'i, T> {
    pub fn new(text: &'i str) -> Self {
        Self::with_options(text, Options::default())
    }

    pub fn with_options(text: &'i str, options: Options) -> Self {
        let input = Input::new(text);
        let mut fail_info = FailInfo::new(input.start());
        fail_info.set_silent(options.silent);

        tracing::debug!(len = u32::from(input.len()), ?options, "parse context created");
        Self { input, current: input.start(), fail_info, options, cleanup: None }
    }

    /// Installs the callback that receives node payloads when results are
    /// released through [`free_result`](Self::free_result).
    pub fn set_cleanup(&mut self, cleanup: impl FnMut(Option<T>, &[ParseResult<'i, T>]) + 'i) {
        self.cleanup = Some(Box::new(cleanup));
    }

    #[inline]
    pub fn input(&self) -> Input<'i> {
        self.input
    }

    #[inline]
    pub fn current(&self) -> Location<'i> {
        self.current
    }

    #[inline]
    pub fn fail_info(&self) -> &FailInfo<'i> {
        &self.fail_info
    }

    pub fn options(&self) -> Options {
        self.options
    }

    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.current.peek()
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current.is_at_end()
    }

    /// Consumes one element without building anything.
    pub fn advance(&mut self) -> Option<char> {
        let (ch, next) = self.current.next()?;
        self.current = next;
        Some(ch)
    }

    /// Remembers the current location. The checkpoint must be handed back to
    /// either [`rewind`](Self::rewind) or [`commit`](Self::commit).
    pub fn checkpoint(&self) -> Checkpoint<'i> {
        Checkpoint::new(self.current)
    }

    /// Backtracks to `checkpoint`.
    pub fn rewind(&mut self, mut checkpoint: Checkpoint<'i>) {
        checkpoint.bomb.defuse();
        self.current = checkpoint.location;
    }

    /// Keeps everything consumed since `checkpoint`.
    pub fn commit(&mut self, mut checkpoint: Checkpoint<'i>) {
        checkpoint.bomb.defuse();
        debug_assert!(checkpoint.location <= self.current, "committed a checkpoint from the future");
    }

    /// Reports `expected` at the current location and returns a failure.
    pub fn fail(&mut self, expected: Expected) -> ParseResult<'i, T> {
        self.fail_info.report(self.current, expected, false);
        ParseResult::FAILED
    }

    /// Matches any single element.
    pub fn any(&mut self) -> ParseResult<'i, T> {
        match self.current.next() {
            Some((_, next)) => self.accept(next),
            None => self.fail(Expected::Any),
        }
    }

    /// Matches `text` exactly.
    pub fn literal(&mut self, text: &'static str) -> ParseResult<'i, T> {
        if self.current.data().starts_with(text) {
            let next = self.current.advance_str(text);
            self.accept(next)
        } else {
            self.fail(Expected::literal(text))
        }
    }

    /// Matches one element accepted by `predicate`. `description` is what
    /// gets reported on failure, usually the class as written in the grammar.
    pub fn class(
        &mut self,
        description: &'static str,
        predicate: impl Fn(char) -> bool,
    ) -> ParseResult<'i, T> {
        match self.current.next() {
            Some((ch, next)) if predicate(ch) => self.accept(next),
            _ => self.fail(Expected::class(description)),
        }
    }

    /// Succeeds with nil at the end of input.
    pub fn eof(&mut self) -> ParseResult<'i, T> {
        if self.current.is_at_end() { ParseResult::NIL } else { self.fail(Expected::Eof) }
    }

    /// Runs `rule`, restoring the location if it fails.
    pub fn attempt(
        &mut self,
        rule: impl FnOnce(&mut Self) -> ParseResult<'i, T>,
    ) -> ParseResult<'i, T> {
        let checkpoint = self.checkpoint();
        let result = rule(self);
        if result.is_failed() {
            self.rewind(checkpoint);
        } else {
            self.commit(checkpoint);
        }
        result
    }

    /// Runs `rule` with failure reporting switched off.
    pub fn silently<R>(&mut self, rule: impl FnOnce(&mut Self) -> R) -> R {
        let previous = self.fail_info.set_silent(true);
        let result = rule(self);
        self.fail_info.set_silent(previous);
        result
    }

    /// Runs `rule`, replacing whatever it would have reported with a single
    /// `message` at the location it started from.
    pub fn expect(
        &mut self,
        message: impl Into<Cow<'static, str>>,
        rule: impl FnOnce(&mut Self) -> ParseResult<'i, T>,
    ) -> ParseResult<'i, T> {
        let begin = self.current;
        let result = self.silently(|ctx| ctx.attempt(rule));
        if result.is_failed() {
            self.fail_info.report(begin, Expected::user(message), false);
        }
        result
    }

    /// `rule?`: nil when `rule` does not match.
    pub fn optional(
        &mut self,
        rule: impl FnOnce(&mut Self) -> ParseResult<'i, T>,
    ) -> ParseResult<'i, T> {
        match self.attempt(rule) {
            ParseResult::Failed => ParseResult::NIL,
            result => result,
        }
    }

    /// `&rule`: matches where `rule` does, without consuming input.
    ///
    /// `rule` runs silently, like in [`not_predicate`](Self::not_predicate).
    pub fn and_predicate(
        &mut self,
        rule: impl FnOnce(&mut Self) -> ParseResult<'i, T>,
    ) -> ParseResult<'i, T> {
        let checkpoint = self.checkpoint();
        let result = self.silently(rule);
        self.rewind(checkpoint);

        if result.is_failed() {
            return ParseResult::FAILED;
        }
        self.free_result(result);
        ParseResult::NIL
    }

    /// `!rule`: matches where `rule` does not, without consuming input.
    ///
    /// `rule` runs silently: its failures are the expected outcome here.
    pub fn not_predicate(
        &mut self,
        rule: impl FnOnce(&mut Self) -> ParseResult<'i, T>,
    ) -> ParseResult<'i, T> {
        let checkpoint = self.checkpoint();
        let result = self.silently(rule);
        self.rewind(checkpoint);

        if result.is_failed() {
            return ParseResult::NIL;
        }
        self.free_result(result);
        ParseResult::FAILED
    }

    /// A node spanning from `begin` to the current location.
    #[track_caller]
    pub fn node(
        &self,
        begin: Location<'i>,
        data: Option<T>,
        children: Vec<ParseResult<'i, T>>,
    ) -> ParseResult<'i, T> {
        ParseResult::Success(Node::new(Region::new(begin, self.current), data, children))
    }

    /// Releases `result`, running the installed cleanup on every payload.
    pub fn free_result(&mut self, result: ParseResult<'i, T>) {
        match &mut self.cleanup {
            Some(cleanup) => result.release_with(&mut **cleanup),
            None => drop(result),
        }
    }

    /// Removes the installed cleanup so that the tree returned by
    /// [`finish`](Self::finish) can still be released with it.
    pub fn take_cleanup(&mut self) -> Option<Box<Cleanup<'i, 'i, T>>> {
        self.cleanup.take()
    }

    pub fn free_results(&mut self, results: impl IntoIterator<Item = ParseResult<'i, T>>) {
        for result in results {
            self.free_result(result);
        }
    }

    /// Starts a new top-level attempt from the beginning of the input.
    pub fn reset(&mut self) {
        self.current = self.input.start();
        self.fail_info.reset(self.current);
    }

    /// Ends the parse. A match with no node yields `Ok(None)`.
    pub fn finish(self, result: ParseResult<'i, T>) -> Result<Option<Node<'i, T>>, ParseError> {
        match result {
            ParseResult::Success(node) => {
                tracing::debug!(consumed = u32::from(self.current.offset()), "parse succeeded");
                Ok(Some(node))
            }
            ParseResult::Nil => {
                tracing::debug!(consumed = u32::from(self.current.offset()), "parse matched nothing");
                Ok(None)
            }
            ParseResult::Failed => {
                let error = ParseError::new(&self.fail_info, self.options.max_expected);
                tracing::debug!(%error, "parse failed");
                Err(error)
            }
        }
    }

    fn accept(&mut self, next: Location<'i>) -> ParseResult<'i, T> {
        let begin = std::mem::replace(&mut self.current, next);
        ParseResult::Success(Node::leaf(Region::new(begin, next), None))
    }
}

/// A location to come back to when an alternative fails.
pub struct Checkpoint<'i> {
    location: Location<'i>,
    bomb: DropBomb,
}

impl<'i> Checkpoint<'i> {
    fn new(location: Location<'i>) -> Self {
        Self { location, bomb: DropBomb::new("Checkpoint must be either rewound or committed") }
    }

    pub fn location(&self) -> Location<'i> {
        self.location
    }
}
