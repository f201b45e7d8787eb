use std::fmt;

use indexmap::IndexSet;
use parsnip_span::Location;
use rustc_hash::FxBuildHasher;

use crate::Expected;

/// The furthest position any alternative failed at, and everything that
/// was expected there.
///
/// Failures closer to the start than the recorded position are dropped: the
/// furthest one is where the parser made the most progress, so it's the one
/// worth reporting. Expectations are kept in the order they were first
/// reported.
#[derive(Clone)]
pub struct FailInfo<'i> {
    silent: bool,
    pos: Location<'i>,
    expected: IndexSet<Expected, FxBuildHasher>,
}

impl<'i> FailInfo<'i> {
    /// A fresh aggregator for a parse starting at `start`.
    pub fn new(start: Location<'i>) -> Self {
        Self { silent: false, pos: start, expected: IndexSet::default() }
    }

    /// Records that `expected` was not found at `pos`.
    ///
    /// Has no effect when `silent` is set or the aggregator itself is silent.
    pub fn report(&mut self, pos: Location<'i>, expected: Expected, silent: bool) {
        if silent || self.silent {
            return;
        }

        if pos > self.pos {
            tracing::trace!(
                from = u32::from(self.pos.offset()),
                to = u32::from(pos.offset()),
                "furthest failure moved"
            );
            self.pos = pos;
            self.expected.clear();
            self.expected.insert(expected);
        } else if pos == self.pos {
            self.expected.insert(expected);
        }
    }

    #[inline]
    pub fn is_silent(&self) -> bool {
        self.silent
    }

    /// Switches reporting on or off, returning the previous setting so that
    /// nested predicates can restore it.
    pub fn set_silent(&mut self, silent: bool) -> bool {
        std::mem::replace(&mut self.silent, silent)
    }

    /// The furthest failure location so far.
    #[inline]
    pub fn pos(&self) -> Location<'i> {
        self.pos
    }

    pub fn expected(&self) -> impl ExactSizeIterator<Item = &Expected> + '_ {
        self.expected.iter()
    }

    pub fn expected_len(&self) -> usize {
        self.expected.len()
    }

    /// Returns `true` once anything was reported.
    pub fn has_failures(&self) -> bool {
        !self.expected.is_empty()
    }

    /// Forgets every report and starts over at `start`. The silent flag is kept.
    pub fn reset(&mut self, start: Location<'i>) {
        self.pos = start;
        self.expected.clear();
    }

    /// `expected one of ... at line L, column C`, listing at most `limit`
    /// alternatives. At least one alternative is always listed.
    pub fn message(&self, limit: Option<usize>) -> String {
        let mut message = match self.expected.len() {
            0 => "unexpected input".to_owned(),
            1 => format!("expected {}", self.expected[0]),
            _ => {
                let shown = limit.unwrap_or(usize::MAX).clamp(1, self.expected.len());
                let mut list =
                    self.expected.iter().take(shown).map(ToString::to_string).collect::<Vec<_>>();
                if shown < self.expected.len() {
                    list.push(format!("{} more", self.expected.len() - shown));
                }
                format!("expected one of {}", list.join(", "))
            }
        };

        message.push_str(&format!(" at {}", self.pos));
        message
    }
}

impl fmt::Debug for FailInfo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FailInfo")
            .field("silent", &self.silent)
            .field("pos", &self.pos)
            .field("expected", &self.expected)
            .finish()
    }
}
