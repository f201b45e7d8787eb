use std::fmt;

use text_size::{TextRange, TextSize};

use crate::Location;

/// A half-open span of input: `end` is the first location not included.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Region<'i> {
    begin: Location<'i>,
    end: Location<'i>,
}

impl<'i> Region<'i> {
    #[track_caller]
    pub fn new(begin: Location<'i>, end: Location<'i>) -> Self {
        assert!(begin <= end, "region ends before it begins: {begin:?} > {end:?}");
        Self { begin, end }
    }

    /// A zero-width region at `at`.
    pub fn empty(at: Location<'i>) -> Self {
        Self { begin: at, end: at }
    }

    #[inline]
    pub fn begin(&self) -> Location<'i> {
        self.begin
    }

    #[inline]
    pub fn end(&self) -> Location<'i> {
        self.end
    }

    #[inline]
    pub fn len(&self) -> TextSize {
        self.end.offset() - self.begin.offset()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    pub fn range(&self) -> TextRange {
        TextRange::new(self.begin.offset(), self.end.offset())
    }

    /// The matched text.
    pub fn text(&self) -> &'i str {
        &self.begin.data()[..usize::from(self.len())]
    }

    /// The smallest region containing both `self` and `other`.
    #[must_use]
    pub fn cover(self, other: Self) -> Self {
        Self { begin: self.begin.min(other.begin), end: self.end.max(other.end) }
    }

    pub fn contains(&self, location: Location<'_>) -> bool {
        self.range().contains(location.offset())
    }
}

impl fmt::Debug for Region<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.range())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_and_range() {
        let start = Location::start("let x");
        let region = Region::new(start, start.advance_str("let"));

        assert_eq!(region.text(), "let");
        assert_eq!(region.range(), TextRange::new(0.into(), 3.into()));
        assert_eq!(region.len(), TextSize::new(3));
        assert!(!region.is_empty());
        assert!(region.contains(start.advance('l')));
        assert!(!region.contains(region.end()));
    }

    #[test]
    fn cover_spans_both() {
        let start = Location::start("a b c");
        let a = Region::new(start, start.advance('a'));
        let c_begin = start.advance_str("a b ");
        let c = Region::new(c_begin, c_begin.advance('c'));

        let both = a.cover(c);
        assert_eq!(both.text(), "a b c");
        assert_eq!(c.cover(a), both);
    }

    #[test]
    fn empty_region() {
        let at = Location::start("xy").advance('x');
        let region = Region::empty(at);
        assert!(region.is_empty());
        assert_eq!(region.text(), "");
        assert_eq!(region.range(), TextRange::empty(1.into()));
    }

    #[test]
    #[should_panic(expected = "region ends before it begins")]
    fn reversed_region_panics() {
        let start = Location::start("ab");
        let _ = Region::new(start.advance('a'), start);
    }
}
