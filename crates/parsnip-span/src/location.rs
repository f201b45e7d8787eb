use std::cmp::Ordering;
use std::fmt;

use text_size::TextSize;

/// A position in the input.
///
/// Lines and columns are 1-based. A line break is `'\r'`, `'\n'` or the pair
/// `"\r\n"`, which counts once even when consumed by two separate advances.
///
/// Locations only compare meaningfully when they come from the same input;
/// ordering and equality look at the offset alone.
#[derive(Clone, Copy)]
pub struct Location<'i> {
    data: &'i str,
    offset: TextSize,
    line: u32,
    column: u32,
    after_cr: bool,
}

impl<'i> Location<'i> {
    /// The location of the first element of `text`.
    pub const fn start(text: &'i str) -> Self {
        Self { data: text, offset: TextSize::new(0), line: 1, column: 1, after_cr: false }
    }

    /// Input remaining from this location on.
    #[inline]
    pub fn data(&self) -> &'i str {
        self.data
    }

    #[inline]
    pub fn offset(&self) -> TextSize {
        self.offset
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns `true` if no input is left.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.data.is_empty()
    }

    /// The next element, if any.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.data.chars().next()
    }

    /// The location after consuming `ch`, which must be the next element.
    #[must_use]
    #[inline]
    pub fn advance(self, ch: char) -> Self {
        assert!(self.data.starts_with(ch), "advanced over {ch:?} which is not next");

        let data = &self.data[ch.len_utf8()..];
        let offset = self.offset + TextSize::of(ch);

        match ch {
            '\n' if self.after_cr => Self { data, offset, after_cr: false, ..self },
            '\r' | '\n' => Self { data, offset, line: self.line + 1, column: 1, after_cr: ch == '\r' },
            _ => Self { data, offset, column: self.column + 1, after_cr: false, ..self },
        }
    }

    /// Consumes the next element, returning it with the following location.
    #[inline]
    pub fn next(self) -> Option<(char, Self)> {
        let ch = self.peek()?;
        Some((ch, self.advance(ch)))
    }

    /// The location after consuming every element of `text`, which must be a
    /// prefix of the remaining input.
    #[must_use]
    pub fn advance_str(self, text: &str) -> Self {
        text.chars().fold(self, Self::advance)
    }
}

impl PartialEq for Location<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset
    }
}

impl Eq for Location<'_> {}

impl PartialOrd for Location<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Location<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.offset.cmp(&other.offset)
    }
}

impl fmt::Debug for Location<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Location")
            .field("offset", &u32::from(self.offset))
            .field("line", &self.line)
            .field("column", &self.column)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Location<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(location: Location<'_>) -> (u32, u32, u32) {
        (location.offset().into(), location.line(), location.column())
    }

    fn walk(text: &str) -> Vec<(u32, u32, u32)> {
        let mut location = Location::start(text);
        let mut visited = vec![triple(location)];
        while let Some((_, next)) = location.next() {
            location = next;
            visited.push(triple(location));
        }
        visited
    }

    #[test]
    fn crlf_is_a_single_line_break() {
        assert_eq!(walk("a\r\nb"), [(0, 1, 1), (1, 1, 2), (2, 2, 1), (3, 2, 1), (4, 2, 2)]);
    }

    #[test]
    fn lone_breaks() {
        assert_eq!(walk("a\rb\nc"), [(0, 1, 1), (1, 1, 2), (2, 2, 1), (3, 2, 2), (4, 3, 1), (5, 3, 2)]);
    }

    #[test]
    fn reversed_pair_is_two_breaks() {
        assert_eq!(walk("\n\r"), [(0, 1, 1), (1, 2, 1), (2, 3, 1)]);
    }

    #[test]
    fn consecutive_crlf() {
        let end = Location::start("\r\n\r\n").advance_str("\r\n\r\n");
        assert_eq!(triple(end), (4, 3, 1));
    }

    #[test]
    fn empty_input() {
        let start = Location::start("");
        assert!(start.is_at_end());
        assert_eq!(start.next().map(|(ch, _)| ch), None);
        assert_eq!(triple(start), (0, 1, 1));
    }

    #[test]
    fn single_line_columns_grow() {
        let visited = walk("abcd");
        assert!(visited.iter().all(|&(_, line, _)| line == 1));
        assert_eq!(visited.iter().map(|&(_, _, column)| column).collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn multibyte_offsets_count_bytes() {
        let end = Location::start("дa").advance_str("дa");
        assert_eq!(triple(end), (3, 1, 3));
        assert_eq!(end.data(), "");
    }

    #[test]
    fn compares_by_offset() {
        let start = Location::start("ab");
        let next = start.advance('a');
        assert!(start < next);
        assert_eq!(next, Location::start("ab").advance_str("a"));
        assert_eq!(next.data(), "b");
        assert_eq!(next.to_string(), "line 1, column 2");
    }

    #[test]
    #[should_panic(expected = "advanced over 'b' which is not next")]
    fn advancing_over_the_wrong_element_panics() {
        let _ = Location::start("ab").advance('b');
    }
}
