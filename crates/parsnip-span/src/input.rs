use text_size::{TextLen, TextSize};

use crate::{Location, Region};

/// The text under parse. The parser only ever borrows it.
#[derive(Clone, Copy, Debug)]
pub struct Input<'i> {
    text: &'i str,
}

impl<'i> Input<'i> {
    pub const fn new(text: &'i str) -> Self {
        Self { text }
    }

    #[inline]
    pub fn text(&self) -> &'i str {
        self.text
    }

    #[inline]
    pub fn len(&self) -> TextSize {
        self.text.text_len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn start(&self) -> Location<'i> {
        Location::start(self.text)
    }

    /// The region covering the whole input.
    pub fn region(&self) -> Region<'i> {
        let start = self.start();
        Region::new(start, start.advance_str(self.text))
    }
}
