/// Knobs for a [`Context`](crate::Context).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Start with failure reporting switched off.
    pub silent: bool,
    /// Show at most this many alternatives in a [`ParseError`] message. The
    /// collected set itself is never truncated.
    ///
    /// [`ParseError`]: parsnip_errors::ParseError
    pub max_expected: Option<usize>,
}
