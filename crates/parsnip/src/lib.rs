//! Runtime support for parsers generated from PEG grammars.
//!
//! Generated code depends on this crate alone. It drives a [`Context`],
//! combines [`ParseResult`]s into a tree of [`Node`]s and, when the top-level
//! rule fails, turns the collected [`FailInfo`] into a [`ParseError`].

pub use parsnip_errors::{Expected, ExpectedKind, FailInfo, ParseError, Renderer};
pub use parsnip_parse::{Checkpoint, Context, Options};
pub use parsnip_span::{Input, Location, Region, TextRange, TextSize};
pub use parsnip_tree::{Builder, Cleanup, Node, ParseResult};
