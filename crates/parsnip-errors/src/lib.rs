//! Furthest-failure bookkeeping and the diagnostics built from it.

mod expected;
mod fail_info;
mod parse_error;

pub use annotate_snippets::Renderer;
pub use expected::{Expected, ExpectedKind};
pub use fail_info::FailInfo;
pub use parse_error::ParseError;
