//! Parse result trees.
//!
//! Every attempt to match a parsing expression ends in a [`ParseResult`]:
//! a node, a match with nothing to show for it, or a failure. Nodes own their
//! children, so dropping the root frees the whole tree; [`ParseResult::release`]
//! does the same while handing every payload to a cleanup callback first.

mod builder;
mod node;
mod result;

/// Stack of completed results for event-style tree construction.
pub use builder::Builder;
pub use node::Node;
pub use result::{Cleanup, ParseResult};
