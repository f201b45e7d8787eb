//! The state of one top-level parse and the primitives generated rules are
//! built from.
//!
//! Every rule follows the same contract: on success it advances the current
//! location and returns a node (or nil); on failure it reports what it
//! expected and leaves the location where it was.

mod context;
mod options;

pub use context::{Checkpoint, Context};
pub use options::Options;
