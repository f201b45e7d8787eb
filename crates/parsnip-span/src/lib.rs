//! Positions in the text being parsed.
//!
//! Everything here is a cheap `Copy` value borrowing the caller-owned input.

mod input;
mod location;
mod region;

/// Borrowed view over the whole input.
pub use input::Input;
/// A single position with line and column bookkeeping.
pub use location::Location;
/// Half-open span between two locations.
pub use region::Region;
pub use text_size::{TextRange, TextSize};
