//! Move domain and round resolution.
//!
//! Everything here is pure: no participant state, no I/O. The match
//! controller in [`crate::gameroom`] feeds moves in and applies the result.
mod moves;
mod round;
mod rules;
mod side;

pub use moves::*;
pub use round::*;
pub use rules::*;
pub use side::*;
