//! Participants and their move-selection strategies.
//!
//! ## Implementations
//!
//! - [`Fixed`] — Always the same move
//! - [`Random`] — Uniform over the three moves
//! - [`Mirror`] — Replays the opponent's previous move
//! - [`Cycle`] — Advances its own previous move by one step
//! - [`Human`] — Reads moves through a [`Prompt`]
//!
//! [`Seat`] wraps any of them with the bookkeeping the match controller needs.
mod abort;
mod cycle;
mod fixed;
mod human;
mod mirror;
mod opponent;
mod player;
mod prompt;
mod random;
mod seat;
#[cfg(feature = "cli")]
mod terminal;

pub use abort::*;
pub use cycle::*;
pub use fixed::*;
pub use human::*;
pub use mirror::*;
pub use opponent::*;
pub use player::*;
pub use prompt::*;
pub use random::*;
pub use seat::*;
#[cfg(feature = "cli")]
pub use terminal::*;
