//! Match orchestration.
//!
//! [`Room`] owns both seats, drives rounds in order, and reports progress
//! as a stream of [`Event`]s to a [`Listener`].
#[cfg(feature = "cli")]
mod console;
mod event;
mod phase;
mod room;
mod verdict;

#[cfg(feature = "cli")]
pub use console::*;
pub use event::*;
pub use phase::*;
pub use room::*;
pub use verdict::*;
