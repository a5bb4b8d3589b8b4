use super::verdict::Verdict;
use crate::Score;
use crate::gameplay::Round;

/// Progress notifications emitted by [`super::Room::play`].
///
/// `Over` is only ever sent for a match that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Match begins with this many rounds scheduled.
    Start(usize),
    /// Round with this 1-based index is about to ask for moves.
    Next(usize),
    /// Round resolved.
    Round(Round),
    /// Match finished with final scores.
    Over(Verdict, (Score, Score)),
}

/// Receiver of match events. Rendering is its only job; it cannot affect play.
pub trait Listener {
    fn notify(&mut self, event: &Event);
}

/// Recording listener.
impl Listener for Vec<Event> {
    fn notify(&mut self, event: &Event) {
        self.push(*event);
    }
}

/// Discarding listener.
impl Listener for () {
    fn notify(&mut self, _: &Event) {}
}
