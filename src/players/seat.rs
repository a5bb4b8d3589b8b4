use super::player::Player;
use crate::Score;
use crate::gameplay::Move;

/// A participant as the room sees it: the strategy plus its match bookkeeping.
///
/// The score only ever grows, and always equals rounds won so far.
#[derive(Debug)]
pub struct Seat {
    player: Box<dyn Player>,
    score: Score,
    last: Option<Move>,
    seen: Option<Move>,
}

impl Seat {
    pub fn new(player: Box<dyn Player>) -> Self {
        Self {
            player,
            score: 0,
            last: None,
            seen: None,
        }
    }
    pub fn decide(&mut self) -> anyhow::Result<Move> {
        self.player.decide()
    }
    pub fn notify(&mut self, mine: Move, theirs: Move) {
        self.last = Some(mine);
        self.seen = Some(theirs);
        self.player.notify(mine, theirs);
    }
    /// Add points and return the new total.
    pub fn add_score(&mut self, delta: Score) -> Score {
        self.score += delta;
        self.score
    }
    pub fn score(&self) -> Score {
        self.score
    }
    pub fn last(&self) -> Option<Move> {
        self.last
    }
    pub fn seen(&self) -> Option<Move> {
        self.seen
    }
}

impl<P> From<P> for Seat
where
    P: Player + 'static,
{
    fn from(player: P) -> Self {
        Self::new(Box::new(player))
    }
}
