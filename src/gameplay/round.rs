use super::moves::Move;
use super::side::Side;
use crate::Score;

/// Transient record of one resolved exchange.
///
/// Scores are the running totals after this round was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    index: usize,
    moves: (Move, Move),
    winner: Option<Side>,
    scores: (Score, Score),
}

impl From<(usize, (Move, Move), Option<Side>, (Score, Score))> for Round {
    fn from(
        (index, moves, winner, scores): (usize, (Move, Move), Option<Side>, (Score, Score)),
    ) -> Self {
        Self {
            index,
            moves,
            winner,
            scores,
        }
    }
}

impl Round {
    /// 1-based position within the match.
    pub fn index(&self) -> usize {
        self.index
    }
    pub fn moves(&self) -> (Move, Move) {
        self.moves
    }
    pub fn played(&self, side: Side) -> Move {
        let (one, two) = self.moves();
        match side {
            Side::One => one,
            Side::Two => two,
        }
    }
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }
    pub fn scores(&self) -> (Score, Score) {
        self.scores
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let (one, two) = self.moves();
        writeln!(f, "{}: {}  {}: {}", Side::One, one, Side::Two, two)?;
        match self.winner {
            Some(side) => writeln!(f, "{} wins this round.", side)?,
            None => writeln!(f, "This round is a tie.")?,
        }
        write!(
            f,
            "{}: {} | {}: {}",
            Side::One,
            self.scores.0,
            Side::Two,
            self.scores.1
        )
    }
}
