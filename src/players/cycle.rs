use super::player::Player;
use crate::gameplay::Move;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Steps through rock → paper → scissors starting after its own last move.
/// Uniform random until it has a move of its own on record.
#[derive(Debug)]
pub struct Cycle {
    rng: SmallRng,
    last: Option<Move>,
}

impl Default for Cycle {
    fn default() -> Self {
        Self::from(SmallRng::from_os_rng())
    }
}

impl From<SmallRng> for Cycle {
    fn from(rng: SmallRng) -> Self {
        Self { rng, last: None }
    }
}

impl Player for Cycle {
    fn decide(&mut self) -> anyhow::Result<Move> {
        Ok(self
            .last
            .map(|m| m.successor())
            .unwrap_or_else(|| Move::sample(&mut self.rng)))
    }
    fn notify(&mut self, mine: Move, _: Move) {
        self.last = Some(mine);
    }
}
