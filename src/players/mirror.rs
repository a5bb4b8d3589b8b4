use super::player::Player;
use crate::gameplay::Move;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Replays whatever the opponent threw last round.
/// Uniform random until the first round has been observed.
#[derive(Debug)]
pub struct Mirror {
    rng: SmallRng,
    seen: Option<Move>,
}

impl Default for Mirror {
    fn default() -> Self {
        Self::from(SmallRng::from_os_rng())
    }
}

impl From<SmallRng> for Mirror {
    fn from(rng: SmallRng) -> Self {
        Self { rng, seen: None }
    }
}

impl Player for Mirror {
    fn decide(&mut self) -> anyhow::Result<Move> {
        Ok(self.seen.unwrap_or_else(|| Move::sample(&mut self.rng)))
    }
    fn notify(&mut self, _: Move, theirs: Move) {
        self.seen = Some(theirs);
    }
}
