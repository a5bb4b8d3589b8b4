use super::player::Player;
use crate::gameplay::Move;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Uniform over the three moves every round. Ignores history.
#[derive(Debug)]
pub struct Random(SmallRng);

impl Default for Random {
    fn default() -> Self {
        Self(SmallRng::from_os_rng())
    }
}

impl From<SmallRng> for Random {
    fn from(rng: SmallRng) -> Self {
        Self(rng)
    }
}

impl Player for Random {
    fn decide(&mut self) -> anyhow::Result<Move> {
        Ok(Move::sample(&mut self.0))
    }
}
