use super::cycle::Cycle;
use super::mirror::Mirror;
use super::player::Player;
use super::random::Random;
use crate::Arbitrary;
use rand::Rng;
use rand::rngs::SmallRng;

/// The autonomous strategies a human can be matched against.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Opponent {
    Random,
    Mirror,
    Cycle,
}

impl Opponent {
    pub const fn all() -> [Opponent; 3] {
        [Opponent::Random, Opponent::Mirror, Opponent::Cycle]
    }
    pub fn sample<R: Rng>(rng: &mut R) -> Opponent {
        Self::all()[rng.random_range(0..Self::all().len())]
    }
    /// Build the strategy, handing it its own generator.
    pub fn spawn(self, rng: SmallRng) -> Box<dyn Player> {
        match self {
            Opponent::Random => Box::new(Random::from(rng)),
            Opponent::Mirror => Box::new(Mirror::from(rng)),
            Opponent::Cycle => Box::new(Cycle::from(rng)),
        }
    }
}

impl Arbitrary for Opponent {
    fn random() -> Self {
        Self::sample(&mut rand::rng())
    }
}

impl std::fmt::Display for Opponent {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Opponent::Random => write!(f, "random"),
            Opponent::Mirror => write!(f, "mirror"),
            Opponent::Cycle => write!(f, "cycle"),
        }
    }
}
