use rand::Rng;

/// One of the three classic throws.
///
/// Declaration order is the fixed cycle used by [`Move::successor`]:
/// rock → paper → scissors → rock.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Move {
    #[default]
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Move {
    /// All three moves in cyclic order.
    pub const fn all() -> [Move; 3] {
        [Move::Rock, Move::Paper, Move::Scissors]
    }
    /// The move that follows this one in cyclic order, wrapping scissors to rock.
    pub fn successor(&self) -> Move {
        Move::from((u8::from(*self) + 1) % 3)
    }
    /// Cyclic dominance. Irreflexive, and exactly one direction holds for distinct moves.
    pub fn beats(&self, other: &Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors)
                | (Move::Scissors, Move::Paper)
                | (Move::Paper, Move::Rock)
        )
    }
    /// Uniform draw from an injected generator.
    pub fn sample<R: Rng>(rng: &mut R) -> Move {
        Move::from(rng.random_range(0..3u8))
    }
}

/// u8 isomorphism
impl From<u8> for Move {
    fn from(n: u8) -> Move {
        match n {
            0 => Move::Rock,
            1 => Move::Paper,
            2 => Move::Scissors,
            _ => unreachable!("invalid move"),
        }
    }
}
impl From<Move> for u8 {
    fn from(m: Move) -> u8 {
        m as u8
    }
}

/// str isomorphism
impl TryFrom<&str> for Move {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "rock" => Ok(Move::Rock),
            "paper" => Ok(Move::Paper),
            "scissors" => Ok(Move::Scissors),
            _ => Err(format!("sorry the option '{}' is invalid. Try again!", s.trim())),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Move::Rock => write!(f, "rock"),
            Move::Paper => write!(f, "paper"),
            Move::Scissors => write!(f, "scissors"),
        }
    }
}
