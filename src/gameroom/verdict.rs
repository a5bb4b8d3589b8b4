use crate::Score;
use crate::gameplay::Side;

/// Final result of a finished match. Strictly greater score wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Winner(Side),
    Tie,
}

impl From<(Score, Score)> for Verdict {
    fn from((one, two): (Score, Score)) -> Self {
        match one.cmp(&two) {
            std::cmp::Ordering::Greater => Verdict::Winner(Side::One),
            std::cmp::Ordering::Less => Verdict::Winner(Side::Two),
            std::cmp::Ordering::Equal => Verdict::Tie,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Verdict::Winner(side) => write!(f, "{} wins!!!", side),
            Verdict::Tie => write!(f, "The game is a tie!!!"),
        }
    }
}
