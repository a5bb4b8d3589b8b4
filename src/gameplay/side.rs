/// Which half of the table a participant occupies.
///
/// Side one is always asked for its move first.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Side {
    One,
    Two,
}

impl Side {
    pub const fn all() -> [Side; 2] {
        [Side::One, Side::Two]
    }
    pub fn other(&self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Side::One => write!(f, "Player 1"),
            Side::Two => write!(f, "Player 2"),
        }
    }
}
