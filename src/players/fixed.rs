use super::player::Player;
use crate::gameplay::Move;

/// Plays the same move every round. Defaults to rock.
#[derive(Debug, Default, Clone, Copy)]
pub struct Fixed(Move);

impl From<Move> for Fixed {
    fn from(m: Move) -> Self {
        Self(m)
    }
}

impl Player for Fixed {
    fn decide(&mut self) -> anyhow::Result<Move> {
        Ok(self.0)
    }
}
