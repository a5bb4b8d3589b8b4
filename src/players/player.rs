use crate::gameplay::Move;

/// Trait for entities that choose moves.
/// Implementations can be fixed bots, adaptive bots, or humans at a terminal.
///
/// The room asks side one, then side two, and only reveals both moves
/// through [`Player::notify`] once the round is resolved. A player never
/// sees the opponent's move for the round it is deciding.
pub trait Player: std::fmt::Debug {
    /// Choose the move for the current round.
    /// Fails only when the move source itself is gone (closed input, interrupt).
    fn decide(&mut self) -> anyhow::Result<Move>;

    /// Receive both revealed moves after the round is resolved.
    /// Adaptive strategies update their state here.
    fn notify(&mut self, mine: Move, theirs: Move) {
        let _ = (mine, theirs);
    }
}
