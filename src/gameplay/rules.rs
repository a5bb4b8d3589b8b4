use super::moves::Move;
use super::side::Side;

/// Decide a round. `None` is a tie.
pub fn resolve(one: Move, two: Move) -> Option<Side> {
    if one.beats(&two) {
        Some(Side::One)
    } else if two.beats(&one) {
        Some(Side::Two)
    } else {
        None
    }
}
