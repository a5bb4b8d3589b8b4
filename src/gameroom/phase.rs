/// Lifecycle of a match.
///
/// `InProgress(k)` means the room has started and `k` rounds are complete.
/// `Finished` is terminal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    #[default]
    NotStarted,
    InProgress(usize),
    Finished,
}

impl Phase {
    /// Rounds completed so far, or `None` once the match is over.
    pub fn completed(&self) -> Option<usize> {
        match self {
            Phase::NotStarted => Some(0),
            Phase::InProgress(k) => Some(*k),
            Phase::Finished => None,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Phase::NotStarted => write!(f, "not started"),
            Phase::InProgress(k) => write!(f, "in progress ({} played)", k),
            Phase::Finished => write!(f, "finished"),
        }
    }
}
