use super::player::Player;
use super::prompt::Prompt;
use crate::gameplay::Move;

/// Externally driven participant. Every decision is delegated to a [`Prompt`].
#[derive(Debug)]
pub struct Human<P>(P);

impl<P> From<P> for Human<P>
where
    P: Prompt,
{
    fn from(prompt: P) -> Self {
        Self(prompt)
    }
}

impl<P> Player for Human<P>
where
    P: Prompt,
{
    fn decide(&mut self) -> anyhow::Result<Move> {
        self.0.ask()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::Abort;
    use crate::players::Script;
    use std::io::Cursor;

    #[test]
    fn delegates_to_prompt() {
        let mut human = Human::from(Script::from((Cursor::new("scissors\n"), std::io::sink())));
        assert!(human.decide().ok() == Some(Move::Scissors));
    }

    #[test]
    fn propagates_abort() {
        let mut human = Human::from(Script::from((Cursor::new(""), std::io::sink())));
        let err = human.decide().expect_err("no input");
        assert!(err.is::<Abort>());
    }
}
