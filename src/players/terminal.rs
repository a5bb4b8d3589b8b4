use super::abort::Abort;
use super::prompt::Prompt;
use super::prompt::QUESTION;
use crate::gameplay::Move;
use dialoguer::Input;

/// Interactive prompt for a human at a TTY.
///
/// Validation happens inside the dialoguer loop, so bad text never leaves
/// this function. Ctrl+C surfaces as [`Abort::Interrupt`].
#[derive(Debug, Default)]
pub struct Terminal;

impl Prompt for Terminal {
    fn ask(&mut self) -> anyhow::Result<Move> {
        let text = Input::<String>::new()
            .with_prompt(QUESTION)
            .validate_with(|i: &String| -> Result<(), String> {
                Move::try_from(i.as_str()).map(|_| ())
            })
            .report(false)
            .interact_text()
            .map_err(Self::classify)?;
        Ok(Move::try_from(text.as_str()).map_err(anyhow::Error::msg)?)
    }
}

impl Terminal {
    fn classify(e: dialoguer::Error) -> anyhow::Error {
        match std::error::Error::source(&e)
            .and_then(|s| s.downcast_ref::<std::io::Error>())
            .and_then(Abort::classify)
        {
            Some(abort) => abort.into(),
            None => e.into(),
        }
    }
}
