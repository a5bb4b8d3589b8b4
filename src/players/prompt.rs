use super::abort::Abort;
use crate::gameplay::Move;
use std::io::BufRead;
use std::io::Write;

/// Question shown before every human move.
pub const QUESTION: &str = "Enter your choice ('Rock', 'Paper', or 'Scissors')";

/// Source of human moves.
///
/// Implementations loop on bad text until they get a valid move, so the
/// only errors they return are [`Abort`] (the human left) or a real I/O fault.
pub trait Prompt: std::fmt::Debug {
    fn ask(&mut self) -> anyhow::Result<Move>;
}

/// Line-oriented prompt over any reader/writer pair.
/// Used when stdin is piped rather than a terminal, and in tests.
/// Undecodable bytes count as invalid text. Only closed input aborts.
pub struct Script<R, W> {
    input: R,
    output: W,
}

impl<R, W> From<(R, W)> for Script<R, W>
where
    R: BufRead,
    W: Write,
{
    fn from((input, output): (R, W)) -> Self {
        Self { input, output }
    }
}

impl<R, W> Prompt for Script<R, W>
where
    R: BufRead,
    W: Write,
{
    fn ask(&mut self) -> anyhow::Result<Move> {
        loop {
            write!(self.output, "{}: ", QUESTION)?;
            self.output.flush()?;
            let ref mut bytes = Vec::new();
            // std retries Interrupted itself, so any error left here is a real fault
            if self.input.read_until(b'\n', bytes)? == 0 {
                return Err(Abort::Eof.into());
            }
            match Move::try_from(String::from_utf8_lossy(bytes).as_ref()) {
                Ok(m) => return Ok(m),
                Err(complaint) => writeln!(self.output, "{}", complaint)?,
            }
        }
    }
}

impl<R, W> std::fmt::Debug for Script<R, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Script")
    }
}
