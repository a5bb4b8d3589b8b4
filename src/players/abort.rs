/// The human walked away mid-match.
///
/// Raised by a [`super::Prompt`] and carried inside `anyhow::Error` through
/// the room untouched. The binary checks for it with `err.is::<Abort>()`
/// to tell a user-initiated stop from a genuine failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Abort {
    /// Input stream closed before a valid move arrived.
    Eof,
    /// Ctrl+C at an interactive prompt, reported by dialoguer's raw-mode reader.
    Interrupt,
}

impl Abort {
    /// Recognize terminal I/O failures that mean the human left. Anything else is a real fault.
    pub fn classify(e: &std::io::Error) -> Option<Abort> {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Some(Abort::Eof),
            std::io::ErrorKind::Interrupted => Some(Abort::Interrupt),
            _ => None,
        }
    }
}

impl std::fmt::Display for Abort {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Abort::Eof => write!(f, "end of input"),
            Abort::Interrupt => write!(f, "interrupted"),
        }
    }
}

impl std::error::Error for Abort {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_io_errors() {
        let eof = std::io::Error::from(std::io::ErrorKind::UnexpectedEof);
        let int = std::io::Error::from(std::io::ErrorKind::Interrupted);
        let bad = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        assert!(Abort::classify(&eof) == Some(Abort::Eof));
        assert!(Abort::classify(&int) == Some(Abort::Interrupt));
        assert!(Abort::classify(&bad) == None);
    }

    #[test]
    fn survives_anyhow() {
        let err = anyhow::Error::from(Abort::Eof);
        assert!(err.is::<Abort>());
        assert!(err.downcast_ref::<Abort>() == Some(&Abort::Eof));
    }
}
