//! Environment abstractions for testability.
//!
//! Routes that read stdin never touch `std::io::stdin()` directly. They go
//! through a [`StdinReader`], which lets tests substitute piped content or a
//! handle that fails to open.

use std::io::{self, BufRead, BufReader, Cursor, IsTerminal};

/// Abstraction over the process stdin.
pub trait StdinReader {
    /// True when stdin is an interactive terminal rather than a pipe.
    fn is_terminal(&self) -> bool;

    /// Open a buffered line source over stdin.
    ///
    /// Called once per stdin route, at registration.
    fn open(&self) -> io::Result<Box<dyn BufRead>>;
}

impl<R: StdinReader + ?Sized> StdinReader for Box<R> {
    fn is_terminal(&self) -> bool {
        (**self).is_terminal()
    }

    fn open(&self) -> io::Result<Box<dyn BufRead>> {
        (**self).open()
    }
}

// === Real implementation ===

/// The process stdin.
///
/// The reader wraps the inherited descriptor, so pipes, files, sockets and
/// terminals all work without reopening anything by path.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealStdin;

impl StdinReader for RealStdin {
    fn is_terminal(&self) -> bool {
        io::stdin().is_terminal()
    }

    fn open(&self) -> io::Result<Box<dyn BufRead>> {
        Ok(Box::new(BufReader::new(io::stdin())))
    }
}

// === Mock implementation for testing ===

#[derive(Debug, Clone)]
enum MockState {
    Terminal,
    Piped(String),
    Unavailable,
}

/// Scripted stdin for tests.
///
/// A mock is a terminal, a pipe holding fixed content, or a handle that
/// fails to open.
#[derive(Debug, Clone)]
pub struct MockStdin {
    state: MockState,
}

impl MockStdin {
    /// Interactive terminal; opening yields an empty stream.
    pub fn terminal() -> Self {
        Self {
            state: MockState::Terminal,
        }
    }

    /// Pipe carrying `content`.
    pub fn piped(content: impl Into<String>) -> Self {
        Self {
            state: MockState::Piped(content.into()),
        }
    }

    /// Pipe that is already at end-of-stream.
    pub fn piped_empty() -> Self {
        Self::piped("")
    }

    /// Handle whose `open` fails with `NotFound`.
    pub fn unavailable() -> Self {
        Self {
            state: MockState::Unavailable,
        }
    }
}

impl StdinReader for MockStdin {
    fn is_terminal(&self) -> bool {
        matches!(self.state, MockState::Terminal)
    }

    fn open(&self) -> io::Result<Box<dyn BufRead>> {
        let bytes = match &self.state {
            MockState::Terminal => Vec::new(),
            MockState::Piped(content) => content.clone().into_bytes(),
            MockState::Unavailable => {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    "stdin is not available",
                ))
            }
        };
        Ok(Box::new(Cursor::new(bytes)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn drain(reader: &dyn StdinReader) -> String {
        let mut out = String::new();
        reader.open().unwrap().read_to_string(&mut out).unwrap();
        out
    }

    #[test]
    fn terminal_mock_is_interactive_and_empty() {
        let stdin = MockStdin::terminal();
        assert!(stdin.is_terminal());
        assert_eq!(drain(&stdin), "");
    }

    #[test]
    fn piped_mock_replays_content() {
        let stdin = MockStdin::piped("first\nsecond\n");
        assert!(!stdin.is_terminal());
        assert_eq!(drain(&stdin), "first\nsecond\n");
        assert_eq!(drain(&stdin), "first\nsecond\n");
    }

    #[test]
    fn piped_empty_is_at_eof() {
        assert_eq!(drain(&MockStdin::piped_empty()), "");
    }

    #[test]
    fn unavailable_mock_fails_to_open() {
        let err = MockStdin::unavailable().open().err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn real_stdin_opens_inherited_handle() {
        assert!(RealStdin.open().is_ok());
    }

    #[test]
    fn boxed_reader_delegates() {
        let boxed: Box<dyn StdinReader> = Box::new(MockStdin::terminal());
        assert!(boxed.is_terminal());
    }
}
