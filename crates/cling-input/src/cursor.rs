//! Line cursor over stdin.

use std::fmt;
use std::io::BufRead;

use crate::env::StdinReader;
use crate::InputError;

/// A sequential, non-restartable cursor over stdin lines.
///
/// The handle is opened once in [`StdinCursor::open`]. Every call to
/// [`read_line`](Self::read_line) advances it; once end-of-stream is seen the
/// cursor stays exhausted.
///
/// # Example
///
/// ```
/// use cling_input::{MockStdin, StdinCursor};
///
/// let mut cursor = StdinCursor::open(&MockStdin::piped("a\nb\n"))?;
/// assert_eq!(cursor.read_line()?.as_deref(), Some("a\n"));
/// assert_eq!(cursor.read_line()?.as_deref(), Some("b\n"));
/// assert_eq!(cursor.read_line()?, None);
/// # Ok::<(), cling_input::InputError>(())
/// ```
pub struct StdinCursor {
    reader: Box<dyn BufRead>,
    exhausted: bool,
    lines_read: usize,
}

impl StdinCursor {
    /// Open a cursor from the given stdin reader.
    pub fn open<R: StdinReader + ?Sized>(source: &R) -> Result<Self, InputError> {
        let reader = source.open().map_err(InputError::Unavailable)?;
        tracing::trace!("stdin cursor opened");
        Ok(Self::from_reader(reader))
    }

    /// Wrap an already-open buffered reader.
    pub fn from_reader(reader: Box<dyn BufRead>) -> Self {
        Self {
            reader,
            exhausted: false,
            lines_read: 0,
        }
    }

    /// Read the next line, trailing newline included.
    ///
    /// Returns `Ok(None)` at end-of-stream, and on every call after that.
    pub fn read_line(&mut self) -> Result<Option<String>, InputError> {
        if self.exhausted {
            return Ok(None);
        }

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(InputError::ReadFailed)?;

        if read == 0 {
            self.exhausted = true;
            return Ok(None);
        }

        self.lines_read += 1;
        Ok(Some(line))
    }

    /// Returns true once end-of-stream has been reached.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Number of lines handed out so far.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }
}

impl Iterator for StdinCursor {
    type Item = Result<String, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_line().transpose()
    }
}

impl fmt::Debug for StdinCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdinCursor")
            .field("exhausted", &self.exhausted)
            .field("lines_read", &self.lines_read)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MockStdin;

    #[test]
    fn reads_lines_then_end_of_stream() {
        let mut cursor = StdinCursor::open(&MockStdin::piped("a\nb\n")).unwrap();
        assert_eq!(cursor.read_line().unwrap(), Some("a\n".to_string()));
        assert_eq!(cursor.read_line().unwrap(), Some("b\n".to_string()));
        assert_eq!(cursor.read_line().unwrap(), None);
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn stays_exhausted() {
        let mut cursor = StdinCursor::open(&MockStdin::piped("only")).unwrap();
        assert_eq!(cursor.read_line().unwrap(), Some("only".to_string()));
        assert_eq!(cursor.read_line().unwrap(), None);
        assert_eq!(cursor.read_line().unwrap(), None);
        assert_eq!(cursor.lines_read(), 1);
    }

    #[test]
    fn empty_input_is_immediately_exhausted() {
        let mut cursor = StdinCursor::open(&MockStdin::piped_empty()).unwrap();
        assert!(!cursor.is_exhausted());
        assert_eq!(cursor.read_line().unwrap(), None);
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn open_failure_is_unavailable() {
        let err = StdinCursor::open(&MockStdin::unavailable()).unwrap_err();
        assert!(err.is_unavailable());
    }

    #[test]
    fn iterates_remaining_lines() {
        let cursor = StdinCursor::open(&MockStdin::piped("x\ny\nz")).unwrap();
        let lines: Vec<String> = cursor.map(Result::unwrap).collect();
        assert_eq!(lines, vec!["x\n", "y\n", "z"]);
    }
}
