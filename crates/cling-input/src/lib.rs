//! Stdin access for Cling routes.
//!
//! A stdin route owns a [`StdinCursor`]: a handle opened once, at
//! registration, and read one line at a time by the route's handler.
//!
//! # Testing
//!
//! Cursors are opened through the [`StdinReader`] trait, so tests can inject
//! piped content without touching the real stdin:
//!
//! ```
//! use cling_input::{StdinCursor, MockStdin};
//!
//! let cursor = StdinCursor::open(&MockStdin::piped("test input\n")).unwrap();
//! ```

mod cursor;
pub mod env;
mod error;

pub use cursor::StdinCursor;
pub use env::{MockStdin, RealStdin, StdinReader};
pub use error::InputError;
