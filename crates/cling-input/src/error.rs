//! Error types for stdin access.

use std::io;

/// Errors that can occur while opening or reading stdin.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The stdin handle could not be acquired.
    #[error("Unable to open stdin: {0}")]
    Unavailable(#[source] io::Error),

    /// Reading the next line failed.
    #[error("Failed to read stdin: {0}")]
    ReadFailed(#[source] io::Error),

    /// The route under dispatch does not own a stdin cursor.
    #[error("No stdin cursor is attached to this route.")]
    NotAttached,
}

impl InputError {
    /// Returns true if this error means stdin was never opened.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}
