//! Route registration errors.

use cling_input::InputError;

/// Errors raised while building a [`Route`](crate::Route).
///
/// All of these surface at registration time, never during dispatch.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// The route was finalized without a handler.
    #[error("Handler for route '{route}' is not callable")]
    InvalidHandler {
        /// Label of the offending route
        route: String,
    },

    /// The long or short option spelling is unusable.
    #[error("Invalid option '{option}': {reason}")]
    InvalidOption {
        /// The spelling as given
        option: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// A stdin route could not acquire its handle.
    #[error("Unable to open stdin for route '{route}'")]
    IoUnavailable {
        /// Label of the offending route
        route: String,
        /// The underlying open failure
        #[source]
        source: InputError,
    },
}

impl RouteError {
    pub(crate) fn invalid_option(option: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidOption {
            option: option.into(),
            reason,
        }
    }
}
