//! Errors surfaced by the [`Router`](crate::Router).

use cling_dispatch::RouteError;
use cling_input::InputError;

use crate::config::ConfigError;

/// Errors raised by route registration, dispatch, and configuration.
///
/// Registration problems (`InvalidHandler`, `InvalidOption`, `IoUnavailable`)
/// come from [`RouteError`] and are flattened into the matching variant.
#[derive(Debug, thiserror::Error)]
pub enum ClingError {
    /// A route was registered without a handler.
    #[error("Handler for route '{route}' is not callable")]
    InvalidHandler { route: String },

    /// A long or short option spelling is unusable.
    #[error("Invalid option '{option}': {reason}")]
    InvalidOption {
        option: String,
        reason: &'static str,
    },

    /// A stdin route could not open its handle.
    #[error("Unable to open stdin for route '{route}'")]
    IoUnavailable {
        route: String,
        #[source]
        source: InputError,
    },

    /// `run` was called without any process arguments.
    #[error("This is a command line application.")]
    NotCliContext,

    /// A handler returned an error.
    #[error("Handler for route '{route}' failed: {source}")]
    Handler {
        route: String,
        #[source]
        source: anyhow::Error,
    },

    /// Writing the usage text failed.
    #[error("Failed to write output")]
    Output(#[source] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<RouteError> for ClingError {
    fn from(err: RouteError) -> Self {
        match err {
            RouteError::InvalidHandler { route } => Self::InvalidHandler { route },
            RouteError::InvalidOption { option, reason } => Self::InvalidOption { option, reason },
            RouteError::IoUnavailable { route, source } => Self::IoUnavailable { route, source },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn route_errors_flatten() {
        let err: ClingError = RouteError::InvalidHandler {
            route: "help".into(),
        }
        .into();
        assert!(matches!(err, ClingError::InvalidHandler { ref route } if route == "help"));

        let err: ClingError = RouteError::IoUnavailable {
            route: ":stdin".into(),
            source: InputError::Unavailable(io::Error::new(io::ErrorKind::NotFound, "gone")),
        }
        .into();
        assert!(matches!(err, ClingError::IoUnavailable { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn handler_error_keeps_route_and_cause() {
        let err = ClingError::Handler {
            route: "config".into(),
            source: anyhow::anyhow!("missing file"),
        };
        assert_eq!(
            err.to_string(),
            "Handler for route 'config' failed: missing file"
        );
    }

    #[test]
    fn not_cli_context_message() {
        assert_eq!(
            ClingError::NotCliContext.to_string(),
            "This is a command line application."
        );
    }
}
