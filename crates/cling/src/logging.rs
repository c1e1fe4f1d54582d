//! Log subscriber setup.
//!
//! The library only emits `tracing` events. Applications opt in to seeing
//! them with [`init`], which reads two options:
//!
//! - `log.level`: an `EnvFilter` directive, used when `RUST_LOG` is unset
//! - `log.destination`: `stdout` or `stderr`

use std::io;

use cling_dispatch::Options;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Option holding the fallback filter directive.
pub const LOG_LEVEL: &str = "log.level";

/// Option naming the log stream.
pub const LOG_DESTINATION: &str = "log.destination";

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Where log lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogDestination {
    Stdout,
    #[default]
    Stderr,
}

impl LogDestination {
    /// Reads `log.destination`; anything but `stdout` means stderr.
    pub fn from_options(options: &Options) -> Self {
        match options.get_str(LOG_DESTINATION) {
            Some(dest) if dest.trim().eq_ignore_ascii_case("stdout") => Self::Stdout,
            _ => Self::Stderr,
        }
    }
}

/// Builds the filter: `RUST_LOG` first, then `log.level`.
pub fn filter(options: &Options) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(options.get_str(LOG_LEVEL).unwrap_or(DEFAULT_LOG_LEVEL))
    })
}

/// Installs the global subscriber.
///
/// Returns false if one was already installed; the call is then a no-op.
pub fn init(options: &Options) -> bool {
    let registry = tracing_subscriber::registry().with(filter(options));
    let installed = match LogDestination::from_options(options) {
        LogDestination::Stdout => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stdout))
            .try_init(),
        LogDestination::Stderr => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .try_init(),
    };
    installed.is_ok()
}
