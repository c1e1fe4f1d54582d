//! # Cling - Option Router for Command-Line Applications
//!
//! Cling maps command-line options to handler closures. Register a handler
//! per option, call [`Router::run`], and every option present on the command
//! line dispatches its handler, in registration order.
//!
//! - Long and short spellings (`--name`, `-n`), with a trailing `:` marking
//!   a value-taking option (`"name:"`)
//! - An always-run route (`":*"`) and a stdin route (`":stdin"`) that
//!   dispatch on every pass
//! - A generated usage listing, printed when nothing matched
//! - A key/value option store, seeded from code or a TOML file
//! - Generic failure output unless the `debug` option is set
//!
//! ## Quick Start
//!
//! ```no_run
//! use cling::Router;
//!
//! fn main() -> Result<(), cling::ClingError> {
//!     let mut app = Router::new();
//!
//!     app.command_with_short("help", "h", |ctx| {
//!         print!("{}", ctx.usage());
//!         ctx.halt();
//!         Ok(())
//!     })?
//!     .help("Show this help.");
//!
//!     app.command("hello-world:", |ctx| {
//!         println!("Hello {}", ctx.value_or_empty());
//!         Ok(())
//!     })?
//!     .help("Greet someone.");
//!
//!     app.run()
//! }
//! ```
//!
//! ## Crates
//!
//! Routes, option matching and the handler context live in
//! [`cling_dispatch`]; the stdin cursor lives in [`cling_input`]. The
//! commonly used types from both are re-exported here.

pub mod config;
mod error;
pub mod help;
pub mod logging;
mod router;

pub use error::ClingError;

pub use config::ConfigError;

pub use router::{NotFoundFn, Router, RunOutcome, FAILURE_MESSAGE};

// Dispatch layer (from cling-dispatch)
pub use cling_dispatch::{
    getopt, Arity, Dispatch, DispatchContext, FnHandler, Handler, HandlerResult, OptionSpec,
    Options, Route, RouteBuilder, RouteError, RouteKind, ALWAYS_RUN_TOKEN, DEBUG, STDIN_TOKEN,
    VALUE_MARKER,
};

// Stdin layer (from cling-input)
pub use cling_input::{InputError, MockStdin, RealStdin, StdinCursor, StdinReader};
