//! Route table, option matching, and handler dispatch for Cling.
//!
//! `cling-dispatch` holds the pieces a router is built from:
//!
//! - **Routes**: [`Route`] and [`RouteBuilder`], classified by [`RouteKind`]
//!   into normal options, always-run routes, and stdin readers
//! - **Option matching**: the [`getopt`] module scans process arguments for
//!   one [`OptionSpec`] at a time
//! - **Handlers**: the [`Handler`] trait, the [`FnHandler`] closure adapter,
//!   and the [`DispatchContext`] every handler receives
//! - **Options**: the [`Options`] key/value store shared with handlers
//!
//! The `cling` crate wires these into the `Router` application object.
//!
//! # Dispatching a single route
//!
//! ```
//! use cling_dispatch::{getopt, Options, Route, RouteKind};
//!
//! let mut route = Route::builder(RouteKind::option("name:", Some("n"))?)
//!     .handler_fn(|ctx| {
//!         println!("Hello {}", ctx.value_or_empty());
//!         Ok(())
//!     })
//!     .build()?;
//!
//! let raw = getopt::raw_args(["app", "-n", "Alice"]);
//! let spec = route.option_spec().cloned().unwrap();
//! if let Some(found) = getopt::find(&spec, &raw) {
//!     route.dispatch(found.value(), &mut Options::default(), "").unwrap();
//! }
//! # Ok::<(), cling_dispatch::RouteError>(())
//! ```

mod error;
pub mod getopt;
mod handler;
mod option;
mod options;
mod route;

pub use error::RouteError;

pub use handler::{Dispatch, DispatchContext, FnHandler, Handler, HandlerResult};

pub use option::{Arity, OptionSpec, RouteKind, ALWAYS_RUN_TOKEN, STDIN_TOKEN, VALUE_MARKER};

pub use options::{Options, DEBUG};

pub use route::{Route, RouteBuilder};

pub use getopt::OptionMatch;
