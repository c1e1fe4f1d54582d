//! Route handler types.
//!
//! A handler receives a [`DispatchContext`]: the route under dispatch, the
//! value parsed for it, the option store, and (for stdin routes) the stdin
//! cursor. The context is the only channel between the router and the
//! handler, so a handler can never see another route's state or re-enter
//! the router mid-pass.
//!
//! # Core Types
//!
//! - [`DispatchContext`]: Per-invocation view passed to handlers
//! - [`Handler`]: Trait for route handlers (`&mut self`)
//! - [`FnHandler`]: Adapter for `FnMut` closures
//! - [`HandlerResult`]: The result type for handlers
//! - [`Dispatch`]: Whether the pass continues after a handler

use std::fmt;

use cling_input::{InputError, StdinCursor};
use serde_json::Value;

use crate::option::RouteKind;
use crate::options::Options;

/// The result type for route handlers.
///
/// Enables use of the `?` operator for error propagation.
pub type HandlerResult = Result<(), anyhow::Error>;

/// Whether a dispatch pass continues after a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Move on to the next route.
    Continue,
    /// The handler called [`DispatchContext::halt`]; later routes are skipped.
    Halt,
}

/// Context passed to route handlers.
///
/// # Example
///
/// ```
/// use cling_dispatch::{DispatchContext, Options, RouteKind};
///
/// let kind = RouteKind::option("name:", Some("n")).unwrap();
/// let mut options = Options::default();
/// let mut ctx = DispatchContext::new(&kind, &mut options).with_value(Some("Alice"));
///
/// assert_eq!(ctx.value(), Some("Alice"));
/// ctx.options_mut().set("greeted", true);
/// ```
pub struct DispatchContext<'a> {
    kind: &'a RouteKind,
    help: &'a str,
    value: Option<&'a str>,
    stdin: Option<&'a mut StdinCursor>,
    options: &'a mut Options,
    usage: &'a str,
    halted: bool,
}

impl<'a> DispatchContext<'a> {
    /// Creates a context for the given route kind and option store.
    pub fn new(kind: &'a RouteKind, options: &'a mut Options) -> Self {
        Self {
            kind,
            help: "",
            value: None,
            stdin: None,
            options,
            usage: "",
            halted: false,
        }
    }

    /// Sets the parsed value. `None` for flags and special routes.
    pub fn with_value(mut self, value: Option<&'a str>) -> Self {
        self.value = value;
        self
    }

    pub fn with_help(mut self, help: &'a str) -> Self {
        self.help = help;
        self
    }

    /// Attaches the route's stdin cursor.
    pub fn with_stdin(mut self, stdin: Option<&'a mut StdinCursor>) -> Self {
        self.stdin = stdin;
        self
    }

    /// Attaches the rendered usage text for the whole route table.
    pub fn with_usage(mut self, usage: &'a str) -> Self {
        self.usage = usage;
        self
    }

    /// The route under dispatch.
    pub fn route(&self) -> &RouteKind {
        self.kind
    }

    /// Help text of the route under dispatch.
    pub fn help(&self) -> &str {
        self.help
    }

    /// The parsed value, if the route takes one.
    pub fn value(&self) -> Option<&str> {
        self.value
    }

    /// The parsed value, or `""` for flags and special routes.
    pub fn value_or_empty(&self) -> &str {
        self.value.unwrap_or_default()
    }

    pub fn option(&self, name: &str) -> Option<&Value> {
        self.options.get(name)
    }

    pub fn options(&self) -> &Options {
        &*self.options
    }

    pub fn options_mut(&mut self) -> &mut Options {
        &mut *self.options
    }

    /// The stdin cursor. Only stdin routes have one.
    pub fn stdin(&mut self) -> Option<&mut StdinCursor> {
        self.stdin.as_deref_mut()
    }

    /// Reads the next stdin line; `Ok(None)` at end-of-stream.
    pub fn read_line(&mut self) -> Result<Option<String>, InputError> {
        self.stdin
            .as_deref_mut()
            .ok_or(InputError::NotAttached)?
            .read_line()
    }

    /// The default usage text, as `notFound` would print it.
    pub fn usage(&self) -> &str {
        self.usage
    }

    /// Stops the pass once this handler returns.
    pub fn halt(&mut self) {
        self.halted = true;
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub(crate) fn outcome(&self) -> Dispatch {
        if self.halted {
            Dispatch::Halt
        } else {
            Dispatch::Continue
        }
    }
}

impl fmt::Debug for DispatchContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchContext")
            .field("route", &self.kind.label())
            .field("value", &self.value)
            .field("has_stdin", &self.stdin.is_some())
            .field("halted", &self.halted)
            .finish_non_exhaustive()
    }
}

/// Trait for route handlers.
///
/// Handlers take `&mut self`, so they can keep state across passes.
///
/// # Example
///
/// ```
/// use cling_dispatch::{DispatchContext, Handler, HandlerResult};
///
/// struct Counter { count: u32 }
///
/// impl Handler for Counter {
///     fn handle(&mut self, _ctx: &mut DispatchContext<'_>) -> HandlerResult {
///         self.count += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Handler {
    /// Execute the handler for one dispatch.
    fn handle(&mut self, ctx: &mut DispatchContext<'_>) -> HandlerResult;
}

impl<H: Handler + ?Sized> Handler for Box<H> {
    fn handle(&mut self, ctx: &mut DispatchContext<'_>) -> HandlerResult {
        (**self).handle(ctx)
    }
}

/// A wrapper that implements [`Handler`] for `FnMut` closures.
///
/// # Example
///
/// ```
/// use cling_dispatch::{DispatchContext, FnHandler, Handler, Options, RouteKind};
///
/// let mut handler = FnHandler::new(|ctx: &mut DispatchContext<'_>| {
///     println!("Hello {}", ctx.value_or_empty());
///     Ok(())
/// });
///
/// let kind = RouteKind::option("hello-world:", None).unwrap();
/// let mut options = Options::default();
/// let mut ctx = DispatchContext::new(&kind, &mut options).with_value(Some("World"));
/// handler.handle(&mut ctx).unwrap();
/// ```
pub struct FnHandler<F> {
    f: F,
}

impl<F> FnHandler<F>
where
    F: FnMut(&mut DispatchContext<'_>) -> HandlerResult,
{
    /// Creates a new FnHandler wrapping the given FnMut closure.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> Handler for FnHandler<F>
where
    F: FnMut(&mut DispatchContext<'_>) -> HandlerResult,
{
    fn handle(&mut self, ctx: &mut DispatchContext<'_>) -> HandlerResult {
        (self.f)(ctx)
    }
}
