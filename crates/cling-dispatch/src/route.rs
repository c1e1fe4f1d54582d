//! The route entity and its builder.

use std::fmt;

use cling_input::{RealStdin, StdinCursor, StdinReader};

use crate::handler::{Dispatch, DispatchContext, FnHandler, Handler, HandlerResult};
use crate::option::{OptionSpec, RouteKind};
use crate::options::Options;
use crate::RouteError;

/// One registered command: what it responds to, its help text, and its
/// handler.
///
/// Routes are created through [`RouteBuilder`]. After registration only the
/// help text can change; the kind is fixed.
pub struct Route {
    kind: RouteKind,
    help: String,
    handler: Box<dyn Handler>,
    stdin: Option<StdinCursor>,
}

impl Route {
    /// Starts building a route of the given kind.
    pub fn builder(kind: RouteKind) -> RouteBuilder {
        RouteBuilder::new(kind)
    }

    pub fn kind(&self) -> &RouteKind {
        &self.kind
    }

    /// The option spec, for normal option routes.
    pub fn option_spec(&self) -> Option<&OptionSpec> {
        self.kind.as_option()
    }

    pub fn is_option(&self) -> bool {
        self.kind.is_option()
    }

    pub fn label(&self) -> &str {
        self.kind.label()
    }

    pub fn help_text(&self) -> &str {
        &self.help
    }

    /// Sets the help text, returning the route for chaining.
    pub fn help(&mut self, text: impl Into<String>) -> &mut Self {
        self.help = text.into();
        self
    }

    /// Returns true if the route owns a stdin cursor.
    pub fn has_stdin(&self) -> bool {
        self.stdin.is_some()
    }

    /// Invokes the handler with `value` (`None` for flags and special routes).
    ///
    /// `usage` is the rendered help text handed through to the handler.
    pub fn dispatch(
        &mut self,
        value: Option<&str>,
        options: &mut Options,
        usage: &str,
    ) -> Result<Dispatch, anyhow::Error> {
        let mut ctx = DispatchContext::new(&self.kind, options)
            .with_value(value)
            .with_help(&self.help)
            .with_stdin(self.stdin.as_mut())
            .with_usage(usage);

        tracing::debug!(route = self.kind.label(), value = ?value, "dispatching");
        self.handler.handle(&mut ctx)?;
        Ok(ctx.outcome())
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("kind", &self.kind)
            .field("help", &self.help)
            .field("stdin", &self.stdin)
            .finish_non_exhaustive()
    }
}

/// Builder that finalizes into a [`Route`].
///
/// # Example
///
/// ```
/// use cling_dispatch::{Route, RouteKind};
///
/// let route = Route::builder(RouteKind::option("verbose", Some("v"))?)
///     .help("Print more.")
///     .handler_fn(|_ctx| Ok(()))
///     .build()?;
///
/// assert_eq!(route.help_text(), "Print more.");
/// # Ok::<(), cling_dispatch::RouteError>(())
/// ```
pub struct RouteBuilder {
    kind: RouteKind,
    help: String,
    handler: Option<Box<dyn Handler>>,
}

impl RouteBuilder {
    pub fn new(kind: RouteKind) -> Self {
        Self {
            kind,
            help: String::new(),
            handler: None,
        }
    }

    pub fn kind(&self) -> &RouteKind {
        &self.kind
    }

    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.help = text.into();
        self
    }

    /// Binds a handler.
    pub fn handler<H: Handler + 'static>(mut self, handler: H) -> Self {
        self.handler = Some(Box::new(handler));
        self
    }

    /// Binds a closure as the handler.
    pub fn handler_fn<F>(self, f: F) -> Self
    where
        F: FnMut(&mut DispatchContext<'_>) -> HandlerResult + 'static,
    {
        self.handler(FnHandler::new(f))
    }

    /// Finalizes the route, opening the real stdin for stdin routes.
    pub fn build(self) -> Result<Route, RouteError> {
        self.build_with(&RealStdin)
    }

    /// Finalizes the route, opening stdin routes from `stdin`.
    ///
    /// Fails with [`RouteError::InvalidHandler`] if no handler was bound, and
    /// with [`RouteError::IoUnavailable`] if a stdin route cannot open its
    /// cursor.
    pub fn build_with<R: StdinReader + ?Sized>(self, stdin: &R) -> Result<Route, RouteError> {
        let handler = self.handler.ok_or_else(|| RouteError::InvalidHandler {
            route: self.kind.label().to_string(),
        })?;

        let stdin = match self.kind {
            RouteKind::StdinReader => Some(StdinCursor::open(stdin).map_err(|source| {
                RouteError::IoUnavailable {
                    route: self.kind.label().to_string(),
                    source,
                }
            })?),
            _ => None,
        };

        Ok(Route {
            kind: self.kind,
            help: self.help,
            handler,
            stdin,
        })
    }
}

impl fmt::Debug for RouteBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteBuilder")
            .field("kind", &self.kind)
            .field("help", &self.help)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}
