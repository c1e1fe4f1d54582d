//! The application object: route table, option store, and run loop.

use std::convert::Infallible;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::Path;
use std::{env, fmt, process};

use cling_dispatch::{
    getopt, Dispatch, DispatchContext, HandlerResult, Options, Route, RouteBuilder, RouteKind,
};
use cling_input::{RealStdin, StdinReader};
use serde_json::Value;

use crate::logging::{DEFAULT_LOG_LEVEL, LOG_DESTINATION, LOG_LEVEL};
use crate::{config, help, ClingError};

/// Line printed to stderr when a run fails outside debug mode.
pub const FAILURE_MESSAGE: &str = "Application terminated unexpectedly.";

/// Label used for errors raised by the not-found fallback.
const NOT_FOUND_LABEL: &str = "not-found";

/// Fallback invoked when no route dispatched.
pub type NotFoundFn = dyn FnMut(&Router) -> HandlerResult;

/// Result of one dispatch pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// At least one option or always-run route dispatched. Holds the number
    /// of handlers invoked, stdin routes included.
    Dispatched(usize),
    /// A handler stopped the pass.
    Halted,
    /// Nothing but stdin routes (if any) ran.
    NotFound,
}

/// Routes process arguments to handlers.
///
/// # Example
///
/// ```
/// use cling::{Router, RunOutcome};
///
/// let mut app = Router::named("demo");
/// app.command_with_short("verbose", "v", |_ctx| Ok(()))?
///     .help("Print more.");
/// app.command("name:", |ctx| {
///     println!("Hello {}", ctx.value_or_empty());
///     Ok(())
/// })?;
///
/// let outcome = app.dispatch_args(["demo", "-v", "--name", "Alice"])?;
/// assert_eq!(outcome, RunOutcome::Dispatched(2));
/// # Ok::<(), cling::ClingError>(())
/// ```
pub struct Router {
    app_name: String,
    routes: Vec<Route>,
    options: Options,
    not_found: Option<Box<NotFoundFn>>,
    stdin: Box<dyn StdinReader>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Creates a router named after the running binary.
    pub fn new() -> Self {
        Self::named(program_name(env::args_os().next()))
    }

    /// Creates a router with an explicit application name.
    pub fn named(app_name: impl Into<String>) -> Self {
        let mut options = Options::default();
        options.set(LOG_LEVEL, DEFAULT_LOG_LEVEL);
        options.set(LOG_DESTINATION, "stderr");

        Self {
            app_name: app_name.into(),
            routes: Vec::new(),
            options,
            not_found: None,
            stdin: Box::new(RealStdin),
        }
    }

    /// Overrides option defaults at construction time.
    pub fn with_options<I, K, V>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.options.extend(options);
        self
    }

    /// Replaces the stdin source used by stdin routes registered afterwards.
    pub fn with_stdin<R: StdinReader + 'static>(mut self, reader: R) -> Self {
        self.stdin = Box::new(reader);
        self
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn set_app_name(&mut self, app_name: impl Into<String>) {
        self.app_name = app_name.into();
    }

    // ----- registration -----

    /// Registers a route by long name.
    ///
    /// `long` may carry a trailing `:` to take a value, or be one of the
    /// reserved tokens `":*"` and `":stdin"`.
    pub fn command<F>(&mut self, long: &str, handler: F) -> Result<&mut Route, ClingError>
    where
        F: FnMut(&mut DispatchContext<'_>) -> HandlerResult + 'static,
    {
        let kind = RouteKind::classify(long, None)?;
        self.route(RouteBuilder::new(kind).handler_fn(handler))
    }

    /// Registers a route with a long name and a short alias.
    pub fn command_with_short<F>(
        &mut self,
        long: &str,
        short: &str,
        handler: F,
    ) -> Result<&mut Route, ClingError>
    where
        F: FnMut(&mut DispatchContext<'_>) -> HandlerResult + 'static,
    {
        let kind = RouteKind::classify(long, Some(short))?;
        self.route(RouteBuilder::new(kind).handler_fn(handler))
    }

    /// Registers a route that runs on every pass.
    pub fn always_run<F>(&mut self, handler: F) -> Result<&mut Route, ClingError>
    where
        F: FnMut(&mut DispatchContext<'_>) -> HandlerResult + 'static,
    {
        self.route(RouteBuilder::new(RouteKind::AlwaysRun).handler_fn(handler))
    }

    /// Registers a route that runs on every pass with a stdin cursor.
    ///
    /// Stdin is opened here, so an unavailable stdin fails registration.
    pub fn stdin_reader<F>(&mut self, handler: F) -> Result<&mut Route, ClingError>
    where
        F: FnMut(&mut DispatchContext<'_>) -> HandlerResult + 'static,
    {
        self.route(RouteBuilder::new(RouteKind::StdinReader).handler_fn(handler))
    }

    /// Finalizes and registers a route builder.
    pub fn route(&mut self, builder: RouteBuilder) -> Result<&mut Route, ClingError> {
        let route = builder.build_with(&*self.stdin)?;
        tracing::debug!(route = route.label(), "registered");

        let index = self.routes.len();
        self.routes.push(route);
        Ok(&mut self.routes[index])
    }

    /// Registered routes in dispatch order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    // ----- options -----

    pub fn option(&self, name: &str) -> Option<&Value> {
        self.options.get(name)
    }

    pub fn set_option(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.options.set(name, value);
    }

    pub fn extend_options<I, K, V>(&mut self, options: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.options.extend(options);
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// Loads a TOML config file into the option store.
    pub fn configure(&mut self, path: impl AsRef<Path>) -> Result<(), ClingError> {
        let pairs = config::load(path)?;
        self.options.extend(pairs);
        Ok(())
    }

    // ----- dispatch -----

    /// Runs one dispatch pass over `args`. `args[0]` is the program name.
    ///
    /// Routes are visited in registration order. Option routes dispatch when
    /// their option is present; always-run and stdin routes dispatch on every
    /// pass. Only option and always-run routes count towards a match.
    pub fn dispatch_args<I, T>(&mut self, args: I) -> Result<RunOutcome, ClingError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        if args.is_empty() {
            return Err(ClingError::NotCliContext);
        }

        let raw = getopt::raw_args(args);
        let usage = self.usage();
        let mut invoked = 0;
        let mut matched = false;

        for route in &mut self.routes {
            let span = tracing::debug_span!("route", route = route.label());
            let _enter = span.enter();

            let value = match route.kind() {
                RouteKind::AlwaysRun => {
                    matched = true;
                    None
                }
                RouteKind::StdinReader => None,
                RouteKind::Option(spec) => match getopt::find(spec, &raw) {
                    Some(found) => {
                        matched = true;
                        found.into_value()
                    }
                    None => continue,
                },
            };

            let outcome = route
                .dispatch(value.as_deref(), &mut self.options, &usage)
                .map_err(|source| ClingError::Handler {
                    route: route.label().to_string(),
                    source,
                })?;
            invoked += 1;

            if outcome == Dispatch::Halt {
                tracing::debug!("pass halted");
                return Ok(RunOutcome::Halted);
            }
        }

        if matched {
            Ok(RunOutcome::Dispatched(invoked))
        } else {
            tracing::debug!("no route matched");
            Ok(RunOutcome::NotFound)
        }
    }

    // ----- help -----

    /// The default usage text.
    pub fn usage(&self) -> String {
        help::render_usage(&self.app_name, &self.routes)
    }

    /// Registers the fallback used when nothing dispatched.
    pub fn set_not_found<F>(&mut self, fallback: F)
    where
        F: FnMut(&Router) -> HandlerResult + 'static,
    {
        self.not_found = Some(Box::new(fallback));
    }

    pub fn has_not_found(&self) -> bool {
        self.not_found.is_some()
    }

    /// Invokes the fallback, or writes the usage text to `out`.
    pub fn not_found_with<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<(), ClingError> {
        if let Some(mut fallback) = self.not_found.take() {
            let result = fallback(&*self);
            self.not_found = Some(fallback);
            return result.map_err(|source| ClingError::Handler {
                route: NOT_FOUND_LABEL.to_string(),
                source,
            });
        }

        out.write_all(self.usage().as_bytes())
            .and_then(|()| out.flush())
            .map_err(ClingError::Output)
    }

    /// Prints help (or runs the fallback) and exits with status 0.
    pub fn not_found(&mut self) -> ! {
        match self.not_found_then_exit() {
            Ok(never) => match never {},
            Err(err) => self.exit_failed(&err),
        }
    }

    // ----- run -----

    /// Runs one pass over the process arguments.
    ///
    /// Exits with status 0 after the help path. On error, returns it when the
    /// `debug` option is set; otherwise prints [`FAILURE_MESSAGE`] and exits
    /// with status 1.
    pub fn run(&mut self) -> Result<(), ClingError> {
        self.run_from(env::args_os())
    }

    /// Like [`run`](Self::run) with explicit arguments.
    pub fn run_from<I, T>(&mut self, args: I) -> Result<(), ClingError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let result = match self.dispatch_args(args) {
            Ok(RunOutcome::NotFound) => self.not_found_then_exit().map(|never| match never {}),
            Ok(_) => Ok(()),
            Err(err) => Err(err),
        };

        result.or_else(|err| {
            if self.options.is_debug() {
                return Err(err);
            }
            self.exit_failed(&err)
        })
    }

    fn not_found_then_exit(&mut self) -> Result<Infallible, ClingError> {
        let mut stdout = io::stdout().lock();
        self.not_found_with(&mut stdout)?;
        process::exit(0)
    }

    fn exit_failed(&self, err: &ClingError) -> ! {
        if self.options.is_debug() {
            eprintln!("{err:?}");
        } else {
            tracing::debug!(error = ?err, "run failed");
            eprintln!("{FAILURE_MESSAGE}");
        }
        process::exit(1)
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("app_name", &self.app_name)
            .field("routes", &self.routes)
            .field("options", &self.options)
            .field("has_not_found", &self.not_found.is_some())
            .finish_non_exhaustive()
    }
}

/// Basename of argv[0], or `"app"` when unavailable.
fn program_name(arg0: Option<OsString>) -> String {
    arg0.as_deref()
        .map(Path::new)
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "app".to_string())
}
