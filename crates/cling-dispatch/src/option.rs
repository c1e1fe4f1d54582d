//! Option specs and route classification.
//!
//! A route is one of three kinds:
//!
//! | Kind | Declared as | Dispatched |
//! |------|-------------|------------|
//! | [`RouteKind::Option`] | `"verbose"`, `"name:"` | when the option appears on argv |
//! | [`RouteKind::AlwaysRun`] | [`ALWAYS_RUN_TOKEN`] | on every pass |
//! | [`RouteKind::StdinReader`] | [`STDIN_TOKEN`] | on every pass, with a stdin cursor |
//!
//! A trailing [`VALUE_MARKER`] on either the long or the short spelling marks
//! the option as taking a value.

use std::fmt;

use crate::RouteError;

/// Trailing marker that makes an option take a value (`"name:"`).
pub const VALUE_MARKER: char = ':';

/// Reserved long name for a route that runs on every pass.
pub const ALWAYS_RUN_TOKEN: &str = ":*";

/// Reserved long name for a route that reads stdin.
pub const STDIN_TOKEN: &str = ":stdin";

/// Whether an option is a bare flag or requires a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Arity {
    /// `--verbose`, `-v`
    #[default]
    Flag,
    /// `--name=Alice`, `--name Alice`, `-nAlice`, `-n Alice`
    Value,
}

/// The long/short spelling of a normal option route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    long: String,
    short: Option<char>,
    arity: Arity,
}

impl OptionSpec {
    /// Parses a long name and optional short alias, markers included.
    ///
    /// An empty short alias is treated as absent.
    pub fn new(long: &str, short: Option<&str>) -> Result<Self, RouteError> {
        let (long_name, long_marked) = strip_marker(long);
        if long_name.is_empty() {
            return Err(RouteError::invalid_option(long, "long option name is empty"));
        }
        if long_name.starts_with(VALUE_MARKER) {
            return Err(RouteError::invalid_option(
                long,
                "names starting with ':' are reserved",
            ));
        }

        let (short, short_marked) = match short.filter(|s| !s.is_empty()) {
            None => (None, false),
            Some(raw) => {
                let (name, marked) = strip_marker(raw);
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c != '-' => (Some(c), marked),
                    _ => {
                        return Err(RouteError::invalid_option(
                            raw,
                            "short option must be a single character",
                        ))
                    }
                }
            }
        };

        let arity = if long_marked || short_marked {
            Arity::Value
        } else {
            Arity::Flag
        };

        Ok(Self {
            long: long_name.to_string(),
            short,
            arity,
        })
    }

    /// Long name without the value marker.
    pub fn long(&self) -> &str {
        &self.long
    }

    /// Short alias without the value marker.
    pub fn short(&self) -> Option<char> {
        self.short
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Returns true if the option requires a value.
    pub fn takes_value(&self) -> bool {
        self.arity == Arity::Value
    }

    /// Returns true if `key` is this option's long name or short alias.
    pub fn matches_key(&self, key: &str) -> bool {
        if key == self.long {
            return true;
        }
        let mut chars = key.chars();
        matches!((chars.next(), chars.next(), self.short), (Some(c), None, Some(s)) if c == s)
    }
}

impl fmt::Display for OptionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--{}", self.long)?;
        if self.takes_value() {
            write!(f, "=<VALUE>")?;
        }
        Ok(())
    }
}

fn strip_marker(raw: &str) -> (&str, bool) {
    let name = raw.trim_end_matches(VALUE_MARKER);
    (name, name.len() != raw.len())
}

/// What a route responds to. Fixed when the route is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteKind {
    /// Dispatched when its option is present on argv.
    Option(OptionSpec),
    /// Dispatched on every pass, with no value.
    AlwaysRun,
    /// Dispatched on every pass; owns a stdin cursor.
    StdinReader,
}

impl RouteKind {
    /// A normal option route.
    pub fn option(long: &str, short: Option<&str>) -> Result<Self, RouteError> {
        OptionSpec::new(long, short).map(Self::Option)
    }

    /// Classifies a long name, mapping the reserved tokens to their kinds.
    ///
    /// The short alias is ignored for reserved tokens.
    pub fn classify(long: &str, short: Option<&str>) -> Result<Self, RouteError> {
        match long {
            ALWAYS_RUN_TOKEN => Ok(Self::AlwaysRun),
            STDIN_TOKEN => Ok(Self::StdinReader),
            _ => Self::option(long, short),
        }
    }

    /// Returns true for normal option routes, the only ones listed in help.
    pub fn is_option(&self) -> bool {
        matches!(self, Self::Option(_))
    }

    pub fn as_option(&self) -> Option<&OptionSpec> {
        match self {
            Self::Option(spec) => Some(spec),
            _ => None,
        }
    }

    /// Human-readable name used in logs and errors.
    pub fn label(&self) -> &str {
        match self {
            Self::Option(spec) => spec.long(),
            Self::AlwaysRun => ALWAYS_RUN_TOKEN,
            Self::StdinReader => STDIN_TOKEN,
        }
    }
}
