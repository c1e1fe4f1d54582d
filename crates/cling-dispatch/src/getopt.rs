//! getopt-style scanning of process arguments.
//!
//! Each route is matched independently: [`occurrences`] scans the whole
//! argument list for one [`OptionSpec`] and ignores everything else. This
//! keeps every route's flag/value arity separate from its neighbours.
//!
//! Scanning rules:
//!
//! - `args[0]` is the program name and is skipped.
//! - `--` ends the scan.
//! - Positional arguments and unknown options are skipped (GNU-style
//!   permutation), not treated as the end of options. This differs from
//!   POSIX `getopt`, which stops at the first non-option: a per-route scan
//!   cannot tell another route's option value from a positional argument,
//!   so stopping early would hide options that follow such values.
//! - Long options: `--name`, `--name=value`, `--name value`.
//! - Short options may be clustered (`-vx`); a value-taking short option
//!   takes the rest of its cluster (`-nAlice`) or the next argument
//!   (`-n Alice`).
//! - A missing required value, or a value given to a flag (`--verbose=1`),
//!   is not an error; that occurrence simply does not match.

use std::ffi::OsStr;

use clap_lex::RawArgs;

use crate::option::{Arity, OptionSpec};

/// One occurrence of an option on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionMatch {
    key: String,
    value: Option<String>,
}

impl OptionMatch {
    fn flag(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }

    fn with_value(key: impl Into<String>, value: &OsStr) -> Self {
        Self {
            key: key.into(),
            value: Some(value.to_string_lossy().into_owned()),
        }
    }

    /// The spelling that matched: the long name or the short letter.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The captured value; `None` for flags.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn into_value(self) -> Option<String> {
        self.value
    }
}

/// Builds the raw argument list once per pass.
pub fn raw_args<I, T>(args: I) -> RawArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString>,
{
    RawArgs::new(args)
}

/// Returns every occurrence of `spec` in `raw`, in argument order.
pub fn occurrences(spec: &OptionSpec, raw: &RawArgs) -> Vec<OptionMatch> {
    let mut found = Vec::new();
    let mut cursor = raw.cursor();
    let _bin = raw.next_os(&mut cursor);

    while let Some(arg) = raw.next(&mut cursor) {
        if arg.is_escape() {
            break;
        }

        if let Some((name, inline)) = arg.to_long() {
            let Ok(name) = name else { continue };
            if name != spec.long() {
                continue;
            }
            match (spec.arity(), inline) {
                (Arity::Flag, None) => found.push(OptionMatch::flag(name)),
                (Arity::Flag, Some(_)) => {
                    tracing::trace!(option = name, "flag given an inline value, skipped");
                }
                (Arity::Value, Some(value)) => found.push(OptionMatch::with_value(name, value)),
                (Arity::Value, None) => match raw.next_os(&mut cursor) {
                    Some(value) => found.push(OptionMatch::with_value(name, value)),
                    None => tracing::trace!(option = name, "missing required value"),
                },
            }
        } else if let Some(mut shorts) = arg.to_short() {
            while let Some(flag) = shorts.next_flag() {
                let Ok(flag) = flag else { break };
                if Some(flag) != spec.short() {
                    continue;
                }
                let key = flag.to_string();
                match spec.arity() {
                    Arity::Flag => found.push(OptionMatch::flag(key)),
                    Arity::Value => {
                        let value = shorts
                            .next_value_os()
                            .filter(|rest| !rest.is_empty())
                            .or_else(|| raw.next_os(&mut cursor));
                        match value {
                            Some(value) => found.push(OptionMatch::with_value(key, value)),
                            None => tracing::trace!(option = %key, "missing required value"),
                        }
                        break;
                    }
                }
            }
        }
    }

    found
}

/// Returns the last occurrence of `spec`, if any.
///
/// A repeated option dispatches once, with its final value.
pub fn find(spec: &OptionSpec, raw: &RawArgs) -> Option<OptionMatch> {
    let found = occurrences(spec, raw).pop();
    tracing::trace!(option = spec.long(), matched = found.is_some(), "scanned");
    found
}
