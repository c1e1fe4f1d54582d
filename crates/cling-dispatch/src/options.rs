//! Process-wide option store.
//!
//! Options are plain key/value pairs. They are seeded with defaults,
//! overwritten by explicit calls, and bulk-loaded from configuration files.
//! Handlers see the same store through
//! [`DispatchContext::options_mut`](crate::DispatchContext::options_mut).

use std::collections::BTreeMap;

use serde_json::Value;

/// Name of the debug option. When true, `run` returns errors to the caller
/// instead of printing a generic failure line.
pub const DEBUG: &str = "debug";

/// Key/value option store.
///
/// `Options::default()` is seeded with `debug = false`.
///
/// # Example
///
/// ```
/// use cling_dispatch::Options;
///
/// let mut options = Options::default();
/// assert!(!options.is_debug());
///
/// options.set("debug", true);
/// options.set("log.dir", "/tmp");
/// assert!(options.is_debug());
/// assert_eq!(options.get_str("log.dir"), Some("/tmp"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    values: BTreeMap<String, Value>,
}

impl Default for Options {
    fn default() -> Self {
        let mut options = Self::empty();
        options.set(DEBUG, false);
        options
    }
}

impl Options {
    /// Creates a store with no seeded values.
    pub fn empty() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Reads a value. Returns `None` if it was never set.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Overwrites a value, returning the previous one.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(name.into(), value.into())
    }

    /// Reads a string value.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Reads a value as a boolean.
    ///
    /// Besides JSON booleans this accepts numbers (non-zero is true) and the
    /// usual config-file spellings: `1/0`, `true/false`, `yes/no`, `on/off`.
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        match self.get(name)? {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => n.as_f64().map(|n| n != 0.0),
            Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Some(true),
                "" | "0" | "false" | "no" | "off" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// Returns the debug flag, false when unset or unreadable.
    pub fn is_debug(&self) -> bool {
        self.get_bool(DEBUG).unwrap_or(false)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates options in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> Extend<(K, V)> for Options
where
    K: Into<String>,
    V: Into<Value>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.set(name, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Options
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Self::empty();
        options.extend(iter);
        options
    }
}
