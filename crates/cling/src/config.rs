//! Configuration loading from disk.
//!
//! A config file is TOML. Nested tables are flattened into dotted option
//! names, so
//!
//! ```toml
//! debug = true
//!
//! [log]
//! level = "info"
//! ```
//!
//! yields `debug = true` and `log.level = "info"`.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Loads a TOML file as flattened `(name, value)` pairs.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<(String, Value)>, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let pairs = parse(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), options = pairs.len(), "config loaded");
    Ok(pairs)
}

/// Parses TOML text into flattened pairs, in key order.
pub fn parse(content: &str) -> Result<Vec<(String, Value)>, toml::de::Error> {
    let table: toml::Table = toml::from_str(content)?;
    let mut pairs = Vec::new();
    flatten("", table, &mut pairs);
    Ok(pairs)
}

fn flatten(prefix: &str, table: toml::Table, out: &mut Vec<(String, Value)>) {
    for (key, value) in table {
        let name = if prefix.is_empty() {
            key
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            toml::Value::Table(inner) => flatten(&name, inner, out),
            other => out.push((name, to_json(other))),
        }
    }
}

fn to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => Value::from(f),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(to_json).collect()),
        toml::Value::Table(table) => {
            Value::Object(table.into_iter().map(|(k, v)| (k, to_json(v))).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn top_level_keys_stay_flat() {
        let pairs = parse("debug = true\nname = \"demo\"\n").unwrap();
        assert_eq!(
            pairs,
            vec![
                ("debug".to_string(), json!(true)),
                ("name".to_string(), json!("demo")),
            ]
        );
    }

    #[test]
    fn sections_become_dotted_names() {
        let pairs = parse("[log]\nlevel = \"info\"\n[db.pool]\nsize = 4\n").unwrap();
        assert_eq!(
            pairs,
            vec![
                ("db.pool.size".to_string(), json!(4)),
                ("log.level".to_string(), json!("info")),
            ]
        );
    }

    #[test]
    fn arrays_and_floats_keep_shape() {
        let pairs = parse("tags = [\"a\", \"b\"]\nratio = 0.5\n").unwrap();
        assert_eq!(pairs[0], ("ratio".to_string(), json!(0.5)));
        assert_eq!(pairs[1], ("tags".to_string(), json!(["a", "b"])));
    }

    #[test]
    fn datetimes_become_strings() {
        let pairs = parse("when = 1979-05-27\n").unwrap();
        assert_eq!(pairs[0].1, json!("1979-05-27"));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(parse("not = [valid").is_err());
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}
