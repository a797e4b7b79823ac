//! Typed, read-only access to a decoded JSON document.
//!
//! [`Properties`] wraps a single [`Value`]. Every accessor takes a path as a
//! slice of [`PathArg`]s, normally built with the [`crate::path!`] macro:
//!
//! ```
//! use dotprops::{path, Properties};
//!
//! let props: Properties = r#"{"level2":{"mixed3":["one",10]}}"#.parse().unwrap();
//! assert_eq!(props.get_string(path!["level2.mixed3[0]"]).unwrap(), "one");
//! assert_eq!(props.get_int(path!["level2", "mixed3", 1]).unwrap(), 10);
//! assert_eq!(props.get_int_or(7, path!["level2.missing"]), 7);
//! ```
//!
//! The `get_*` forms report exactly what went wrong. The `get_*_or` forms
//! return the supplied default on any failure, so they cannot tell an absent
//! property from one with the wrong type.

use crate::error::{PropsError, Result};
use crate::path::{self, DEFAULT_DELIMITER};
use crate::segment::PathArg;
use crate::types::{Value, ValueKind};
use crate::walker;
use serde::de::DeserializeOwned;
use std::io::Read;
use std::str::FromStr;
use tracing::debug;

/// An immutable property tree.
///
/// Cloning is cheap: the underlying document is reference counted and
/// sub-trees returned by [`Properties::get_tree`] share it.
#[derive(Debug, Clone, PartialEq)]
pub struct Properties {
    root: Value,
    delimiter: char,
}

impl Properties {
    /// Wrap an already decoded value, using the default `.` delimiter.
    pub fn new(root: Value) -> Self {
        Self {
            root,
            delimiter: DEFAULT_DELIMITER,
        }
    }

    /// Decode a JSON document from a reader.
    ///
    /// # Errors
    ///
    /// Returns [`PropsError::Json`] if the stream is not a valid JSON document.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let json: serde_json::Value = serde_json::from_reader(reader)?;
        Ok(Self::loaded(json.into()))
    }

    /// Decode a JSON document from bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let json: serde_json::Value = serde_json::from_slice(bytes)?;
        Ok(Self::loaded(json.into()))
    }

    fn loaded(root: Value) -> Self {
        debug!(kind = %root.kind(), "decoded property document");
        Self::new(root)
    }

    /// Use `delimiter` instead of `.` when splitting path strings.
    /// Sub-trees inherit the delimiter.
    ///
    /// # Errors
    ///
    /// Returns [`PropsError::InvalidDelimiter`] for `[`, `]` and ASCII digits,
    /// which would break the index suffix syntax.
    pub fn with_delimiter(mut self, delimiter: char) -> Result<Self> {
        if matches!(delimiter, '[' | ']') || delimiter.is_ascii_digit() {
            return Err(PropsError::InvalidDelimiter { delimiter });
        }
        self.delimiter = delimiter;
        Ok(self)
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn into_root(self) -> Value {
        self.root
    }

    /// Resolve `path` to the raw value at that location.
    pub fn get(&self, path: &[PathArg<'_>]) -> Result<&Value> {
        walker::resolve(&self.root, path, self.delimiter)
    }

    /// Whether `path` resolves to any value, including `null`.
    pub fn contains(&self, path: &[PathArg<'_>]) -> bool {
        self.get(path).is_ok()
    }

    pub fn get_bool(&self, path: &[PathArg<'_>]) -> Result<bool> {
        let value = self.get(path)?;
        value.as_bool().ok_or_else(|| mismatch(ValueKind::Bool, value))
    }

    pub fn get_bool_or(&self, default: bool, path: &[PathArg<'_>]) -> bool {
        self.get_bool(path).unwrap_or(default)
    }

    /// Resolve a number and truncate it toward zero.
    ///
    /// Values outside the `i64` range saturate.
    pub fn get_int(&self, path: &[PathArg<'_>]) -> Result<i64> {
        self.get_float(path).map(|f| f.trunc() as i64)
    }

    pub fn get_int_or(&self, default: i64, path: &[PathArg<'_>]) -> i64 {
        self.get_int(path).unwrap_or(default)
    }

    pub fn get_float(&self, path: &[PathArg<'_>]) -> Result<f64> {
        let value = self.get(path)?;
        value.as_f64().ok_or_else(|| mismatch(ValueKind::Number, value))
    }

    pub fn get_float_or(&self, default: f64, path: &[PathArg<'_>]) -> f64 {
        self.get_float(path).unwrap_or(default)
    }

    pub fn get_string(&self, path: &[PathArg<'_>]) -> Result<&str> {
        let value = self.get(path)?;
        value.as_str().ok_or_else(|| mismatch(ValueKind::String, value))
    }

    pub fn get_string_or<'a>(&'a self, default: &'a str, path: &[PathArg<'_>]) -> &'a str {
        self.get_string(path).unwrap_or(default)
    }

    /// Wrap the value at `path`, of any kind, in a new tree sharing it.
    pub fn get_tree(&self, path: &[PathArg<'_>]) -> Result<Properties> {
        let value = self.get(path)?;
        Ok(Properties {
            root: value.clone(),
            delimiter: self.delimiter,
        })
    }

    pub fn get_tree_or(&self, default: Properties, path: &[PathArg<'_>]) -> Properties {
        self.get_tree(path).unwrap_or(default)
    }

    /// Deserialize the value at `path` into any `serde` type.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotprops::{path, Properties};
    ///
    /// let props: Properties = r#"{"server":{"ports":[80,443]}}"#.parse().unwrap();
    /// let ports: Vec<u16> = props.get_as(path!["server.ports"]).unwrap();
    /// assert_eq!(ports, vec![80, 443]);
    /// ```
    pub fn get_as<T: DeserializeOwned>(&self, path: &[PathArg<'_>]) -> Result<T> {
        let value = self.get(path)?;
        let json = serde_json::to_value(value)?;
        Ok(serde_json::from_value(json)?)
    }

    /// Every leaf path of this tree in path string syntax. See [`path::leaf_paths`].
    pub fn leaf_paths(&self) -> Vec<String> {
        path::leaf_paths(&self.root, self.delimiter)
    }
}

fn mismatch(expected: ValueKind, actual: &Value) -> PropsError {
    PropsError::TypeMismatch {
        expected,
        actual: actual.kind(),
    }
}

impl FromStr for Properties {
    type Err = PropsError;

    fn from_str(s: &str) -> Result<Self> {
        let json: serde_json::Value = serde_json::from_str(s)?;
        Ok(Self::loaded(json.into()))
    }
}

impl From<Value> for Properties {
    fn from(root: Value) -> Self {
        Self::new(root)
    }
}

impl From<serde_json::Value> for Properties {
    fn from(json: serde_json::Value) -> Self {
        Self::new(json.into())
    }
}
