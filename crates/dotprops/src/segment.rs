//! Conversion of heterogeneous path arguments into canonical segment text.
//!
//! Callers build paths from a mix of strings, integers, floats, values that
//! implement `Display`, string-producing closures, and values taken from a
//! document. [`PathArg`] is the closed set of accepted inputs; the `From`
//! impls cover the plain cases and [`PathArg::display`] / [`PathArg::call`]
//! wrap the rest explicitly.

use crate::error::{PropsError, Result};
use crate::types::Value;
use std::borrow::Cow;
use std::fmt;

/// One argument of a property path, before coercion to text.
#[derive(Clone)]
pub enum PathArg<'a> {
    Text(Cow<'a, str>),
    Int(i64),
    UInt(u64),
    /// Truncated toward zero.
    Float(f64),
    Display(&'a (dyn fmt::Display + 'a)),
    Call(&'a (dyn Fn() -> String + 'a)),
    /// A value taken from a document. Only strings and numbers are accepted.
    Value(&'a Value),
}

impl<'a> PathArg<'a> {
    /// Wrap anything with a canonical string form.
    pub fn display(value: &'a (dyn fmt::Display + 'a)) -> Self {
        PathArg::Display(value)
    }

    /// Wrap a zero-argument closure that produces the segment text.
    pub fn call(f: &'a (dyn Fn() -> String + 'a)) -> Self {
        PathArg::Call(f)
    }

    /// Produce the canonical text of this argument.
    pub fn to_segment(&self) -> Result<String> {
        match self {
            PathArg::Text(s) => Ok(s.to_string()),
            PathArg::Int(i) => Ok(i.to_string()),
            PathArg::UInt(u) => Ok(u.to_string()),
            PathArg::Float(f) => float_segment(*f),
            PathArg::Display(d) => Ok(d.to_string()),
            PathArg::Call(f) => Ok(f()),
            PathArg::Value(v) => match v {
                Value::String(s) => Ok(s.to_string()),
                Value::Number(n) => float_segment(*n),
                other => Err(PropsError::UnsupportedSegmentType {
                    type_name: other.kind().name(),
                }),
            },
        }
    }
}

fn float_segment(f: f64) -> Result<String> {
    if !f.is_finite() {
        return Err(PropsError::UnsupportedSegmentType {
            type_name: "non-finite float",
        });
    }
    let t = f.trunc();
    // `-0.5` truncates to `-0`, which should read as plain zero.
    if t == 0.0 {
        return Ok("0".to_string());
    }
    Ok(format!("{t:.0}"))
}

/// Coerce every argument to segment text, stopping at the first failure.
pub fn coerce(args: &[PathArg<'_>]) -> Result<Vec<String>> {
    args.iter().map(PathArg::to_segment).collect()
}

impl fmt::Debug for PathArg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathArg::Text(s) => f.debug_tuple("Text").field(s).finish(),
            PathArg::Int(i) => f.debug_tuple("Int").field(i).finish(),
            PathArg::UInt(u) => f.debug_tuple("UInt").field(u).finish(),
            PathArg::Float(x) => f.debug_tuple("Float").field(x).finish(),
            PathArg::Display(d) => f.debug_tuple("Display").field(&d.to_string()).finish(),
            PathArg::Call(_) => f.write_str("Call(..)"),
            PathArg::Value(v) => f.debug_tuple("Value").field(v).finish(),
        }
    }
}

impl<'a> From<&'a str> for PathArg<'a> {
    fn from(s: &'a str) -> Self {
        PathArg::Text(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for PathArg<'a> {
    fn from(s: &'a String) -> Self {
        PathArg::Text(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for PathArg<'_> {
    fn from(s: String) -> Self {
        PathArg::Text(Cow::Owned(s))
    }
}

impl<'a> From<Cow<'a, str>> for PathArg<'a> {
    fn from(s: Cow<'a, str>) -> Self {
        PathArg::Text(s)
    }
}

impl<'a> From<&'a Value> for PathArg<'a> {
    fn from(v: &'a Value) -> Self {
        PathArg::Value(v)
    }
}

macro_rules! from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for PathArg<'_> {
            fn from(i: $t) -> Self {
                PathArg::Int(i as i64)
            }
        }
    )*};
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for PathArg<'_> {
            fn from(u: $t) -> Self {
                PathArg::UInt(u as u64)
            }
        }
    )*};
}

from_signed!(i8, i16, i32, i64, isize);
from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for PathArg<'_> {
    fn from(f: f32) -> Self {
        PathArg::Float(f64::from(f))
    }
}

impl From<f64> for PathArg<'_> {
    fn from(f: f64) -> Self {
        PathArg::Float(f)
    }
}

/// Build a `&[PathArg]` from heterogeneous expressions.
///
/// A single argument is treated as a delimited path string; several
/// arguments are taken as already-separated segments.
///
/// ```
/// use dotprops::{path, Properties};
///
/// let props: Properties = r#"{"level2":{"bool5":[true,false]}}"#.parse().unwrap();
/// assert!(!props.get_bool(path!["level2.bool5[1]"]).unwrap());
/// assert!(!props.get_bool(path!["level2", "bool5", 1]).unwrap());
/// ```
#[macro_export]
macro_rules! path {
    () => {
        &[] as &[$crate::PathArg<'_>]
    };
    ($($seg:expr),+ $(,)?) => {
        &[$($crate::PathArg::from($seg)),+]
    };
}
