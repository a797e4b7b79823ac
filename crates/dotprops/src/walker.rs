//! Resolution of a property path against a document tree.

use crate::error::{PropsError, Result};
use crate::path;
use crate::segment::{coerce, PathArg};
use crate::types::Value;
use std::num::IntErrorKind;
use tracing::trace;

/// Turn path arguments into the canonical segment list.
///
/// Exactly one coerced token is re-split as a delimited path string, so
/// `"a.b"` and `("a", "b")` address the same node. With several tokens each
/// one is already atomic and is never split, which lets callers address keys
/// that contain the delimiter. Empty tokens are dropped in both cases.
pub fn segments(args: &[PathArg<'_>], delimiter: char) -> Result<Vec<String>> {
    let mut tokens = coerce(args)?;
    if let [raw] = tokens.as_slice() {
        return Ok(path::split(raw, delimiter));
    }
    tokens.retain(|t| !t.is_empty());
    Ok(tokens)
}

/// Resolve `args` against `root`.
///
/// An empty path resolves to `root` itself.
///
/// # Errors
///
/// - [`PropsError::UnsupportedSegmentType`] if an argument cannot be coerced
/// - [`PropsError::KeyNotFound`] if a mapping lacks the requested key
/// - [`PropsError::IndexNotNumeric`] if a sequence is addressed by a non-integer
/// - [`PropsError::IndexOutOfRange`] if a sequence index is negative or too large
/// - [`PropsError::PathExhausted`] if segments remain after reaching a scalar
pub fn resolve<'v>(root: &'v Value, args: &[PathArg<'_>], delimiter: char) -> Result<&'v Value> {
    let segs = segments(args, delimiter)?;
    let result = walk(root, &segs);
    match &result {
        Ok(found) => trace!(path = ?segs, kind = %found.kind(), "resolved property"),
        Err(err) => trace!(path = ?segs, error = %err, "property lookup failed"),
    }
    result
}

/// Walk already-canonical segments from `root`.
///
/// Whether a segment is a key or an index depends only on the kind of the
/// node it is applied to: `"1"` is index 1 under a sequence and the literal
/// key `"1"` under a mapping.
pub fn walk<'v, S: AsRef<str>>(root: &'v Value, segments: &[S]) -> Result<&'v Value> {
    let mut cur = root;
    for seg in segments {
        let seg = seg.as_ref();
        cur = match cur {
            Value::Mapping(map) => map.get(seg).ok_or_else(|| PropsError::KeyNotFound {
                key: seg.to_string(),
            })?,
            Value::Sequence(items) => {
                let index = parse_index(seg)?;
                usize::try_from(index)
                    .ok()
                    .and_then(|i| items.get(i))
                    .ok_or(PropsError::IndexOutOfRange {
                        index,
                        len: items.len(),
                    })?
            }
            scalar => {
                return Err(PropsError::PathExhausted {
                    segment: seg.to_string(),
                    kind: scalar.kind(),
                })
            }
        };
    }
    Ok(cur)
}

/// Parse a sequence index. Integers too large to represent saturate, so they
/// still report as out of range rather than as non-numeric.
fn parse_index(seg: &str) -> Result<i128> {
    match seg.parse::<i128>() {
        Ok(index) => Ok(index),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Ok(i128::MAX),
            IntErrorKind::NegOverflow => Ok(i128::MIN),
            _ => Err(PropsError::IndexNotNumeric {
                segment: seg.to_string(),
            }),
        },
    }
}
