//! Path string grammar.
//!
//! A path is a list of tokens joined by a delimiter (`.` by default). A token
//! may carry an array index suffix written directly after the key:
//!
//! - `"bool1"` -- one segment
//! - `"level2.bool3"` -- `["level2", "bool3"]`
//! - `"level2.bool5[1]"` -- `["level2", "bool5", "1"]`
//! - `"..a..b."` -- `["a", "b"]` (empty tokens are dropped)

use crate::types::Value;

/// The delimiter used when none is configured.
pub const DEFAULT_DELIMITER: char = '.';

/// Split a raw path string into canonical segments.
///
/// Each non-empty token is checked against the anchored form
/// `<name>[<digits>]` with a non-empty name. A match emits `name` followed by
/// `digits`; anything else is emitted verbatim.
///
/// # Examples
///
/// ```
/// use dotprops::path::split;
///
/// assert_eq!(split("level2.bool5[1]", '.'), vec!["level2", "bool5", "1"]);
/// assert_eq!(split(".a..b.", '.'), vec!["a", "b"]);
/// assert_eq!(split("[1]", '.'), vec!["[1]"]);
/// ```
pub fn split(raw: &str, delimiter: char) -> Vec<String> {
    let mut segments = Vec::new();
    for token in raw.split(delimiter).filter(|t| !t.is_empty()) {
        match split_index(token) {
            Some((name, index)) => {
                segments.push(name.to_string());
                segments.push(index.to_string());
            }
            None => segments.push(token.to_string()),
        }
    }
    segments
}

/// Match `token` against `<name>[<digits>]`.
///
/// The name is greedy, so `a[1][2]` splits into `a[1]` and `2`.
fn split_index(token: &str) -> Option<(&str, &str)> {
    let body = token.strip_suffix(']')?;
    let open = body.rfind('[')?;
    let (name, index) = (&body[..open], &body[open + 1..]);
    if name.is_empty() || index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((name, index))
}

/// List the path of every leaf in `value`, in path string syntax.
///
/// Scalars and empty containers are leaves. Mapping keys are visited in
/// sorted order and sequence elements in index order, so the output is
/// deterministic. A scalar root yields a single empty path.
///
/// Keys that contain the delimiter, are empty, or themselves look like
/// `name[digits]` produce paths that do not resolve back to the same leaf.
pub fn leaf_paths(value: &Value, delimiter: char) -> Vec<String> {
    let mut out = Vec::new();
    collect_leaves(value, delimiter, &mut String::new(), &mut out);
    out
}

fn collect_leaves(value: &Value, delimiter: char, prefix: &mut String, out: &mut Vec<String>) {
    match value {
        Value::Mapping(map) if !map.is_empty() => {
            for (key, child) in map.iter() {
                let len = prefix.len();
                if !prefix.is_empty() {
                    prefix.push(delimiter);
                }
                prefix.push_str(key);
                collect_leaves(child, delimiter, prefix, out);
                prefix.truncate(len);
            }
        }
        Value::Sequence(items) if !items.is_empty() => {
            for (i, child) in items.iter().enumerate() {
                let len = prefix.len();
                if prefix.is_empty() || prefix.ends_with(']') {
                    // Only one index suffix fits on a token; nested ones get their own.
                    if !prefix.is_empty() {
                        prefix.push(delimiter);
                    }
                    prefix.push_str(&i.to_string());
                } else {
                    prefix.push('[');
                    prefix.push_str(&i.to_string());
                    prefix.push(']');
                }
                collect_leaves(child, delimiter, prefix, out);
                prefix.truncate(len);
            }
        }
        _ => out.push(prefix.clone()),
    }
}
