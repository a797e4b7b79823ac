//! Error types for property resolution and document loading.

use crate::types::ValueKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a document or resolving a property path.
#[derive(Error, Debug)]
pub enum PropsError {
    /// A path argument could not be turned into a segment (e.g. a boolean
    /// JSON value or a non-finite float).
    #[error("Unsupported path segment type: {type_name}")]
    UnsupportedSegmentType { type_name: &'static str },

    /// A mapping did not contain the requested key.
    #[error("Key not found: '{key}'")]
    KeyNotFound { key: String },

    /// A sequence index was negative or past the end of the sequence.
    #[error("Index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: i128, len: usize },

    /// A segment applied to a sequence did not parse as a base-10 integer.
    #[error("Sequence index is not numeric: '{segment}'")]
    IndexNotNumeric { segment: String },

    /// The delimiter would collide with the `name[digits]` index syntax.
    #[error("Invalid path delimiter: '{delimiter}'")]
    InvalidDelimiter { delimiter: char },

    /// Segments remained after the walk reached a scalar value.
    #[error("Cannot descend into {kind} with segment '{segment}'")]
    PathExhausted { segment: String, kind: ValueKind },

    /// The resolved value had a different kind than the accessor expects.
    #[error("Type mismatch: expected {expected}, found {actual}")]
    TypeMismatch {
        expected: ValueKind,
        actual: ValueKind,
    },

    /// The input was not valid JSON, or a value could not be deserialized
    /// into the requested type.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A config file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias used throughout dotprops.
pub type Result<T> = std::result::Result<T, PropsError>;
