//! # dotprops
//!
//! Dotted-path property access over JSON documents.
//!
//! A document is decoded once into an immutable [`Value`] tree and wrapped in
//! [`Properties`]. Values are addressed either by one delimited path string
//! (`"level2.bool5[1]"`) or by separate segments (`"level2", "bool5", 1`), and
//! read back as booleans, integers, floats, strings, sub-trees, or any
//! `serde` type.
//!
//! ## Quick start
//!
//! ```rust
//! use dotprops::{path, Properties};
//!
//! let json = r#"{"bool1":true,"level2":{"bool3":true,"bool5":[true,false]}}"#;
//! let props: Properties = json.parse().unwrap();
//!
//! assert!(props.get_bool(path!["bool1"]).unwrap());
//! assert!(!props.get_bool(path!["level2.bool5[1]"]).unwrap());
//! assert!(!props.get_bool(path!["level2", "bool5", 1]).unwrap());
//! assert!(props.get_bool_or(true, path!["level2", "bool6"]));
//!
//! let level2 = props.get_tree(path!["level2"]).unwrap();
//! assert!(level2.get_bool(path!["bool3"]).unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`properties`] — `Properties` and its typed accessors
//! - [`file`] — `ConfigFile`, properties loaded from a JSON file
//! - [`path`] — path string grammar (`split`, `leaf_paths`)
//! - [`segment`] — `PathArg` and coercion of path arguments to text
//! - [`walker`] — resolution of segments against a tree
//! - [`types`] — the `Value` tree
//! - [`error`] — error types

pub mod error;
pub mod file;
pub mod path;
pub mod properties;
pub mod segment;
pub mod types;
pub mod walker;

pub use error::PropsError;
pub use file::ConfigFile;
pub use properties::Properties;
pub use segment::PathArg;
pub use types::{Value, ValueKind};
pub use walker::resolve;
