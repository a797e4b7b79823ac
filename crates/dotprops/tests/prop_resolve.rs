/// Property-based resolution tests.
///
/// Uses `proptest` to generate random documents and paths and checks the
/// invariants the accessor promises for all of them:
///
/// - a dotted path and the same segments passed separately resolve alike
/// - every listed leaf path resolves to a leaf of the right kind
/// - `_or` accessors return the default for paths that do not resolve
/// - sub-trees resolved with an empty path return the original value
use dotprops::{path, resolve, PathArg, Properties, Value};
use proptest::prelude::*;
use serde_json::{json, Map};

// ============================================================================
// Strategies
// ============================================================================

/// Keys that cannot be confused with the path grammar.
fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z_][a-zA-Z0-9_]{0,8}").unwrap()
}

fn arb_leaf() -> impl Strategy<Value = serde_json::Value> {
    prop_oneof![
        Just(serde_json::Value::Null),
        any::<bool>().prop_map(serde_json::Value::Bool),
        (-1_000_000i64..1_000_000i64).prop_map(|n| json!(n)),
        (-1000.0f64..1000.0f64).prop_map(|f| json!(f)),
        "[a-z ]{0,12}".prop_map(serde_json::Value::String),
    ]
}

/// Nested documents up to four levels deep.
fn arb_document() -> impl Strategy<Value = serde_json::Value> {
    let leaf = arb_leaf();
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(serde_json::Value::Array),
            prop::collection::btree_map(arb_key(), inner, 0..5).prop_map(|m| {
                serde_json::Value::Object(m.into_iter().collect::<Map<_, _>>())
            }),
        ]
    })
}

fn arb_object_document() -> impl Strategy<Value = serde_json::Value> {
    prop::collection::btree_map(arb_key(), arb_document(), 1..5)
        .prop_map(|m| serde_json::Value::Object(m.into_iter().collect()))
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn dotted_and_separate_segments_agree(doc in arb_object_document()) {
        let props = Properties::from(doc);
        for leaf in props.leaf_paths() {
            let segments = dotprops::path::split(&leaf, '.');
            let args: Vec<PathArg<'_>> = segments.iter().map(PathArg::from).collect();
            let dotted = props.get(path![leaf.as_str()]);
            let separate = props.get(&args);
            prop_assert_eq!(dotted.ok(), separate.ok(), "path {}", leaf);
        }
    }

    #[test]
    fn leaf_paths_resolve_to_leaves(doc in arb_object_document()) {
        let props = Properties::from(doc);
        for leaf in props.leaf_paths() {
            let value = props.get(path![leaf.as_str()]);
            prop_assert!(value.is_ok(), "leaf {} did not resolve", leaf);
            let is_leaf = match value.unwrap() {
                Value::Sequence(items) => items.is_empty(),
                Value::Mapping(map) => map.is_empty(),
                _ => true,
            };
            prop_assert!(is_leaf, "leaf {} resolved to a non-empty container", leaf);
        }
    }

    #[test]
    fn int_default_for_missing_paths(doc in arb_object_document(), default in any::<i64>()) {
        let props = Properties::from(doc);
        // Keys never contain '-', so this segment is never present.
        prop_assert_eq!(props.get_int_or(default, path!["no-such-key.x"]), default);
        prop_assert_eq!(props.get_int_or(default, path!["no-such-key", 0]), default);
    }

    #[test]
    fn index_equal_to_length_is_out_of_range(items in prop::collection::vec(arb_leaf(), 0..8)) {
        let len = items.len();
        let root: Value = json!({ "items": items }).into();
        let result = resolve(&root, path!["items", len], '.');
        let out_of_range = matches!(
            result,
            Err(dotprops::PropsError::IndexOutOfRange { index, len: l }) if index == len as i128 && l == len
        );
        prop_assert!(out_of_range);
    }

    #[test]
    fn subtree_round_trip(doc in arb_object_document()) {
        let props = Properties::from(doc);
        for leaf in props.leaf_paths() {
            let original = props.get(path![leaf.as_str()]).unwrap();
            let sub = props.get_tree(path![leaf.as_str()]).unwrap();
            prop_assert_eq!(sub.get(path![""]).unwrap(), original);
        }
    }
}
