//! Resolution tests: how segments walk mappings, sequences and scalars, and
//! which error each failure produces.
use dotprops::{path, resolve, PathArg, Properties, PropsError, Value, ValueKind};

fn doc() -> Value {
    let props: Properties =
        r#"{"bool1":true,"bool2":false,"level2":{"bool3":true,"bool5":[true,false]},"1":"key-one","list":[["a","b"],{"1":"nested"}]}"#
            .parse()
            .unwrap();
    props.into_root()
}

#[test]
fn empty_path_returns_root() {
    let root = doc();
    assert_eq!(resolve(&root, path![], '.').unwrap(), &root);
    assert_eq!(resolve(&root, path![""], '.').unwrap(), &root);
    assert_eq!(resolve(&root, path!["..."], '.').unwrap(), &root);
}

#[test]
fn dotted_and_segment_forms_agree() {
    let root = doc();
    assert_eq!(
        resolve(&root, path!["level2.bool3"], '.').unwrap(),
        resolve(&root, path!["level2", "bool3"], '.').unwrap()
    );
}

#[test]
fn index_past_end_is_out_of_range() {
    let root = doc();
    let err = resolve(&root, path!["level2.bool5[2]"], '.').unwrap_err();
    assert!(matches!(err, PropsError::IndexOutOfRange { index: 2, len: 2 }));
}

#[test]
fn negative_index_is_out_of_range() {
    let root = doc();
    let err = resolve(&root, path!["level2", "bool5", -1], '.').unwrap_err();
    assert!(matches!(err, PropsError::IndexOutOfRange { index: -1, .. }));
}

#[test]
fn non_numeric_index_on_sequence() {
    let root = doc();
    let err = resolve(&root, path!["level2", "bool5", "first"], '.').unwrap_err();
    match err {
        PropsError::IndexNotNumeric { segment } => assert_eq!(segment, "first"),
        other => panic!("expected IndexNotNumeric, got {other:?}"),
    }
}

#[test]
fn missing_key_names_the_key() {
    let root = doc();
    let err = resolve(&root, path!["level2.bool6"], '.').unwrap_err();
    match err {
        PropsError::KeyNotFound { key } => assert_eq!(key, "bool6"),
        other => panic!("expected KeyNotFound, got {other:?}"),
    }
}

#[test]
fn numeric_segment_is_a_key_under_a_mapping() {
    let root = doc();
    assert_eq!(
        resolve(&root, path![1], '.').unwrap().as_str(),
        Some("key-one")
    );
    assert_eq!(
        resolve(&root, path!["list", 1, 1], '.').unwrap().as_str(),
        Some("nested")
    );
}

#[test]
fn nested_sequences() {
    let root = doc();
    assert_eq!(
        resolve(&root, path!["list[0].1"], '.').unwrap().as_str(),
        Some("b")
    );
    assert_eq!(
        resolve(&root, path!["list", 0, 0], '.').unwrap().as_str(),
        Some("a")
    );
}

#[test]
fn descending_into_scalar_is_path_exhausted() {
    let root = doc();
    let err = resolve(&root, path!["bool1.deeper"], '.').unwrap_err();
    match err {
        PropsError::PathExhausted { segment, kind } => {
            assert_eq!(segment, "deeper");
            assert_eq!(kind, ValueKind::Bool);
        }
        other => panic!("expected PathExhausted, got {other:?}"),
    }
}

#[test]
fn multiple_segments_are_not_resplit() {
    let root: Value = serde_json::json!({"a.b": {"c": 1}, "a": {"b": {"c": 2}}}).into();
    assert_eq!(resolve(&root, path!["a.b", "c"], '.').unwrap().as_f64(), Some(1.0));
    assert_eq!(resolve(&root, path!["a.b.c"], '.').unwrap().as_f64(), Some(2.0));
}

#[test]
fn single_display_argument_is_resplit() {
    let root = doc();
    let name = String::from("level2.bool5[0]");
    let arg = PathArg::display(&name);
    assert_eq!(resolve(&root, &[arg], '.').unwrap().as_bool(), Some(true));
}

#[test]
fn unsupported_argument_stops_resolution() {
    let root = doc();
    let flag = Value::Bool(true);
    let err = resolve(&root, path!["level2", &flag], '.').unwrap_err();
    assert!(matches!(
        err,
        PropsError::UnsupportedSegmentType {
            type_name: "boolean"
        }
    ));
}

#[test]
fn custom_delimiter() {
    let root = doc();
    assert_eq!(
        resolve(&root, path!["level2/bool5[1]"], '/').unwrap().as_bool(),
        Some(false)
    );
    assert!(resolve(&root, path!["level2.bool3"], '/').is_err());
}

#[test]
fn resolution_is_deterministic() {
    let root = doc();
    for _ in 0..3 {
        assert!(matches!(
            resolve(&root, path!["level2.bool5[5]"], '.'),
            Err(PropsError::IndexOutOfRange { index: 5, len: 2 })
        ));
    }
}

#[test]
fn empty_segments_are_dropped() {
    let root: Value = serde_json::json!({"a": {"": 5, "b": [7]}}).into();
    assert_eq!(
        resolve(&root, path!["a", "", "b"], '.').unwrap(),
        resolve(&root, path!["a.b"], '.').unwrap()
    );
    assert_eq!(
        dotprops::walker::segments(path!["a", ""], '.').unwrap(),
        vec!["a"]
    );
    assert!(resolve(&root, path!["a", ""], '.').unwrap().as_mapping().is_some());
    assert_eq!(
        resolve(&root, path!["a", "b", ""], '.').unwrap().as_sequence().map(<[Value]>::len),
        Some(1)
    );
}

#[test]
fn index_too_large_for_any_integer_is_out_of_range() {
    let root = doc();
    assert!(matches!(
        resolve(&root, path!["level2", "bool5", u64::MAX], '.'),
        Err(PropsError::IndexOutOfRange { index, len: 2 }) if index == i128::from(u64::MAX)
    ));
    let huge = "9".repeat(60);
    assert!(matches!(
        resolve(&root, path!["level2", "bool5", huge.as_str()], '.'),
        Err(PropsError::IndexOutOfRange { index: i128::MAX, .. })
    ));
    assert!(matches!(
        resolve(&root, path!["level2", "bool5", format!("-{huge}")], '.'),
        Err(PropsError::IndexOutOfRange { index: i128::MIN, .. })
    ));
}
