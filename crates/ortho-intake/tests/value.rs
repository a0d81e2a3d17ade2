use ortho_intake::value::{normalize_object, normalize_value};
use proptest::prelude::*;
use serde_json::{Value, json};

#[test]
fn booleans_become_marker_or_empty() {
    assert_eq!(normalize_value(&json!(true)), "Ja");
    assert_eq!(normalize_value(&json!(false)), "");
}

#[test]
fn yes_no_vocabulary_is_canonicalized() {
    assert_eq!(normalize_value(&json!("yes")), "Ja");
    assert_eq!(normalize_value(&json!("JA")), "Ja");
    assert_eq!(normalize_value(&json!("no")), "");
    assert_eq!(normalize_value(&json!("Nee")), "");
}

#[test]
fn other_strings_pass_through_unchanged() {
    assert_eq!(normalize_value(&json!("Anders")), "Anders");
    assert_eq!(normalize_value(&json!("other")), "other");
    assert_eq!(normalize_value(&json!("Klittenband")), "Klittenband");
}

#[test]
fn null_is_empty() {
    assert_eq!(normalize_value(&Value::Null), "");
}

#[test]
fn numbers_use_decimal_text() {
    assert_eq!(normalize_value(&json!(42)), "42");
    assert_eq!(normalize_value(&json!(12.5)), "12.5");
}

#[test]
fn whole_floats_drop_their_fraction() {
    assert_eq!(normalize_value(&json!(1.0)), "1");
    assert_eq!(normalize_value(&json!(120.0)), "120");
    assert_eq!(normalize_value(&json!([3.0, 4.5])), r#"["3","4.5"]"#);
}

#[test]
fn arrays_serialize_normalized_elements() {
    assert_eq!(
        normalize_value(&json!([true, "nee", "Anders", null])),
        r#"["Ja","","Anders",""]"#
    );
}

#[test]
fn objects_serialize_normalized_properties() {
    assert_eq!(
        normalize_value(&json!({"b": "ja", "a": false})),
        r#"{"a":"","b":"Ja"}"#
    );
}

#[test]
fn normalize_object_keeps_keys() {
    let input = json!({"diabetes": true, "notes": "Pijn bij afwikkeling", "size": 43});
    let map = normalize_object(input.as_object());

    assert_eq!(map.len(), 3);
    assert_eq!(map.get("diabetes"), Some("Ja"));
    assert_eq!(map.get("notes"), Some("Pijn bij afwikkeling"));
    assert_eq!(map.get("size"), Some("43"));
}

#[test]
fn normalize_object_of_nothing_is_empty() {
    assert!(normalize_object(None).is_empty());
}

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        prop::sample::select(vec!["yes", "Yes", "ja", "JA", "no", "NO", "nee", "Nee", "", "Ja"])
            .prop_map(|s| Value::String(s.to_string())),
        "\\PC{0,16}".prop_map(Value::String),
    ]
}

proptest! {
    #[test]
    fn normalization_is_idempotent(value in scalar()) {
        let once = normalize_value(&value);
        let twice = normalize_value(&Value::String(once.clone()));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn booleans_are_canonical(b in any::<bool>()) {
        let expected = if b { "Ja" } else { "" };
        prop_assert_eq!(normalize_value(&Value::Bool(b)), expected);
    }
}
