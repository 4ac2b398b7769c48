//! Cross-module tests for the GBLN core

use crate::*;
use pretty_assertions::assert_eq;

fn sample_host() -> HostValue {
    HostValue::map(vec![
        ("name".to_string(), HostValue::str("Alice")),
        ("age".to_string(), HostValue::int(30)),
        ("balance".to_string(), HostValue::int(-42_000)),
        ("ratio".to_string(), HostValue::float(0.75)),
        ("active".to_string(), HostValue::bool(true)),
        ("note".to_string(), HostValue::Nil),
        (
            "scores".to_string(),
            HostValue::list(vec![
                HostValue::int(95),
                HostValue::int(300),
                HostValue::int(70_000),
            ]),
        ),
    ])
}

#[test]
fn test_roundtrip_identity() {
    let host = sample_host();
    let value = encode(&host).unwrap();
    assert_eq!(decode(&value).unwrap(), host);
}

#[test]
fn test_roundtrip_preserves_key_order() {
    let host = HostValue::map(vec![
        ("zulu".to_string(), HostValue::int(1)),
        ("alpha".to_string(), HostValue::int(2)),
        ("mike".to_string(), HostValue::int(3)),
    ]);
    let restored = decode(&encode(&host).unwrap()).unwrap();
    let keys: Vec<_> = restored
        .as_map()
        .unwrap()
        .iter()
        .map(|(k, _)| k.as_str())
        .collect();
    assert_eq!(keys, vec!["zulu", "alpha", "mike"]);
}

#[test]
fn test_roundtrip_preserves_element_order() {
    let host = HostValue::list(vec![
        HostValue::str("c"),
        HostValue::str("a"),
        HostValue::str("b"),
    ]);
    assert_eq!(decode(&encode(&host).unwrap()).unwrap(), host);
}

#[test]
fn test_encode_minimal_integer_kinds() {
    let value = encode(&sample_host()).unwrap();
    assert_eq!(value.get("age").unwrap().kind_name(), "u8");
    assert_eq!(value.get("balance").unwrap().kind_name(), "i32");
    let scores = value.get("scores").unwrap();
    assert_eq!(scores.index(0).unwrap().kind_name(), "u8");
    assert_eq!(scores.index(1).unwrap().kind_name(), "u16");
    assert_eq!(scores.index(2).unwrap().kind_name(), "u32");
}

#[test]
fn test_encode_minimal_string_capacity() {
    let value = encode(&HostValue::str("Hello")).unwrap();
    // 5 characters round up to the 8 bucket
    assert_eq!(value.kind_name(), "8");
}

#[test]
fn test_encode_counts_chars_not_bytes() {
    let cjk = encode(&HostValue::str("北京")).unwrap();
    let ascii = encode(&HostValue::str("Hi")).unwrap();
    assert_eq!(cjk.kind_name(), ascii.kind_name());
    assert_eq!(cjk.kind_name(), "2");
}

#[test]
fn test_encode_floats_stay_f64() {
    // Even a value an f32 could hold exactly stays f64 on encode.
    let value = encode(&HostValue::float(0.5)).unwrap();
    assert_eq!(value.kind_name(), "f64");
}

#[test]
fn test_decode_widens_f32() {
    let host = decode(&Value::F32(1.5)).unwrap();
    assert_eq!(host.as_float(), Some(1.5));
}

#[test]
fn test_decode_trusts_nonminimal_tag() {
    // Parsed input may carry a wider tag than the text needs; decode hands
    // the text through without re-shrinking anything.
    let value = Value::str_tagged("Hi", StrCapacity::S64).unwrap();
    assert_eq!(value.kind_name(), "64");
    assert_eq!(decode(&value).unwrap(), HostValue::str("Hi"));
}

#[test]
fn test_str_tag_too_small_rejected() {
    let err = Value::str_tagged("Hello", StrCapacity::S4).unwrap_err();
    assert!(matches!(err, GblnError::Validation { .. }));
}

#[test]
fn test_encode_string_too_long() {
    let host = HostValue::str("x".repeat(1025));
    assert!(matches!(
        encode(&host),
        Err(GblnError::StringTooLong { chars: 1025 })
    ));
}

#[test]
fn test_encode_u64_only_value() {
    let v = i64::MAX as i128 + 1;
    let value = encode(&HostValue::int(v)).unwrap();
    assert_eq!(value.kind_name(), "u64");
    assert_eq!(decode(&value).unwrap().as_int(), Some(v));
}

#[test]
fn test_encode_integer_out_of_range() {
    let host = HostValue::int(u64::MAX as i128 + 1);
    assert!(matches!(
        encode(&host),
        Err(GblnError::IntegerOutOfRange(_))
    ));
}

#[test]
fn test_object_insert_rejects_duplicate() {
    let mut obj = Object::new();
    obj.insert("k", Value::bool(true)).unwrap();
    let err = obj.insert("k", Value::bool(false)).unwrap_err();
    assert!(matches!(err, GblnError::DuplicateKey(ref k) if k == "k"));
    // The first entry is untouched.
    assert_eq!(obj.len(), 1);
    assert_eq!(obj.get("k").and_then(Value::as_bool), Some(true));
}

#[test]
fn test_encode_duplicate_map_key() {
    let host = HostValue::map(vec![
        ("k".to_string(), HostValue::int(1)),
        ("k".to_string(), HostValue::int(2)),
    ]);
    assert!(matches!(
        encode(&host),
        Err(GblnError::DuplicateKey(ref k)) if k == "k"
    ));
}

#[test]
fn test_encode_unsupported_type() {
    let err = encode(&HostValue::opaque("file handle")).unwrap_err();
    assert!(matches!(err, GblnError::UnsupportedType(ref n) if n == "file handle"));
}

#[test]
fn test_failure_is_atomic_in_list() {
    let host = HostValue::list(vec![
        HostValue::int(1),
        HostValue::int(2),
        HostValue::opaque("regex"),
    ]);
    // The whole call fails; no partial array escapes.
    assert!(matches!(
        encode(&host),
        Err(GblnError::UnsupportedType(_))
    ));
}

#[test]
fn test_failure_is_atomic_in_map() {
    let host = HostValue::map(vec![
        ("ok".to_string(), HostValue::int(1)),
        ("bad".to_string(), HostValue::str("x".repeat(2000))),
    ]);
    assert!(matches!(
        encode(&host),
        Err(GblnError::StringTooLong { .. })
    ));
}

#[test]
fn test_nan_has_no_encoding() {
    assert!(matches!(
        encode(&HostValue::float(f64::NAN)),
        Err(GblnError::Serialise(_))
    ));
}

#[test]
fn test_nonfinite_decode_is_corruption() {
    assert!(matches!(
        decode(&Value::F64(f64::INFINITY)),
        Err(GblnError::Extraction { kind: "f64" })
    ));
}

fn nested_list(levels: usize) -> HostValue {
    let mut v = HostValue::int(1);
    for _ in 0..levels {
        v = HostValue::list(vec![v]);
    }
    v
}

#[test]
fn test_depth_limit_on_encode() {
    assert!(encode(&nested_list(MAX_DEPTH)).is_ok());
    assert!(matches!(
        encode(&nested_list(MAX_DEPTH + 1)),
        Err(GblnError::DepthLimit { max }) if max == MAX_DEPTH
    ));
}

#[test]
fn test_depth_limit_on_decode() {
    let mut v = Value::bool(true);
    for _ in 0..MAX_DEPTH + 1 {
        v = Value::Array(vec![v]);
    }
    assert!(matches!(
        decode(&v),
        Err(GblnError::DepthLimit { max }) if max == MAX_DEPTH
    ));
}

#[test]
fn test_kind_name_vocabulary() {
    let cases: Vec<(Value, &str)> = vec![
        (Value::null(), "null"),
        (Value::bool(true), "bool"),
        (Value::I8(-1), "i8"),
        (Value::I16(-200), "i16"),
        (Value::I32(-40_000), "i32"),
        (Value::I64(i64::MIN), "i64"),
        (Value::U8(0), "u8"),
        (Value::U16(300), "u16"),
        (Value::U32(70_000), "u32"),
        (Value::U64(u64::MAX), "u64"),
        (Value::F32(1.0), "f32"),
        (Value::F64(1.0), "f64"),
        (Value::str_auto("hello").unwrap(), "8"),
        (Value::object(Object::new()), "object"),
        (Value::array(vec![]), "array"),
    ];
    for (value, expected) in cases {
        assert_eq!(value.kind_name(), expected);
    }
}

#[test]
fn test_int_builder_matches_selector() {
    assert_eq!(Value::int(256).unwrap().kind_name(), "u16");
    assert_eq!(Value::int(-129).unwrap().kind_name(), "i16");
    assert!(matches!(
        Value::int(i64::MIN as i128 - 1),
        Err(GblnError::IntegerOutOfRange(_))
    ));
}

#[test]
fn test_as_int_across_kinds() {
    assert_eq!(Value::U64(u64::MAX).as_int(), Some(u64::MAX as i128));
    assert_eq!(Value::I8(-5).as_int(), Some(-5));
    assert_eq!(Value::bool(true).as_int(), None);
}

#[test]
fn test_object_from_entries() {
    let obj = Object::from_entries(vec![
        ("a", Value::int(1).unwrap()),
        ("b", Value::int(2).unwrap()),
    ])
    .unwrap();
    let keys: Vec<_> = obj.keys().collect();
    assert_eq!(keys, vec!["a", "b"]);
    assert!(Object::from_entries(vec![
        ("a", Value::null()),
        ("a", Value::null()),
    ])
    .is_err());
}

#[test]
fn test_unicode_roundtrip() {
    let host = HostValue::map(vec![(
        "greeting".to_string(),
        HostValue::str("你好世界"),
    )]);
    let value = encode(&host).unwrap();
    assert_eq!(value.get("greeting").unwrap().kind_name(), "4");
    assert_eq!(decode(&value).unwrap(), host);
}
