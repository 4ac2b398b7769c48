//! JSON <-> host value conversion
//!
//! Convenience bridge so an embedding application can push ordinary JSON
//! through the converter. `preserve_order` is enabled on serde_json: GBLN
//! object key order is significant and must survive the trip.

use crate::convert::{decode, encode};
use crate::error::*;
use crate::host::HostValue;
use crate::types::Value;
use serde_json::{Map, Number, Value as JsonValue};

/// Convert a JSON value to a host value
pub fn from_json(json: &JsonValue) -> HostValue {
    match json {
        JsonValue::Null => HostValue::Nil,
        JsonValue::Bool(b) => HostValue::Bool(*b),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                HostValue::Int(i as i128)
            } else if let Some(u) = n.as_u64() {
                HostValue::Int(u as i128)
            } else if let Some(f) = n.as_f64() {
                HostValue::Float(f)
            } else {
                HostValue::Opaque("number".to_string())
            }
        }
        JsonValue::String(s) => HostValue::Str(s.clone()),
        JsonValue::Array(arr) => HostValue::List(arr.iter().map(from_json).collect()),
        JsonValue::Object(obj) => HostValue::Map(
            obj.iter()
                .map(|(k, v)| (k.clone(), from_json(v)))
                .collect(),
        ),
    }
}

/// Convert a host value to a JSON value
pub fn to_json(host: &HostValue) -> Result<JsonValue> {
    match host {
        HostValue::Nil => Ok(JsonValue::Null),
        HostValue::Bool(b) => Ok(JsonValue::Bool(*b)),
        HostValue::Int(v) => {
            if let Ok(i) = i64::try_from(*v) {
                Ok(JsonValue::Number(Number::from(i)))
            } else if let Ok(u) = u64::try_from(*v) {
                Ok(JsonValue::Number(Number::from(u)))
            } else {
                Err(GblnError::IntegerOutOfRange(*v))
            }
        }
        HostValue::Float(f) => Number::from_f64(*f)
            .map(JsonValue::Number)
            .ok_or_else(|| {
                GblnError::Serialise(format!("non-finite float {} is not valid JSON", f))
            }),
        HostValue::Str(s) => Ok(JsonValue::String(s.clone())),
        HostValue::List(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(to_json(item)?);
            }
            Ok(JsonValue::Array(out))
        }
        HostValue::Map(pairs) => {
            let mut map = Map::with_capacity(pairs.len());
            for (key, value) in pairs {
                if map.contains_key(key) {
                    return Err(GblnError::DuplicateKey(key.clone()));
                }
                map.insert(key.clone(), to_json(value)?);
            }
            Ok(JsonValue::Object(map))
        }
        HostValue::Opaque(type_name) => Err(GblnError::UnsupportedType(type_name.clone())),
    }
}

/// Encode a JSON value straight to a GBLN value
pub fn encode_json(json: &JsonValue) -> Result<Value> {
    encode(&from_json(json))
}

/// Decode a GBLN value straight to a JSON value
pub fn decode_json(value: &Value) -> Result<JsonValue> {
    to_json(&decode(value)?)
}

/// Parse a JSON string to a host value
pub fn parse_json(json_str: &str) -> Result<HostValue> {
    let json: JsonValue = serde_json::from_str(json_str)?;
    Ok(from_json(&json))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_null() {
        assert!(from_json(&json!(null)).is_nil());
    }

    #[test]
    fn test_from_json_bool() {
        assert_eq!(from_json(&json!(true)).as_bool(), Some(true));
    }

    #[test]
    fn test_from_json_int() {
        assert_eq!(from_json(&json!(42)).as_int(), Some(42));
    }

    #[test]
    fn test_from_json_large_unsigned() {
        assert_eq!(
            from_json(&json!(u64::MAX)).as_int(),
            Some(u64::MAX as i128)
        );
    }

    #[test]
    fn test_from_json_float() {
        assert_eq!(from_json(&json!(3.14)).as_float(), Some(3.14));
    }

    #[test]
    fn test_from_json_object_keeps_order() {
        let hv = from_json(&json!({"b": 1, "a": 2}));
        let pairs = hv.as_map().unwrap();
        assert_eq!(pairs[0].0, "b");
        assert_eq!(pairs[1].0, "a");
    }

    #[test]
    fn test_to_json_roundtrip() {
        let original = json!({
            "name": "Alice",
            "age": 30,
            "active": true,
            "scores": [95, 87, 92]
        });
        let hv = from_json(&original);
        assert_eq!(to_json(&hv).unwrap(), original);
    }

    #[test]
    fn test_to_json_rejects_opaque() {
        let hv = HostValue::opaque("socket");
        assert!(matches!(
            to_json(&hv),
            Err(GblnError::UnsupportedType(ref n)) if n == "socket"
        ));
    }

    #[test]
    fn test_encode_json_picks_minimal_kinds() {
        let v = encode_json(&json!({"small": 7, "big": 70000})).unwrap();
        assert_eq!(v.get("small").unwrap().kind_name(), "u8");
        assert_eq!(v.get("big").unwrap().kind_name(), "u32");
    }

    #[test]
    fn test_decode_json_key_order() {
        let v = encode_json(&json!({"z": 1, "a": 2})).unwrap();
        let restored = decode_json(&v).unwrap();
        let keys: Vec<_> = restored.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn test_parse_json() {
        let hv = parse_json(r#"{"x": 1}"#).unwrap();
        assert_eq!(hv.get("x").and_then(|v| v.as_int()), Some(1));
    }

    #[test]
    fn test_parse_json_error_propagates() {
        assert!(matches!(parse_json("{not json"), Err(GblnError::Json(_))));
    }
}
