//! Host value <-> GBLN value conversion
//!
//! Both directions are single-pass recursive traversals producing a fresh
//! tree. Any child failure aborts the whole call; siblings built before the
//! failure are dropped by ordinary ownership, so callers never observe a
//! partial tree.

use crate::error::*;
use crate::host::HostValue;
use crate::select::{select_integer, select_string_capacity};
use crate::types::{Object, StrValue, Value};

/// Maximum container nesting depth accepted by encode and decode
///
/// The value model itself places no bound on nesting; this bound keeps an
/// adversarial tree from exhausting the thread stack.
pub const MAX_DEPTH: usize = 128;

/// Convert a host value to a GBLN value, choosing minimal tags
pub fn encode(host: &HostValue) -> Result<Value> {
    encode_at(host, 0)
}

/// Convert a GBLN value back to a host value
///
/// Tags are trusted as-is: a string carrying a wider-than-minimal capacity
/// tag decodes verbatim and is never re-shrunk.
pub fn decode(value: &Value) -> Result<HostValue> {
    decode_at(value, 0)
}

fn encode_at(host: &HostValue, depth: usize) -> Result<Value> {
    if depth > MAX_DEPTH {
        return Err(GblnError::DepthLimit { max: MAX_DEPTH });
    }
    match host {
        HostValue::Nil => Ok(Value::Null),
        HostValue::Bool(b) => Ok(Value::Bool(*b)),
        HostValue::Int(v) => {
            let kind = select_integer(*v)?;
            Ok(Value::int_with_kind(kind, *v))
        }
        // Host floats are never narrowed to f32; only f64 preserves what
        // the host held. F32 nodes arise solely from externally-tagged
        // parsed input.
        HostValue::Float(f) => {
            if !f.is_finite() {
                return Err(GblnError::Serialise(format!(
                    "non-finite float {} has no GBLN representation",
                    f
                )));
            }
            Ok(Value::F64(*f))
        }
        HostValue::Str(s) => {
            let capacity = select_string_capacity(s)?;
            Ok(Value::Str(StrValue::new(s.clone(), capacity)?))
        }
        HostValue::List(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(encode_at(item, depth + 1)?);
            }
            Ok(Value::Array(out))
        }
        HostValue::Map(pairs) => {
            let mut obj = Object::new();
            for (key, value) in pairs {
                let child = encode_at(value, depth + 1)?;
                // A well-formed host map has unique keys; insert still
                // checks so a repeated key surfaces instead of clobbering.
                obj.insert(key.clone(), child)?;
            }
            Ok(Value::Object(obj))
        }
        HostValue::Opaque(type_name) => Err(GblnError::UnsupportedType(type_name.clone())),
    }
}

fn decode_at(value: &Value, depth: usize) -> Result<HostValue> {
    if depth > MAX_DEPTH {
        return Err(GblnError::DepthLimit { max: MAX_DEPTH });
    }
    match value {
        Value::Null => Ok(HostValue::Nil),
        Value::Bool(b) => Ok(HostValue::Bool(*b)),
        Value::I8(v) => Ok(HostValue::Int(*v as i128)),
        Value::I16(v) => Ok(HostValue::Int(*v as i128)),
        Value::I32(v) => Ok(HostValue::Int(*v as i128)),
        Value::I64(v) => Ok(HostValue::Int(*v as i128)),
        Value::U8(v) => Ok(HostValue::Int(*v as i128)),
        Value::U16(v) => Ok(HostValue::Int(*v as i128)),
        Value::U32(v) => Ok(HostValue::Int(*v as i128)),
        Value::U64(v) => Ok(HostValue::Int(*v as i128)),
        Value::F32(v) => decode_float(f64::from(*v), "f32"),
        Value::F64(v) => decode_float(*v, "f64"),
        Value::Str(s) => Ok(HostValue::Str(s.text().to_string())),
        Value::Object(obj) => {
            let mut pairs = Vec::with_capacity(obj.len());
            for e in obj {
                pairs.push((e.key.clone(), decode_at(&e.value, depth + 1)?));
            }
            Ok(HostValue::Map(pairs))
        }
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(decode_at(item, depth + 1)?);
            }
            Ok(HostValue::List(out))
        }
    }
}

// A non-finite float in a parser-built tree is upstream corruption: the
// grammar has no literal for it.
fn decode_float(f: f64, kind: &'static str) -> Result<HostValue> {
    if !f.is_finite() {
        return Err(GblnError::Extraction { kind });
    }
    Ok(HostValue::Float(f))
}
