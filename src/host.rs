//! Host-side dynamic value
//!
//! The closed set of variants an embedding environment can hand to the
//! converter. Keeping the set explicit forces the encoder to match
//! exhaustively; anything a host cannot express through these variants
//! arrives as `Opaque` and fails loudly instead of being skipped.

/// Dynamically-typed host value, the JSON-like tree the converter maps
/// to and from the GBLN value model
#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    /// Absent value
    Nil,
    /// Boolean
    Bool(bool),
    /// Integer, wide enough to carry anything up to u64/i64 and beyond
    /// (out-of-range values are rejected at encode time, not here)
    Int(i128),
    /// Floating-point number
    Float(f64),
    /// String
    Str(String),
    /// Ordered sequence
    List(Vec<HostValue>),
    /// Ordered key-value pairs; duplicate keys are representable here and
    /// rejected by the encoder
    Map(Vec<(String, HostValue)>),
    /// A host kind with no GBLN encoding, carrying its described type name
    Opaque(String),
}

impl HostValue {
    pub fn nil() -> Self {
        HostValue::Nil
    }

    pub fn bool(v: bool) -> Self {
        HostValue::Bool(v)
    }

    pub fn int(v: impl Into<i128>) -> Self {
        HostValue::Int(v.into())
    }

    pub fn float(v: f64) -> Self {
        HostValue::Float(v)
    }

    pub fn str(v: impl Into<String>) -> Self {
        HostValue::Str(v.into())
    }

    pub fn list(items: Vec<HostValue>) -> Self {
        HostValue::List(items)
    }

    pub fn map(pairs: Vec<(String, HostValue)>) -> Self {
        HostValue::Map(pairs)
    }

    pub fn opaque(type_name: impl Into<String>) -> Self {
        HostValue::Opaque(type_name.into())
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, HostValue::Nil)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            HostValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i128> {
        match self {
            HostValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            HostValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            HostValue::Str(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[HostValue]> {
        match self {
            HostValue::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&[(String, HostValue)]> {
        match self {
            HostValue::Map(v) => Some(v),
            _ => None,
        }
    }

    /// Get a value from a map by key (first match in pair order)
    pub fn get(&self, key: &str) -> Option<&HostValue> {
        match self {
            HostValue::Map(pairs) => pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}
