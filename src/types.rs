//! Core GBLN value types

use crate::error::*;
use crate::select::{select_integer, select_string_capacity, IntKind};

/// GBLN value type enumeration
///
/// A closed set of 15 node kinds. Every consumer matches exhaustively;
/// there is no subtyping and no kind outside this list.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// 8-bit signed integer
    I8(i8),
    /// 16-bit signed integer
    I16(i16),
    /// 32-bit signed integer
    I32(i32),
    /// 64-bit signed integer
    I64(i64),
    /// 8-bit unsigned integer
    U8(u8),
    /// 16-bit unsigned integer
    U16(u16),
    /// 32-bit unsigned integer
    U32(u32),
    /// 64-bit unsigned integer
    U64(u64),
    /// 32-bit float (only produced by externally-tagged input)
    F32(f32),
    /// 64-bit float
    F64(f64),
    /// Capacity-tagged UTF-8 string
    Str(StrValue),
    /// Ordered key-value mapping with unique keys
    Object(Object),
    /// Ordered sequence of values
    Array(Vec<Value>),
}

/// String capacity tag: the declared maximum **character** count for a
/// string value, drawn from a fixed bucket set
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrCapacity {
    S2,
    S4,
    S8,
    S16,
    S32,
    S64,
    S128,
    S256,
    S512,
    S1024,
}

impl StrCapacity {
    /// All buckets in ascending order
    pub const ALL: [StrCapacity; 10] = [
        StrCapacity::S2,
        StrCapacity::S4,
        StrCapacity::S8,
        StrCapacity::S16,
        StrCapacity::S32,
        StrCapacity::S64,
        StrCapacity::S128,
        StrCapacity::S256,
        StrCapacity::S512,
        StrCapacity::S1024,
    ];

    /// Maximum number of Unicode scalar values this bucket holds
    pub fn max_chars(self) -> usize {
        match self {
            StrCapacity::S2 => 2,
            StrCapacity::S4 => 4,
            StrCapacity::S8 => 8,
            StrCapacity::S16 => 16,
            StrCapacity::S32 => 32,
            StrCapacity::S64 => 64,
            StrCapacity::S128 => 128,
            StrCapacity::S256 => 256,
            StrCapacity::S512 => 512,
            StrCapacity::S1024 => 1024,
        }
    }

    /// Wire name of this tag
    pub fn name(self) -> &'static str {
        match self {
            StrCapacity::S2 => "2",
            StrCapacity::S4 => "4",
            StrCapacity::S8 => "8",
            StrCapacity::S16 => "16",
            StrCapacity::S32 => "32",
            StrCapacity::S64 => "64",
            StrCapacity::S128 => "128",
            StrCapacity::S256 => "256",
            StrCapacity::S512 => "512",
            StrCapacity::S1024 => "1024",
        }
    }
}

/// Capacity-tagged string
///
/// Invariant: `text.chars().count() <= capacity.max_chars()`. The tag is
/// minimal when produced by the type selector, but parsed input may carry
/// any valid wider tag and it is preserved as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct StrValue {
    text: String,
    capacity: StrCapacity,
}

impl StrValue {
    /// Build with an explicit tag, checking the capacity invariant
    pub fn new(text: impl Into<String>, capacity: StrCapacity) -> Result<Self> {
        let text = text.into();
        let chars = text.chars().count();
        if chars > capacity.max_chars() {
            return Err(GblnError::Validation {
                field: "capacity".to_string(),
                reason: format!("{} characters exceed tag {}", chars, capacity.name()),
            });
        }
        Ok(Self { text, capacity })
    }

    /// Build with the minimal tag for the text
    pub fn auto(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        let capacity = select_string_capacity(&text)?;
        Ok(Self { text, capacity })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn capacity(&self) -> StrCapacity {
        self.capacity
    }
}

/// Object entry (key-value pair)
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectEntry {
    pub key: String,
    pub value: Value,
}

impl ObjectEntry {
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Ordered key-value mapping with unique keys
///
/// Insertion order is preserved and significant: it affects printed output
/// and is part of structural identity for round-trip purposes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    entries: Vec<ObjectEntry>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, rejecting repeated keys
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Result<()> {
        let key = key.into();
        if self.entries.iter().any(|e| e.key == key) {
            return Err(GblnError::DuplicateKey(key));
        }
        self.entries.push(ObjectEntry::new(key, value));
        Ok(())
    }

    /// Build from pairs, rejecting repeated keys
    pub fn from_entries<K, I>(pairs: I) -> Result<Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let mut obj = Self::new();
        for (key, value) in pairs {
            obj.insert(key, value)?;
        }
        Ok(obj)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|e| e.key == key).map(|e| &e.value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ObjectEntry> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = &'a ObjectEntry;
    type IntoIter = std::slice::Iter<'a, ObjectEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ============================================================
// Builder functions
// ============================================================

impl Value {
    /// Create a null value
    pub fn null() -> Self {
        Value::Null
    }

    /// Create a boolean value
    pub fn bool(v: bool) -> Self {
        Value::Bool(v)
    }

    /// Create an integer value with the minimal kind for `v`
    pub fn int(v: i128) -> Result<Self> {
        Ok(Self::int_with_kind(select_integer(v)?, v))
    }

    /// Create an integer value of a known kind
    ///
    /// The kind must already be wide enough for `v`; selector output and
    /// parsed tags always are.
    pub(crate) fn int_with_kind(kind: IntKind, v: i128) -> Self {
        match kind {
            IntKind::U8 => Value::U8(v as u8),
            IntKind::U16 => Value::U16(v as u16),
            IntKind::U32 => Value::U32(v as u32),
            IntKind::U64 => Value::U64(v as u64),
            IntKind::I8 => Value::I8(v as i8),
            IntKind::I16 => Value::I16(v as i16),
            IntKind::I32 => Value::I32(v as i32),
            IntKind::I64 => Value::I64(v as i64),
        }
    }

    /// Create an f64 value
    pub fn float(v: f64) -> Self {
        Value::F64(v)
    }

    /// Create a string value with the minimal capacity tag
    pub fn str_auto(text: impl Into<String>) -> Result<Self> {
        Ok(Value::Str(StrValue::auto(text)?))
    }

    /// Create a string value with an explicit capacity tag
    pub fn str_tagged(text: impl Into<String>, capacity: StrCapacity) -> Result<Self> {
        Ok(Value::Str(StrValue::new(text, capacity)?))
    }

    /// Create an array value
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(items)
    }

    /// Create an object value
    pub fn object(obj: Object) -> Self {
        Value::Object(obj)
    }

    // ============================================================
    // Type checking
    // ============================================================

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_int(&self) -> bool {
        matches!(
            self,
            Value::I8(_)
                | Value::I16(_)
                | Value::I32(_)
                | Value::I64(_)
                | Value::U8(_)
                | Value::U16(_)
                | Value::U32(_)
                | Value::U64(_)
        )
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Value::F32(_) | Value::F64(_))
    }

    pub fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    // ============================================================
    // Value extraction
    // ============================================================

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Extract any integer kind, widened to i128
    pub fn as_int(&self) -> Option<i128> {
        match self {
            Value::I8(v) => Some(*v as i128),
            Value::I16(v) => Some(*v as i128),
            Value::I32(v) => Some(*v as i128),
            Value::I64(v) => Some(*v as i128),
            Value::U8(v) => Some(*v as i128),
            Value::U16(v) => Some(*v as i128),
            Value::U32(v) => Some(*v as i128),
            Value::U64(v) => Some(*v as i128),
            _ => None,
        }
    }

    /// Extract either float kind, widened to f64
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::F32(v) => Some(f64::from(*v)),
            Value::F64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(v) => Some(v.text()),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(v) => Some(v),
            _ => None,
        }
    }

    /// Get a value from an object by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(obj) => obj.get(key),
            _ => None,
        }
    }

    /// Get a value from an array by index
    pub fn index(&self, idx: usize) -> Option<&Value> {
        match self {
            Value::Array(items) => items.get(idx),
            _ => None,
        }
    }

    /// Wire name of this node's kind
    ///
    /// Integer and float kinds use their width names, strings use their
    /// numeric capacity tag. This vocabulary is shared with the external
    /// parser and printer and must not drift.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::I8(_) => "i8",
            Value::I16(_) => "i16",
            Value::I32(_) => "i32",
            Value::I64(_) => "i64",
            Value::U8(_) => "u8",
            Value::U16(_) => "u16",
            Value::U32(_) => "u32",
            Value::U64(_) => "u64",
            Value::F32(_) => "f32",
            Value::F64(_) => "f64",
            Value::Str(s) => s.capacity().name(),
            Value::Object(_) => "object",
            Value::Array(_) => "array",
        }
    }
}

/// Helper to create an object entry
pub fn entry(key: impl Into<String>, value: Value) -> ObjectEntry {
    ObjectEntry::new(key, value)
}
