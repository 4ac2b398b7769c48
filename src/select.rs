//! Minimal type selection
//!
//! Pure functions that pick the smallest integer kind or string capacity
//! bucket able to hold a raw value. Only the encode path calls these; the
//! decode path trusts whatever tags the source tree already carries.

use crate::error::*;
use crate::types::StrCapacity;

/// Concrete integer kind, one per width and signedness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntKind {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
}

impl IntKind {
    /// Wire name of this kind
    pub fn name(self) -> &'static str {
        match self {
            IntKind::U8 => "u8",
            IntKind::U16 => "u16",
            IntKind::U32 => "u32",
            IntKind::U64 => "u64",
            IntKind::I8 => "i8",
            IntKind::I16 => "i16",
            IntKind::I32 => "i32",
            IntKind::I64 => "i64",
        }
    }

    pub fn is_signed(self) -> bool {
        matches!(self, IntKind::I8 | IntKind::I16 | IntKind::I32 | IntKind::I64)
    }

    /// Width in bits
    pub fn width(self) -> u8 {
        match self {
            IntKind::U8 | IntKind::I8 => 8,
            IntKind::U16 | IntKind::I16 => 16,
            IntKind::U32 | IntKind::I32 => 32,
            IntKind::U64 | IntKind::I64 => 64,
        }
    }

    /// Inclusive range of representable values
    pub fn range(self) -> (i128, i128) {
        match self {
            IntKind::U8 => (0, u8::MAX as i128),
            IntKind::U16 => (0, u16::MAX as i128),
            IntKind::U32 => (0, u32::MAX as i128),
            IntKind::U64 => (0, u64::MAX as i128),
            IntKind::I8 => (i8::MIN as i128, i8::MAX as i128),
            IntKind::I16 => (i16::MIN as i128, i16::MAX as i128),
            IntKind::I32 => (i32::MIN as i128, i32::MAX as i128),
            IntKind::I64 => (i64::MIN as i128, i64::MAX as i128),
        }
    }
}

/// Unsigned kinds in ascending width order, tried first
const UNSIGNED_ASCENDING: [IntKind; 4] = [IntKind::U8, IntKind::U16, IntKind::U32, IntKind::U64];

/// Signed kinds in ascending width order, tried second
const SIGNED_ASCENDING: [IntKind; 4] = [IntKind::I8, IntKind::I16, IntKind::I32, IntKind::I64];

/// Pick the minimal integer kind for `v`
///
/// Non-negative values run the full unsigned ladder before any signed kind
/// is considered, so a value in `i64::MAX+1 ..= u64::MAX` resolves to `U64`
/// rather than failing the signed range check. Negative values skip the
/// unsigned ladder entirely. Values outside both u64 and i64 fail with
/// `IntegerOutOfRange`.
pub fn select_integer(v: i128) -> Result<IntKind> {
    if v >= 0 {
        for kind in UNSIGNED_ASCENDING {
            let (lo, hi) = kind.range();
            if v >= lo && v <= hi {
                return Ok(kind);
            }
        }
    }
    for kind in SIGNED_ASCENDING {
        let (lo, hi) = kind.range();
        if v >= lo && v <= hi {
            return Ok(kind);
        }
    }
    Err(GblnError::IntegerOutOfRange(v))
}

/// Pick the minimal capacity bucket for `text`
///
/// Counts Unicode scalar values, never bytes: a two-character CJK string
/// selects the same bucket as two ASCII characters. Strings over 1024
/// characters fail with `StringTooLong`.
pub fn select_string_capacity(text: &str) -> Result<StrCapacity> {
    let chars = text.chars().count();
    for cap in StrCapacity::ALL {
        if chars <= cap.max_chars() {
            return Ok(cap);
        }
    }
    Err(GblnError::StringTooLong { chars })
}
