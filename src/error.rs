//! Error types for the GBLN core

use thiserror::Error;

/// Errors that can occur during GBLN core operations
#[derive(Error, Debug)]
pub enum GblnError {
    /// Surfaced unchanged from the external parsing engine
    #[error("Parse error: {0}")]
    Parse(String),

    /// A config field or decoded scalar violates its declared domain
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Integer exceeds the representable u64/i64 bounds
    #[error("Integer out of range: {0}")]
    IntegerOutOfRange(i128),

    /// String exceeds the largest capacity bucket (1024 characters)
    #[error("String too long: {chars} characters exceeds capacity 1024")]
    StringTooLong { chars: usize },

    /// Host value kind with no GBLN encoding
    #[error("Unsupported host type: {0}")]
    UnsupportedType(String),

    /// Object construction detected a repeated key
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// A decoded node could not be read as its claimed kind
    #[error("Extraction failed for kind {kind}")]
    Extraction { kind: &'static str },

    /// Value tree nesting exceeded the documented bound
    #[error("Nesting depth exceeds maximum of {max}")]
    DepthLimit { max: usize },

    /// Umbrella for encode-path failures not covered above
    #[error("Serialise error: {0}")]
    Serialise(String),

    #[error("JSON conversion error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GblnError>;
