//! I/O configuration
//!
//! Settings record consumed by the external printer and persistence engine.
//! The core only builds and validates it; formatting and compression happen
//! on the other side of the boundary.

use crate::error::*;
use serde::{Deserialize, Serialize};

/// Validated settings for the printer and persistence engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IoConfig {
    /// Compact output instead of human-formatted
    pub mini_mode: bool,
    /// Whether the persistence engine applies its compression transform
    pub compress: bool,
    /// Compression aggressiveness, 0 through 9
    pub compression_level: i64,
    /// Spaces per nesting level; must be at least 1, values above 8 are
    /// rarely useful
    pub indent: i64,
    /// Drop source comments on output
    pub strip_comments: bool,
}

impl IoConfig {
    /// Preset for compact persisted or transferred data
    pub fn io_default() -> Self {
        Self {
            mini_mode: true,
            compress: true,
            compression_level: 6,
            indent: 2,
            strip_comments: true,
        }
    }

    /// Preset for human-edited source, keeping comments
    pub fn source_default() -> Self {
        Self {
            mini_mode: false,
            compress: false,
            compression_level: 0,
            indent: 2,
            strip_comments: false,
        }
    }

    /// Check every field's domain, failing on the first violation in
    /// field-declaration order
    ///
    /// The boolean fields are well-typed by construction, so the live
    /// checks start at `compression_level`.
    pub fn validate(&self) -> Result<()> {
        if !(0..=9).contains(&self.compression_level) {
            return Err(GblnError::Validation {
                field: "compression_level".to_string(),
                reason: format!("{} is outside [0, 9]", self.compression_level),
            });
        }
        if self.indent < 1 {
            return Err(GblnError::Validation {
                field: "indent".to_string(),
                reason: format!("{} is not positive", self.indent),
            });
        }
        Ok(())
    }
}

impl Default for IoConfig {
    fn default() -> Self {
        Self::io_default()
    }
}
