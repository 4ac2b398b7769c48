//! GBLN core - capacity-bounded value model with minimal type selection
//!
//! GBLN values carry explicit width and capacity tags: integers live in the
//! smallest of eight concrete kinds, strings in the smallest of ten
//! character-count buckets. This crate holds the value model, the tag
//! selection policy, the bidirectional host-value converter, and the
//! settings record the external printer and persistence engine consume.
//! The text grammar, printer, and compression codec live outside it.
//!
//! # Example
//!
//! ```rust
//! use gbln_rs::{encode, decode, HostValue};
//!
//! let host = HostValue::map(vec![
//!     ("city".to_string(), HostValue::str("北京")),
//!     ("population".to_string(), HostValue::int(21_542_000)),
//! ]);
//! let value = encode(&host).unwrap();
//! assert_eq!(value.get("city").unwrap().kind_name(), "2");
//! assert_eq!(value.get("population").unwrap().kind_name(), "u32");
//! assert_eq!(decode(&value).unwrap(), host);
//! ```

mod config;
mod convert;
mod error;
mod host;
mod json_bridge;
mod select;
mod types;

pub use config::*;
pub use convert::*;
pub use error::*;
pub use host::*;
pub use json_bridge::*;
pub use select::*;
pub use types::*;

#[cfg(test)]
mod tests;
