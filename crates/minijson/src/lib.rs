//! # minijson
//!
//! A minimal JSON value library: a closed [`Value`] type for the six JSON
//! kinds, a depth-bounded recursive-descent [`parse`]r, and a [`dump`]
//! serializer.
//!
//! ## Quick start
//!
//! ```rust
//! use minijson::{parse, Kind};
//!
//! let value = parse(r#"{"name":"Alice","scores":[95,87,92]}"#).unwrap();
//! assert_eq!(value.kind(), Kind::Object);
//! assert_eq!(value.object_value()["scores"].size(), 3);
//!
//! // Mismatched accessors return defaults instead of failing.
//! assert_eq!(value.object_value()["name"].int_value(), 0);
//!
//! assert_eq!(value.dump(), r#"{"name":"Alice","scores":[95,87,92]}"#);
//! ```
//!
//! ## Deliberate limitations
//!
//! Strings are copied verbatim in both directions: escapes are neither
//! decoded nor produced. Exponent notation is not accepted. Object member
//! order is unspecified.
//!
//! ## Modules
//!
//! - [`value`]: `Value` model, `Kind` tag, default-on-mismatch accessors
//! - [`parser`]: text → `Value`
//! - [`serializer`]: `Value` → text
//! - [`config`]: parser limits (`ParseConfig`)
//! - [`error`]: `ParseError`
//! - [`interop`]: serde `Serialize`/`Deserialize` and `serde_json::Value` conversions

pub mod config;
pub mod error;
pub mod interop;
pub mod parser;
pub mod serializer;
pub mod value;

pub use config::{ParseConfig, DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT};
pub use error::{ParseError, Result};
pub use parser::{parse, parse_with_config};
pub use serializer::dump;
pub use value::{Array, Kind, Object, Value};
