//! rjson - a strict RFC 8259 JSON tree codec.
//!
//! This crate decodes UTF-8 JSON text into an owned [`Value`] tree and
//! encodes trees back into compact wire form. The decoder enforces the RFC
//! grammar byte by byte: exact lowercase literals, no leading zeros or bare
//! decimal points, no trailing commas, no unescaped control characters, no
//! lone surrogates, and nothing after the top-level value. A single leading
//! UTF-8 BOM is tolerated; the encoder never emits one.
//!
//! # Architecture
//!
//! The codec is organized into focused modules:
//!
//! - [`value`] - the owned JSON tree with accessors and mutators
//! - [`limits`] - the nesting ceiling protecting the call stack
//! - [`lexer`] - tokenizer with escape and surrogate handling
//! - [`parser`] - recursive descent parser with validation
//! - [`encode`] - compact RFC 8259 encoder
//! - [`pretty`] - indented debug formatter (not the wire format)
//! - [`error`] - the codec-wide error type
//!
//! # Example
//!
//! ```
//! use rjson::{encode, parse, Value};
//!
//! let value = parse(br#"{"name": "rjson", "strict": true}"#).unwrap();
//! assert_eq!(value.get("name").and_then(Value::as_str), Some("rjson"));
//!
//! // Re-encoding is compact and preserves key order.
//! assert_eq!(
//!     encode(&value).unwrap(),
//!     r#"{"name":"rjson","strict":true}"#
//! );
//! ```

// Library code must avoid unwrap/expect/panic; every failure travels
// through the Result alias. Tests are checked separately with `cargo test`.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod encode;
pub mod error;
pub mod lexer;
pub mod limits;
pub mod parser;
pub mod pretty;
pub mod value;

// Re-export commonly used items
pub use encode::{encode, encode_with_limits};
pub use error::{Error, Result};
pub use limits::{Limits, MAX_DEPTH};
pub use parser::{parse, parse_with_limits};
pub use pretty::pretty;
pub use value::Value;
