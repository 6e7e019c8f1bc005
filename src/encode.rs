//! Compact JSON encoder.
//!
//! Serializes a [`Value`] tree into the RFC 8259 wire form: no optional
//! whitespace, `.` as the decimal point, control bytes escaped, object keys
//! in insertion order. The output is a deterministic function of the tree.

use crate::error::{Error, Result};
use crate::limits::Limits;
use crate::value::Value;

/// Encode a value with the default nesting ceiling.
///
/// On success the returned `String` is a complete JSON document; on failure
/// nothing is returned and no partial output escapes.
pub fn encode(value: &Value) -> Result<String> {
    encode_with_limits(value, Limits::new())
}

/// Encode a value with custom limits.
pub fn encode_with_limits(value: &Value, limits: Limits) -> Result<String> {
    let mut output = String::new();
    write_value(value, 0, limits.max_depth, &mut output)?;
    Ok(output)
}

/// Serialize one value into the output buffer.
fn write_value(value: &Value, depth: usize, max_depth: usize, output: &mut String) -> Result<()> {
    match value {
        Value::Null => output.push_str("null"),
        Value::Bool(true) => output.push_str("true"),
        Value::Bool(false) => output.push_str("false"),
        Value::Number(n) => write_number(*n, output)?,
        Value::String(s) => write_string(s, output),
        Value::Array(items) => {
            let depth = depth + 1;
            if depth >= max_depth {
                return Err(Error::DepthLimitExceeded(max_depth));
            }
            output.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    output.push(',');
                }
                write_value(item, depth, max_depth, output)?;
            }
            output.push(']');
        }
        Value::Object(pairs) => {
            let depth = depth + 1;
            if depth >= max_depth {
                return Err(Error::DepthLimitExceeded(max_depth));
            }
            output.push('{');
            for (i, (key, item)) in pairs.iter().enumerate() {
                if i > 0 {
                    output.push(',');
                }
                write_string(key, output);
                output.push(':');
                write_value(item, depth, max_depth, output)?;
            }
            output.push('}');
        }
    }
    Ok(())
}

/// Serialize a finite number.
///
/// `f64`'s `Display` emits the shortest decimal form that parses back to
/// the identical bit pattern, always with `.` as the decimal point, so the
/// output round-trips regardless of host locale.
fn write_number(n: f64, output: &mut String) -> Result<()> {
    if !n.is_finite() {
        return Err(Error::NonFiniteNumber);
    }
    output.push_str(&n.to_string());
    Ok(())
}

/// Serialize a string with RFC 8259 escaping.
///
/// The two-character escapes are preferred where they exist; any other
/// control character becomes a lowercase `\u00xx` escape. The solidus is
/// emitted verbatim, and bytes at or above 0x20 pass through untouched.
fn write_string(s: &str, output: &mut String) {
    output.push('"');
    for ch in s.chars() {
        match ch {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\x08' => output.push_str("\\b"),
            '\x0C' => output.push_str("\\f"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c < '\x20' => {
                output.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => output.push(c),
        }
    }
    output.push('"');
}
