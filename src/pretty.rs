//! Human-facing debug formatter.
//!
//! Renders a [`Value`] with two-space indentation for inspection during
//! development. The output is not the wire format: strings are printed
//! without escaping and non-finite numbers print as-is, so feed trees to
//! [`encode`](crate::encode) when bytes on the wire are the goal.

use crate::value::Value;

/// Render a value as an indented multi-line string.
///
/// `indent` is the starting indentation level; nested containers indent one
/// level (two spaces) further.
pub fn pretty(value: &Value, indent: usize) -> String {
    let mut output = String::new();
    write_pretty(value, indent, &mut output);
    output
}

fn write_pretty(value: &Value, indent: usize, output: &mut String) {
    match value {
        Value::Null => output.push_str("null"),
        Value::Bool(true) => output.push_str("true"),
        Value::Bool(false) => output.push_str("false"),
        Value::Number(n) => output.push_str(&n.to_string()),
        Value::String(s) => {
            output.push('"');
            output.push_str(s);
            output.push('"');
        }
        Value::Array(items) => {
            if items.is_empty() {
                output.push_str("[]");
                return;
            }
            output.push_str("[\n");
            for (i, item) in items.iter().enumerate() {
                pad(indent + 1, output);
                write_pretty(item, indent + 1, output);
                if i + 1 < items.len() {
                    output.push(',');
                }
                output.push('\n');
            }
            pad(indent, output);
            output.push(']');
        }
        Value::Object(pairs) => {
            if pairs.is_empty() {
                output.push_str("{}");
                return;
            }
            output.push_str("{\n");
            for (i, (key, item)) in pairs.iter().enumerate() {
                pad(indent + 1, output);
                output.push('"');
                output.push_str(key);
                output.push_str("\": ");
                write_pretty(item, indent + 1, output);
                if i + 1 < pairs.len() {
                    output.push(',');
                }
                output.push('\n');
            }
            pad(indent, output);
            output.push('}');
        }
    }
}

fn pad(indent: usize, output: &mut String) {
    for _ in 0..indent {
        output.push_str("  ");
    }
}
