//! The JSON value tree.
//!
//! A [`Value`] owns all of its descendants; dropping a root releases every
//! key and child reachable through it. Objects are kept as a single ordered
//! sequence of key/value pairs, which preserves insertion order, permits
//! duplicate keys, and keeps the two-sided growth of a parallel-array layout
//! from ever being observable.

use crate::error::{Error, Result};

/// A JSON value.
///
/// Produced by the decoder or built by hand from the variants. Numbers are
/// IEEE-754 binary64; the decoder only ever yields finite ones, and the
/// encoder rejects anything else. Strings are well-formed UTF-8 by
/// construction.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// JSON null literal.
    #[default]
    Null,
    /// JSON boolean.
    Bool(bool),
    /// JSON number.
    Number(f64),
    /// JSON string.
    String(String),
    /// JSON array of owned values.
    Array(Vec<Value>),
    /// JSON object as key/value pairs in insertion order. Duplicate keys
    /// are retained; [`Value::get`] returns the first match.
    Object(Vec<(String, Value)>),
}

impl Value {
    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is a boolean value.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns true if this is a number value.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns true if this is a string value.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns true if this is an array value.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns true if this is an object value.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns the boolean value if this is a `Bool`, `None` otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number value if this is a `Number`, `None` otherwise.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns a reference to the string if this is a `String`, `None` otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements if this is an `Array`, `None` otherwise.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the key/value pairs if this is an `Object`, `None` otherwise.
    pub fn as_object(&self) -> Option<&[(String, Value)]> {
        match self {
            Value::Object(pairs) => Some(pairs),
            _ => None,
        }
    }

    /// Look up a key in an object.
    ///
    /// Scans the pairs in insertion order and returns the first value whose
    /// key matches, so with duplicate keys the earliest insertion wins.
    /// Returns `None` when no key matches or this value is not an object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(pairs) => pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Get a value from an array by index.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(items) => items.get(index),
            _ => None,
        }
    }

    /// Append a child to an array, transferring ownership of `value`.
    ///
    /// Fails without touching `value` when this is not an array.
    pub fn push(&mut self, value: Value) -> Result<()> {
        match self {
            Value::Array(items) => {
                items.push(value);
                Ok(())
            }
            other => Err(Error::NotAnArray(other.type_name())),
        }
    }

    /// Append a key/value pair to an object, transferring ownership of `value`.
    ///
    /// The pair is always appended; inserting an existing key keeps both
    /// entries. Fails without touching `value` when this is not an object.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Result<()> {
        match self {
            Value::Object(pairs) => {
                pairs.push((key.into(), value));
                Ok(())
            }
            other => Err(Error::NotAnObject(other.type_name())),
        }
    }

    /// Returns the type name as a string for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}
