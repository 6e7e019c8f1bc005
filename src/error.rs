//! Error handling for the codec.
//!
//! Every decode, encode, and mutation failure is reported through the single
//! [`Error`] enum. The library never logs and never writes to any stream;
//! the `Display` implementations are the only diagnostic surface.

use thiserror::Error;

/// Failures reported by the decoder, the encoder, and the tree mutators.
///
/// Byte offsets refer to the input slice handed to the decoder, including
/// any leading byte order mark.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input is not well-formed UTF-8.
    #[error("input is not valid UTF-8")]
    InvalidUtf8,

    /// A byte that cannot start a token, or a token out of place.
    #[error("unexpected character at byte {0}")]
    UnexpectedCharacter(usize),

    /// Input ended in the middle of a value.
    #[error("unexpected end of input")]
    UnexpectedEnd,

    /// A string literal ran off the end of the input.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// Extra content after the top-level value.
    #[error("trailing characters at byte {0}")]
    TrailingCharacters(usize),

    /// A comma directly before a closing bracket or brace.
    #[error("trailing comma at byte {0}")]
    TrailingComma(usize),

    /// A number that does not match the RFC 8259 grammar.
    #[error("malformed number at byte {0}")]
    MalformedNumber(usize),

    /// A number whose value overflows binary64.
    #[error("number at byte {0} is out of range")]
    NumberOutOfRange(usize),

    /// A raw control byte (below 0x20) inside a string literal.
    #[error("unescaped control character at byte {0}")]
    UnescapedControl(usize),

    /// A backslash followed by an unknown specifier, or bad `\u` hex digits.
    #[error("invalid escape sequence at byte {0}")]
    InvalidEscape(usize),

    /// A `\uHHHH` escape encoding an unpaired UTF-16 surrogate.
    #[error("lone surrogate at byte {0}")]
    LoneSurrogate(usize),

    /// A `\u0000` escape; U+0000 is not representable in the tree.
    #[error("NUL escape at byte {0}")]
    NulEscape(usize),

    /// Arrays and objects nested past the configured ceiling.
    #[error("nesting depth limit of {0} exceeded")]
    DepthLimitExceeded(usize),

    /// Attempted to encode a NaN or infinite number.
    #[error("number is not finite")]
    NonFiniteNumber,

    /// [`push`](crate::Value::push) on a value that is not an array.
    #[error("cannot push onto {0}")]
    NotAnArray(&'static str),

    /// [`insert`](crate::Value::insert) on a value that is not an object.
    #[error("cannot insert into {0}")]
    NotAnObject(&'static str),
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;
