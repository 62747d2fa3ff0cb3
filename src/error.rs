//! Error types for fixture generation.
//!
//! Every variant is fatal for a run: the binary reports it on stderr and
//! exits before anything reaches stdout.

use thiserror::Error;

/// Result type for frame generation.
pub type Result<T> = std::result::Result<T, FrameGenError>;

/// Which half of a header entry a length check failed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Key,
    Value,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Key => f.write_str("key"),
            Field::Value => f.write_str("value"),
        }
    }
}

/// Errors produced while parsing input, encoding entries or building frames.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameGenError {
    /// A non-blank, non-comment input line has no `:` separator.
    #[error("line {line}: expected `<key>: <value>`, got {text:?}")]
    MalformedInputLine { line: usize, text: String },

    /// A key or value does not fit the single-byte length prefix.
    #[error("{field} is {len} bytes, literal encoding allows at most {max}")]
    OversizedField { field: Field, len: usize, max: usize },

    /// A pre-indexed reference does not fit in one byte.
    #[error("table index {index} does not fit in one byte after the 0x80 prefix")]
    IndexOutOfRange { index: usize },

    /// The encoded payload overflows the 24-bit frame length field.
    #[error("payload is {len} bytes, frame length field holds at most {max}")]
    FrameTooLarge { len: usize, max: usize },

    /// Decoding the generated block did not reproduce the input.
    #[error("verification failed: {0}")]
    Verification(String),
}
