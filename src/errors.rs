//! Provides the error types used throughout this crate.

use thiserror::Error;

/// Failure modes of the textual decision-DAG parser (see [`crate::dag::parser`]).
///
/// Unrecognised bytes are rejected outright; whitespace is not implicitly
/// accepted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected a digit for a variable index at offset {offset}")]
    InvalidIndex { offset: usize },
    #[error("literal starting at offset {offset} is missing its closing ']'")]
    UnterminatedLiteral { offset: usize },
    #[error("group starting at offset {offset} is missing its closing ')'")]
    UnterminatedGroup { offset: usize },
    #[error("unrecognised byte {byte:#04x} at offset {offset}")]
    UnexpectedByte { offset: usize, byte: u8 },
    #[error("trailing input starting at offset {offset}")]
    TrailingInput { offset: usize },
}

/// Raised when an `input` vector is too short for the node or tree being
/// evaluated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("input vector of length {len} does not cover variable index {index}")]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

/// Raised by the vector-valued node-algebra operators (`multiply`, the
/// element-wise `exor`/`exnor` overloads) when their operand sequences
/// disagree in length.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("sequences of length {left} and {right} cannot be combined element-wise")]
pub struct LengthMismatch {
    pub left: usize,
    pub right: usize,
}
