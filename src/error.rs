//! Error types for parsing, narrowing and arithmetic on [`BigInteger`](crate::BigInteger).

use thiserror::Error;

/// Failure to read a decimal literal.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseBigIntegerError {
    /// A lone `-` with no digits after it.
    #[error("no digits after sign")]
    EmptyDigits,

    #[error("invalid digit {found:?} at byte {index}")]
    InvalidDigit { index: usize, found: char },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BigIntegerError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseBigIntegerError),

    /// The magnitude does not fit in the requested native integer.
    #[error("value out of range for the target integer type")]
    RangeOverflow,

    #[error("division by zero")]
    DivisionByZero,

    #[error("negative shift amount: {0}")]
    NegativeShift(i64),
}

pub type Result<T> = core::result::Result<T, BigIntegerError>;

/// Failure while reading a value from a byte stream.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("failed to read token: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed token: {0}")]
    Parse(#[from] ParseBigIntegerError),
}
