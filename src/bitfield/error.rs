//! Error type for bit resolution.

use thiserror::Error;

/// Reason a value couldn't be resolved into bits.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum BitFieldError {
    /// The input is neither numeric nor the name of a known flag.
    #[error("unknown bit {0}")]
    UnknownBit(String),
    /// Negative integers have no bit representation.
    #[error("bits cannot be negative, got {0}")]
    Negative(i128),
    /// A numeric string with more significant bits than the backing integer
    /// holds.
    #[error("{0} does not fit in 128 bits")]
    Overflow(String),
}
