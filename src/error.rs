use thiserror::Error;

use crate::{Digit, Radix};

/// Every way an operation on a [`DigitRing`](crate::DigitRing) can fail.
#[derive(Debug, Error)]
pub enum RingError {
    /// A position argument fell outside the valid range for the ring.
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A digit value is not representable in the radix it was given for.
    #[error("digit {digit} is out of range for base {radix}")]
    InvalidDigit { digit: Digit, radix: Radix },

    /// Text that should hold a non-negative decimal integer did not.
    #[error("invalid decimal number: {0:?}")]
    InvalidFormat(String),

    #[error("negative numbers are not supported")]
    NegativeValue,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A cursor was asked to remove or replace an element it has not returned yet.
    #[error("cursor has no current element")]
    IllegalIteratorState,

    /// The ring was structurally modified behind a cursor's back.
    #[error("ring was modified outside of the cursor")]
    ConcurrentModification,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RingResult<T> = Result<T, RingError>;
