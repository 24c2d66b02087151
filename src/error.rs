//! # Error reporting for container operations
//!
//! A single enum describing every precondition violation the container types
//! can detect. All variants are raised synchronously at the point of
//! violation; there is no recovery or retry behavior in this crate.
use std::error;
use std::fmt;

/// An `Error` is created when a construction, index or arithmetic operation
/// is invoked with arguments that violate its preconditions.
///
/// Each variant carries the offending values so that the message can point at
/// the exact violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A requested length or matrix size exceeds the compile-time maximum.
    InvalidSize {
        /// The length or size that was asked for.
        given: usize,
        /// The largest value that would have been accepted.
        maximum: usize,
    },
    /// A start index for which the end of the valid range `start_index + len`
    /// cannot be represented, leaving the index interval ill-formed.
    InvalidStartIndex {
        /// The offending start index.
        start_index: usize,
        /// The length the range should have covered.
        len: usize,
    },
    /// An index outside the valid range `[start_index, start_index + len)`.
    IndexOutOfRange {
        /// The index that was accessed.
        index: usize,
        /// Lower bound of the valid range.
        start_index: usize,
        /// Number of valid indices from the lower bound.
        len: usize,
    },
    /// A binary operation between operands of incompatible shape.
    SizeMismatch {
        /// Length or size of the left operand.
        left: usize,
        /// Length or size of the right operand.
        right: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidSize { given, maximum } => {
                write!(f, "invalid size {} (maximum is {})", given, maximum)
            },
            Error::InvalidStartIndex { start_index, len } => {
                write!(
                    f,
                    "start index {} with length {} exceeds the addressable range",
                    start_index, len,
                )
            },
            Error::IndexOutOfRange { index, start_index, len } => {
                write!(
                    f,
                    "index {} out of range [{}, {})",
                    index, start_index, start_index + len,
                )
            },
            Error::SizeMismatch { left, right } => {
                write!(f, "operand sizes {} and {} differ", left, right)
            },
        }
    }
}

impl error::Error for Error {
}
