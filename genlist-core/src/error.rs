//! Error types for list operations.

use std::{collections::TryReserveError, fmt};
use thiserror::Error;

/// Result type using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in list operations.
///
/// A failed operation never leaves a list partially modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A required argument was null, absent or zero.
    #[error("unexpected null argument: {0}")]
    NullArgument(&'static str),

    /// A positional index fell outside the valid range for the operation.
    #[error("index out of range: the len is {len} but the index is {index}")]
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of items in the list when the index was rejected.
        len: usize,
    },

    /// A caller-provided buffer is smaller than the list's item size.
    #[error("buffer too short: need {expected} bytes but got {actual}")]
    ShortBuffer {
        /// The list's item size.
        expected: usize,
        /// Length of the buffer that was provided.
        actual: usize,
    },

    /// Growing the slot array or allocating an item block failed.
    #[error("allocation failed: {0}")]
    Alloc(#[from] TryReserveError),
}

impl Error {
    /// Returns the numeric kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NullArgument(_) => ErrorKind::NullArgument,
            Error::OutOfRange { .. } => ErrorKind::OutOfRange,
            Error::ShortBuffer { .. } => ErrorKind::ShortBuffer,
            Error::Alloc(_) => ErrorKind::Alloc,
        }
    }
}

/// Numeric error kinds, as reported by the last-error register.
///
/// `NullArgument` and `OutOfRange` keep the codes of the C interface.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorKind {
    /// No failure has been recorded.
    #[default]
    None = 0,

    /// See [`Error::NullArgument`].
    NullArgument = 1,

    /// See [`Error::OutOfRange`].
    OutOfRange = 2,

    /// See [`Error::ShortBuffer`].
    ShortBuffer = 3,

    /// See [`Error::Alloc`].
    Alloc = 4,
}

impl ErrorKind {
    /// Returns the C-compatible code of this kind.
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Converts a raw code back to a kind. Unknown codes map to `None`.
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(ErrorKind::None),
            1 => Some(ErrorKind::NullArgument),
            2 => Some(ErrorKind::OutOfRange),
            3 => Some(ErrorKind::ShortBuffer),
            4 => Some(ErrorKind::Alloc),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
