//! Error taxonomy for construction-time validation.
//!
//! Every operation that evaluates or interpolates an already-built shape is
//! total (see the crate docs); only construction can fail, and it fails with
//! one of the two variants below.

use thiserror::Error;

/// Construction-time failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// Caller-supplied data violates a documented precondition (vertex
    /// counts, rounding ranges, progress ranges, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An internal post-condition was violated. This always indicates a bug
    /// in this crate rather than in caller input.
    #[error("invalid internal state: {0}")]
    InvalidState(String),
}

impl Error {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub(crate) fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }
}

/// Convenience alias for fallible construction in this crate.
pub type Result<T> = std::result::Result<T, Error>;
