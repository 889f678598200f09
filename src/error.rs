// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for lattice construction and path search.

use thiserror::Error;

/// Errors reported by the lattice, its inputs and the N-best iterator.
///
/// Every failing operation reports synchronously and leaves the receiver
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LatticeError {
    /// A required argument was unusable: mismatched input variants, an input
    /// for which the vocabulary has no reachable entry, or a missing connection.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An index or range fell outside its container.
    #[error("index {index} is out of range (length {len})")]
    OutOfRange { index: usize, len: usize },

    /// An operation was called in a state that does not support it.
    #[error("logic error: {0}")]
    Logic(&'static str),
}

impl LatticeError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        LatticeError::InvalidArgument(message.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LatticeError>;
